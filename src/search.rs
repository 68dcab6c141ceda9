pub mod core;
pub mod driver;
pub mod parallel;
pub mod sequential;

pub use self::core::{ChildGen, SearchCtx, SearchOutcome, SearchStats, SearchValue, StatsSnapshot};
pub use driver::{NoSolution, Solution, SolveError, SolveReport, SolveResult, Solver};
pub use parallel::search_parallel;
pub use sequential::search_serial;
