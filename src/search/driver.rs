use std::fmt;
use std::time::{Duration, Instant};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::config::SolverConfig;
use crate::puzzle::{Board, Direction, Node, NodeRef};
use crate::search::core::{SearchCtx, SearchStats, SearchValue, StatsSnapshot};
use crate::search::parallel::search_parallel;

#[derive(Debug)]
pub enum SolveError {
    /// ワーカープールを作れなかった
    Pool(ThreadPoolBuildError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Pool(e) => write!(f, "failed to build worker pool: {}", e),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Pool(e) => Some(e),
        }
    }
}

impl From<ThreadPoolBuildError> for SolveError {
    fn from(e: ThreadPoolBuildError) -> Self {
        SolveError::Pool(e)
    }
}

/// 解が見つからなかった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSolution {
    /// どの枝にも次の bound 候補が残らなかった
    Exhausted,
    /// bound が上限を超えた（解なしの配置はここで止まる）
    BoundCapExceeded { bound: u32, cap: u32 },
}

/// 見つかった解。`boards[0]` が初期盤面、`boards[i]` が `moves[i - 1]` 適用後。
#[derive(Debug, Clone)]
pub struct Solution {
    pub moves: Vec<Direction>,
    pub boards: Vec<Board>,
}

impl Solution {
    fn from_node(node: &NodeRef) -> Self {
        let path = node.path();
        Self {
            moves: path.iter().filter_map(|n| n.last_move).collect(),
            boards: path.iter().map(|n| n.board).collect(),
        }
    }

    pub fn steps(&self) -> usize {
        self.moves.len()
    }

    pub fn initial(&self) -> &Board {
        &self.boards[0]
    }

    pub fn last(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }
}

#[derive(Debug, Clone)]
pub enum SolveResult {
    Solved(Solution),
    NoSolution(NoSolution),
}

/// 1 回の solve の結果と統計
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub result: SolveResult,
    /// 探索した bound の列（狭義単調増加）
    pub bounds: Vec<u32>,
    pub stats: StatsSnapshot,
    pub elapsed: Duration,
}

impl SolveReport {
    pub fn solution(&self) -> Option<&Solution> {
        match &self.result {
            SolveResult::Solved(s) => Some(s),
            SolveResult::NoSolution(_) => None,
        }
    }
}

/// IDA* ドライバ。ワーカープールを所有し、drop 時にプールも終了する。
pub struct Solver {
    config: SolverConfig,
    pool: ThreadPool,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Result<Self, SolveError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers.max(1))
            .thread_name(|i| format!("ida-worker-{i}"))
            .build()?;
        Ok(Self { config, pool })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, board: Board) -> SolveReport {
        let start = Instant::now();
        let heuristic = self.config.heuristic;
        let stats = SearchStats::default();
        let ctx = SearchCtx::new(heuristic, &stats);
        let root = Node::root(board, heuristic);
        let budget = self.config.workers;

        let mut bound = root.h;
        let mut bounds = vec![];
        let result = loop {
            bounds.push(bound);
            let outcome = self
                .pool
                .install(|| search_parallel(&root, 0, bound, budget, &ctx));

            match (outcome.value, outcome.node) {
                (SearchValue::Solved, Some(node)) => {
                    break SolveResult::Solved(Solution::from_node(&node));
                }
                (SearchValue::Solved, None) | (SearchValue::Exhausted, _) => {
                    if self.config.verbose > 0 {
                        println!("info: bound {} finished, no candidates left", bound);
                    }
                    break SolveResult::NoSolution(NoSolution::Exhausted);
                }
                (SearchValue::Exceeded(next), _) => {
                    debug_assert!(next > bound);
                    if self.config.verbose > 0 {
                        println!(
                            "info: bound {} finished. increasing bound to {}",
                            bound, next
                        );
                    }
                    bound = next;
                }
            }

            if bound > self.config.bound_cap {
                if self.config.verbose > 0 {
                    println!(
                        "info: bound {} exceeded safety limit ({}). stopping.",
                        bound, self.config.bound_cap
                    );
                }
                break SolveResult::NoSolution(NoSolution::BoundCapExceeded {
                    bound,
                    cap: self.config.bound_cap,
                });
            }
        };

        SolveReport {
            result,
            bounds,
            stats: stats.snapshot(),
            elapsed: start.elapsed(),
        }
    }
}
