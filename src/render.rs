use std::fmt::Write;

use crate::search::{Solution, SolveReport, SolveResult};

pub const NO_SOLUTION_MESSAGE: &str = "No solution found within limits.";

/// 古い手から順に「手」と「その手の後の盤面」を並べ、最後に手数を書く。
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    for (dir, board) in solution.moves.iter().zip(solution.boards.iter().skip(1)) {
        let _ = writeln!(out, "Move: {}", dir);
        let _ = writeln!(out, "{}", board);
    }
    let _ = writeln!(out, "Solution found in {} steps", solution.steps());
    out
}

pub fn render_report(report: &SolveReport) -> String {
    match &report.result {
        SolveResult::Solved(solution) => render_solution(solution),
        SolveResult::NoSolution(_) => format!("{}\n", NO_SOLUTION_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::io::parse_board;
    use crate::puzzle::Board;
    use crate::search::Solver;

    #[test]
    fn test_render_one_step() {
        let board = parse_board("1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 15").unwrap();
        let solver = Solver::new(SolverConfig::default().with_workers(2)).unwrap();
        let text = render_report(&solver.solve(board));
        assert_eq!(
            text,
            "Move: right\n\
             [1, 2, 3, 4]\n\
             [5, 6, 7, 8]\n\
             [9, 10, 11, 12]\n\
             [13, 14, 15, 0]\n\
             \n\
             Solution found in 1 steps\n"
        );
    }

    #[test]
    fn test_render_zero_steps() {
        let solver = Solver::new(SolverConfig::default()).unwrap();
        let text = render_report(&solver.solve(Board::goal()));
        assert_eq!(text, "Solution found in 0 steps\n");
    }

    #[test]
    fn test_render_no_solution() {
        let mut tiles = *Board::goal().tiles();
        tiles.swap(13, 14);
        let board = Board::from_tiles(tiles).unwrap();
        let solver = Solver::new(SolverConfig::default().with_bound_cap(4)).unwrap();
        let text = render_report(&solver.solve(board));
        assert_eq!(text, "No solution found within limits.\n");
    }
}
