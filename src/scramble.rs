use rand::Rng;

use crate::puzzle::{Board, Direction};

/// ゴールからランダムに `steps` 手動かした盤面。直前の手を打ち消す手は選ばない。
/// ゴールから到達できる配置なので必ず解ける（最適解は `steps` 手以下）。
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, steps: usize) -> Board {
    let mut board = Board::goal();
    let mut last: Option<Direction> = None;
    let mut done = 0;
    while done < steps {
        let dirs = Direction::all();
        let dir = dirs[rng.random_range(0..dirs.len())];
        if last.map(Direction::opposite) == Some(dir) {
            continue;
        }
        if let Some(next) = board.apply(dir) {
            board = next;
            last = Some(dir);
            done += 1;
        }
    }
    board
}
