use std::fmt;
use std::sync::Arc;

pub const SIDE: usize = 4;
pub const CELLS: usize = SIDE * SIDE;

/// 空白の移動方向。並びは探索時の子ノードの生成順そのもの。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const fn all() -> [Direction; 4] {
        [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ]
    }

    /// (drow, dcol)
    pub const fn to_offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 盤面検証のエラー型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardValidation {
    /// 0..=15 の範囲外のタイル
    OutOfRange { index: usize, value: u8 },
    /// 同じタイルが 2 回以上現れる
    Duplicate { value: u8 },
    /// 空白 (0) がちょうど 1 個でない
    BlankCount(usize),
}

impl fmt::Display for BoardValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardValidation::OutOfRange { index, value } => {
                write!(f, "tile {} at cell {} is outside 0..=15", value, index)
            }
            BoardValidation::Duplicate { value } => write!(f, "tile {} appears more than once", value),
            BoardValidation::BlankCount(n) => write!(f, "expected exactly one blank, found {}", n),
        }
    }
}

impl std::error::Error for BoardValidation {}

/// 4x4 の盤面。`tiles` は行優先、0 が空白。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// 検証付きの構築。permutation of 0..15 でなければ Err。
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, BoardValidation> {
        let mut seen = [false; CELLS];
        let mut blanks = 0usize;
        let mut blank = 0u8;
        for (index, &value) in tiles.iter().enumerate() {
            if value as usize >= CELLS {
                return Err(BoardValidation::OutOfRange { index, value });
            }
            if value == 0 {
                blanks += 1;
                blank = index as u8;
            }
            if seen[value as usize] {
                if value == 0 {
                    continue;
                }
                return Err(BoardValidation::Duplicate { value });
            }
            seen[value as usize] = true;
        }
        if blanks != 1 {
            return Err(BoardValidation::BlankCount(blanks));
        }
        Ok(Self { tiles, blank })
    }

    pub fn goal() -> Self {
        let mut tiles = [0u8; CELLS];
        for (i, t) in tiles.iter_mut().enumerate().take(CELLS - 1) {
            *t = (i + 1) as u8;
        }
        Self {
            tiles,
            blank: (CELLS - 1) as u8,
        }
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIDE + col]
    }

    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[0u8; SIDE]; SIDE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.get(r, c);
            }
        }
        rows
    }

    /// (row, col)
    pub fn blank(&self) -> (usize, usize) {
        let b = self.blank as usize;
        (b / SIDE, b % SIDE)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::goal()
    }

    /// 空白を `dir` 方向に動かした盤面。盤外なら None。
    pub fn apply(&self, dir: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (dr, dc) = dir.to_offset();
        let r1 = row as i32 + dr;
        let c1 = col as i32 + dc;
        if !(0..SIDE as i32).contains(&r1) || !(0..SIDE as i32).contains(&c1) {
            return None;
        }
        let to = r1 as usize * SIDE + c1 as usize;
        let mut tiles = self.tiles;
        tiles.swap(self.blank as usize, to);
        Some(Board {
            tiles,
            blank: to as u8,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(
                f,
                "[{}]",
                row.iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }
        Ok(())
    }
}

/// 盤面の評価関数。許容的 (admissible) であること。
pub type Heuristic = fn(&Board) -> u32;

/// 各タイルの現在位置と目標位置のマンハッタン距離の総和（空白は除く）
pub fn manhattan(board: &Board) -> u32 {
    let mut sum = 0u32;
    for (i, &v) in board.tiles.iter().enumerate() {
        if v == 0 {
            continue;
        }
        let target = (v - 1) as usize;
        let (row, col) = (i / SIDE, i % SIDE);
        sum += (row.abs_diff(target / SIDE) + col.abs_diff(target % SIDE)) as u32;
    }
    sum
}

pub type NodeRef = Arc<Node>;

/// 探索木の 1 ノード。構築後は不変で、親への参照を経路復元に使う。
#[derive(Debug)]
pub struct Node {
    pub board: Board,
    pub depth: u32,
    pub parent: Option<NodeRef>,
    pub last_move: Option<Direction>,
    pub h: u32,
}

impl Node {
    pub fn root(board: Board, heuristic: Heuristic) -> NodeRef {
        Arc::new(Node {
            board,
            depth: 0,
            parent: None,
            last_move: None,
            h: heuristic(&board),
        })
    }

    /// 合法な子ノードを left, up, right, down の順で生成する。
    /// 直前の局面に戻る手（空白が親の空白位置へ戻る手）は除外。
    pub fn children(self: &Arc<Self>, heuristic: Heuristic) -> Vec<NodeRef> {
        let back = self.parent.as_ref().map(|p| p.board.blank());
        let mut children = Vec::with_capacity(4);
        for dir in Direction::all() {
            let Some(board) = self.board.apply(dir) else {
                continue;
            };
            if Some(board.blank()) == back {
                continue;
            }
            children.push(Arc::new(Node {
                board,
                depth: self.depth + 1,
                parent: Some(Arc::clone(self)),
                last_move: Some(dir),
                h: heuristic(&board),
            }));
        }
        children
    }

    /// ルートからこのノードまでの経路（ルートを含む、古い順）
    pub fn path(self: &Arc<Self>) -> Vec<NodeRef> {
        let mut path = vec![Arc::clone(self)];
        let mut current = self.parent.clone();
        while let Some(node) = current {
            current = node.parent.clone();
            path.push(node);
        }
        path.reverse();
        path
    }

    pub fn moves(self: &Arc<Self>) -> Vec<Direction> {
        self.path().iter().filter_map(|n| n.last_move).collect()
    }
}
