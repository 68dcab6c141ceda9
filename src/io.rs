use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::puzzle::{Board, BoardValidation, CELLS};

#[derive(Debug)]
pub enum ParseError {
    /// 整数の個数が 16 (バッチなら 16 の倍数) でない
    TokenCount(usize),
    /// 整数として読めないトークン
    BadToken { index: usize, token: String },
    /// 0..=15 の範囲外の整数（i64 に収まらない桁数も含む）
    OutOfRange { index: usize, token: String },
    /// 盤面として不正（重複・空白の個数）
    Invalid { board: usize, reason: BoardValidation },
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::TokenCount(n) => {
                write!(f, "expected {} integers per board, found {} in total", CELLS, n)
            }
            ParseError::BadToken { index, token } => {
                write!(f, "token #{} '{}' is not an integer", index, token)
            }
            ParseError::OutOfRange { index, token } => {
                write!(f, "token #{} ({}) is outside 0..=15", index, token)
            }
            ParseError::Invalid { board, reason } => write!(f, "board #{}: {}", board, reason),
            ParseError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            ParseError::Invalid { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        ParseError::Io(e)
    }
}

impl From<ParseError> for io::Error {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

/// 符号付きの 10 進整数の形をしているか
fn is_integer_token(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_tokens(text: &str) -> Result<Vec<u8>, ParseError> {
    text.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            if !is_integer_token(token) {
                return Err(ParseError::BadToken {
                    index,
                    token: token.to_string(),
                });
            }
            match token.parse::<i64>() {
                Ok(value) if (0..CELLS as i64).contains(&value) => Ok(value as u8),
                _ => Err(ParseError::OutOfRange {
                    index,
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

fn to_board(chunk: &[u8], board: usize) -> Result<Board, ParseError> {
    let mut tiles = [0u8; CELLS];
    tiles.copy_from_slice(chunk);
    Board::from_tiles(tiles).map_err(|reason| ParseError::Invalid { board, reason })
}

/// 空白区切りの 16 個の整数（行優先、0 が空白）を Board に変換する。
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let values = parse_tokens(text)?;
    if values.len() != CELLS {
        return Err(ParseError::TokenCount(values.len()));
    }
    to_board(&values, 0)
}

/// 16 の倍数個の整数を先頭から 16 個ずつ Board に変換する。
pub fn parse_boards(text: &str) -> Result<Vec<Board>, ParseError> {
    let values = parse_tokens(text)?;
    if values.is_empty() || values.len() % CELLS != 0 {
        return Err(ParseError::TokenCount(values.len()));
    }
    values
        .chunks(CELLS)
        .enumerate()
        .map(|(i, chunk)| to_board(chunk, i))
        .collect()
}

/// ファイルから盤面を読み込む。1 ファイルに複数の盤面を並べてもよい。
pub fn parse_file_to_boards<P: AsRef<Path>>(path: P) -> Result<Vec<Board>, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_boards(&text)
}

/// 1 行 16 個の整数で盤面を書き出す（parse_boards で読み戻せる形式）
pub fn board_to_line(board: &Board) -> String {
    board
        .tiles()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
