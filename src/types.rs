//! 五子棋核心类型定义
//!
//! 定义棋盘引擎使用的所有基础数据类型

use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认棋盘边长
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// 最大棋盘边长（列用 a-z 表示）
pub const MAX_BOARD_SIZE: usize = 26;

/// 连成多少子获胜
pub const WIN_LENGTH: usize = 5;

/// 棋手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// 获取对方
    pub fn opposite(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 根据已走步数推出轮到谁（黑先）
    pub fn to_move_after(move_count: usize) -> Player {
        if move_count % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// 该棋手落子后格子的值
    pub fn stone(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// 单字符表示（b / w）
    pub fn to_char(&self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// 格子状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 格子上棋子的主人
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// 棋盘图示字符
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

/// 棋盘位置 (row, col)，0 起
///
/// 坐标用有符号整数保存，调用方传入的越界值（含负数）
/// 在引擎里统一按 `OutOfBounds` 处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// 检查位置是否在边长为 `size` 的棋盘内
    #[inline]
    pub fn is_within(&self, size: usize) -> bool {
        let size = size as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// 位置加偏移量
    #[inline]
    pub fn offset(&self, row_delta: i32, col_delta: i32) -> Position {
        Position {
            row: self.row + row_delta,
            col: self.col + col_delta,
        }
    }

    /// 转换为一维索引（调用前须保证在棋盘内）
    #[inline]
    pub fn to_index(&self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    /// 从棋谱坐标解析（如 "h8"，列字母 + 1 起的行号）
    pub fn from_notation(s: &str) -> Option<Position> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_char = chars.next()?.to_ascii_lowercase();
        if !col_char.is_ascii_lowercase() {
            return None;
        }
        let row_str = chars.as_str();
        if row_str.is_empty() || !row_str.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let row: i32 = row_str.parse().ok()?;
        if row == 0 {
            return None;
        }
        let col = (col_char as u8 - b'a') as i32;
        Some(Position { row: row - 1, col })
    }

    /// 转换为棋谱坐标（如 "h8"），列超出 a-z 时返回 None
    pub fn to_notation(&self) -> Option<String> {
        if !(0..MAX_BOARD_SIZE as i32).contains(&self.col) || self.row < 0 {
            return None;
        }
        let col_char = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", col_char, self.row + 1))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(p) => Some(*p),
        }
    }
}

/// 成功落子的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// 落子成功，轮到对方
    Ok,
    /// 落子成五，对局结束
    Win(Player),
}

impl MoveOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, MoveOutcome::Win(_))
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Ok => write!(f, "OK"),
            MoveOutcome::Win(_) => write!(f, "WIN"),
        }
    }
}

/// 完整局面快照（全部为拷贝，不引用引擎内部数据）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub move_count: usize,
    pub moves: Vec<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_notation() {
        assert_eq!(Position::from_notation("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_notation("h8"), Some(Position::new(7, 7)));
        assert_eq!(Position::from_notation("O15"), Some(Position::new(14, 14)));
        assert_eq!(Position::from_notation("a0"), None);
        assert_eq!(Position::from_notation("8h"), None);
        assert_eq!(Position::from_notation("h"), None);
        assert_eq!(Position::from_notation("h8x"), None);
    }

    #[test]
    fn test_position_to_notation() {
        assert_eq!(Position::new(0, 0).to_notation().as_deref(), Some("a1"));
        assert_eq!(Position::new(7, 7).to_notation().as_deref(), Some("h8"));
        assert_eq!(Position::new(-1, 0).to_notation(), None);
        assert_eq!(Position::new(0, 30).to_string(), "(0, 30)");
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_within(15));
        assert!(Position::new(14, 14).is_within(15));
        assert!(!Position::new(15, 0).is_within(15));
        assert!(!Position::new(0, -1).is_within(15));
    }

    #[test]
    fn test_player_parity() {
        assert_eq!(Player::to_move_after(0), Player::Black);
        assert_eq!(Player::to_move_after(1), Player::White);
        assert_eq!(Player::to_move_after(4), Player::Black);
        assert_eq!(Player::Black.opposite(), Player::White);
        assert_eq!(Player::White.stone(), Cell::White);
        assert_eq!(Cell::Black.owner(), Some(Player::Black));
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&GameStatus::Won(Player::Black)).unwrap();
        assert_eq!(json, r#"{"won":"black"}"#);
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            r#""in_progress""#
        );
    }
}
