//! 引擎错误类型
//!
//! 所有失败都可恢复：返回错误时引擎状态保持不变。

use crate::types::{Position, MAX_BOARD_SIZE};

/// 落子失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("position {0} is already occupied")]
    CellOccupied(Position),

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl MoveError {
    /// 机器可读的原因码
    pub fn reason(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "out_of_bounds",
            MoveError::CellOccupied(_) => "cell_occupied",
            MoveError::GameAlreadyOver => "game_already_over",
        }
    }
}

/// 悔棋失败原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("not enough moves to undo")]
    InsufficientHistory,

    #[error("cannot undo after game over")]
    GameOver,
}

impl UndoError {
    pub fn reason(&self) -> &'static str {
        match self {
            UndoError::InsufficientHistory => "insufficient_history",
            UndoError::GameOver => "game_over",
        }
    }
}

/// 棋盘构造失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),
}

/// 棋谱解析 / 回放失败
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("move {index} ({coord}) rejected: {source}")]
    Rejected {
        index: usize,
        coord: String,
        source: MoveError,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}
