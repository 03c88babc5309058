//! Gomoku (five-in-a-row) Engine
//!
//! 五子棋规则引擎 - 落子、胜负判定、悔棋，支持棋谱记法

pub mod board;
pub mod error;
pub mod notation;
pub mod session;
pub mod test_positions;
pub mod types;

pub use board::Board;
pub use error::{BoardError, MoveError, NotationError, UndoError};
pub use notation::{board_layout, parse_moves, render_board, replay};
pub use session::{Request, Response, Session};
pub use types::{
    Cell, GameState, GameStatus, MoveOutcome, Player, Position, DEFAULT_BOARD_SIZE,
    MAX_BOARD_SIZE, WIN_LENGTH,
};
