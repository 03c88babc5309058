//! 对局会话
//!
//! 展示层（CLI / server 模式）通过请求-响应与引擎交互，
//! 这里负责把失败原因翻译成面向用户的消息。

use crate::board::Board;
use crate::error::{BoardError, MoveError, UndoError};
use crate::notation::{board_layout, format_moves};
use crate::types::{GameState, MoveOutcome, Player, Position};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Server 模式的请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    pub cmd: String,
    #[serde(default)]
    pub row: Option<i32>,
    #[serde(default)]
    pub col: Option<i32>,
    /// 棋谱坐标（如 "h8"），与 row/col 二选一
    #[serde(default)]
    pub pos: Option<String>,
}

impl Request {
    pub fn new(cmd: &str) -> Self {
        Request {
            cmd: cmd.to_string(),
            ..Default::default()
        }
    }

    pub fn play(row: i32, col: i32) -> Self {
        Request {
            cmd: "move".to_string(),
            row: Some(row),
            col: Some(col),
            pos: None,
        }
    }
}

/// Server 模式的响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub ok: bool,
    /// "ok" / "win"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Player>,
    /// 面向用户的错误消息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 机器可读的原因码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GameState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moves: Option<String>,
}

impl Response {
    fn success() -> Self {
        Self {
            ok: true,
            ..Default::default()
        }
    }

    fn failure(reason: &str, msg: String) -> Self {
        Self {
            ok: false,
            reason: Some(reason.to_string()),
            error: Some(msg),
            ..Default::default()
        }
    }

    /// 请求本身无效（未知命令、缺参数等）
    pub fn error(msg: &str) -> Self {
        Self::failure("bad_request", msg.to_string())
    }
}

/// 一局对局会话，独占一个引擎实例
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
}

impl Session {
    pub fn new(size: usize) -> Result<Session, BoardError> {
        Ok(Session {
            board: Board::with_size(size)?,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 处理一条请求，`quit` 返回 None
    pub fn handle(&mut self, request: &Request) -> Option<Response> {
        debug!("request: {:?}", request);
        let response = match request.cmd.as_str() {
            "move" => self.handle_move(request),
            "undo" => self.handle_undo(),
            "reset" => self.handle_reset(),
            "state" => Response {
                state: Some(self.board.get_game_state()),
                ..Response::success()
            },
            "board" => Response {
                layout: Some(board_layout(&self.board)),
                ..Response::success()
            },
            "history" => Response {
                moves: Some(format_moves(&self.board.get_move_history())),
                ..Response::success()
            },
            "quit" => return None,
            _ => Response::error(&format!("Unknown command: {}", request.cmd)),
        };
        Some(response)
    }

    fn handle_move(&mut self, request: &Request) -> Response {
        let pos = match (&request.pos, request.row, request.col) {
            (Some(s), _, _) => match Position::from_notation(s) {
                Some(p) => p,
                None => return Response::error(&format!("Invalid coordinate: {}", s)),
            },
            (None, Some(row), Some(col)) => Position::new(row, col),
            _ => return Response::error("move requires 'pos' or both 'row' and 'col'"),
        };

        match self.board.play(pos) {
            Ok(MoveOutcome::Ok) => {
                debug!("move {}: {}", self.board.move_count(), pos);
                Response {
                    result: Some("ok".to_string()),
                    layout: Some(board_layout(&self.board)),
                    ..Response::success()
                }
            }
            Ok(MoveOutcome::Win(winner)) => {
                info!(
                    "game over: {} wins with {} after {} moves",
                    winner,
                    pos,
                    self.board.move_count()
                );
                Response {
                    result: Some("win".to_string()),
                    winner: Some(winner),
                    layout: Some(board_layout(&self.board)),
                    ..Response::success()
                }
            }
            Err(e) => Response::failure(e.reason(), user_message_for_move(&e)),
        }
    }

    fn handle_undo(&mut self) -> Response {
        match self.board.undo_move() {
            Ok(()) => Response {
                result: Some("ok".to_string()),
                layout: Some(board_layout(&self.board)),
                ..Response::success()
            },
            Err(e) => Response::failure(e.reason(), user_message_for_undo(&e)),
        }
    }

    fn handle_reset(&mut self) -> Response {
        info!("reset after {} moves", self.board.move_count());
        self.board.reset();
        Response {
            layout: Some(board_layout(&self.board)),
            ..Response::success()
        }
    }
}

fn user_message_for_move(err: &MoveError) -> String {
    match err {
        MoveError::OutOfBounds { .. } => "Invalid coordinates".to_string(),
        MoveError::CellOccupied(pos) => format!("Position {} already occupied", pos),
        MoveError::GameAlreadyOver => "Game is over, start a new game".to_string(),
    }
}

fn user_message_for_undo(err: &UndoError) -> String {
    match err {
        UndoError::InsufficientHistory => "Not enough moves to undo".to_string(),
        UndoError::GameOver => "Cannot undo after game over".to_string(),
    }
}
