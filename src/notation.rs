//! 棋谱记法
//!
//! 坐标：列字母 + 1 起的行号，如 `h8` 即 (row 7, col 7)。
//!
//! 走法序列：空白或逗号分隔的坐标列表，如 `h8 i9 h9`。
//!
//! 局面串（只输出，不解析）：`<棋盘> <轮次>`
//! - 棋盘按行号从小到大，行间以 `/` 分隔
//! - 黑子：X，白子：O，连续空格：数字（可多位）
//! - 轮次：b / w，对局结束为 `-`

use crate::board::Board;
use crate::error::NotationError;
use crate::types::{Cell, MoveOutcome, Position};

/// 解析单个坐标
pub fn parse_coord(s: &str) -> Result<Position, NotationError> {
    Position::from_notation(s).ok_or_else(|| NotationError::InvalidCoordinate(s.to_string()))
}

/// 解析走法序列
pub fn parse_moves(s: &str) -> Result<Vec<Position>, NotationError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(parse_coord)
        .collect()
}

/// 生成走法序列字符串
pub fn format_moves(moves: &[Position]) -> String {
    moves
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 在新棋盘上依次执行走法序列
///
/// 每一步都经过 `make_move` 校验，第一处非法走法即返回错误。
/// 终局后的多余走法同样视为非法。
pub fn replay(size: usize, moves: &str) -> Result<Board, NotationError> {
    let mut board = Board::with_size(size)?;
    for (i, pos) in parse_moves(moves)?.into_iter().enumerate() {
        board
            .play(pos)
            .map_err(|source| NotationError::Rejected {
                index: i + 1,
                coord: pos.to_string(),
                source,
            })?;
    }
    Ok(board)
}

/// 执行一步并返回结果描述（用于 CLI 输出）
pub fn describe_outcome(pos: Position, outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Ok => format!("{} OK", pos),
        MoveOutcome::Win(p) => format!("{} WIN ({} wins)", pos, p),
    }
}

/// 生成紧凑局面串
pub fn board_layout(board: &Board) -> String {
    let rows: Vec<String> = board
        .get_board()
        .iter()
        .map(|row| {
            let mut s = String::new();
            let mut empty = 0;
            for cell in row {
                if cell.is_empty() {
                    empty += 1;
                } else {
                    if empty > 0 {
                        s.push_str(&empty.to_string());
                        empty = 0;
                    }
                    s.push(cell.to_char());
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            s
        })
        .collect();

    let turn = if board.is_game_over() {
        '-'
    } else {
        board.current_player().to_char()
    };

    format!("{} {}", rows.join("/"), turn)
}

/// 生成带坐标的文本棋盘
///
/// 行号从大到小自上而下排列，最近一步用括号标出。
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let grid = board.get_board();
    let last = board.last_move();
    let mut out = String::new();

    for row in (0..size).rev() {
        out.push_str(&format!("{:>2} ", row + 1));
        for col in 0..size {
            let cell = grid[row][col];
            let pos = Position::new(row as i32, col as i32);
            if last == Some(pos) {
                out.push('(');
                out.push(cell.to_char());
                out.push(')');
            } else {
                out.push(' ');
                out.push(cell.to_char());
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("   ");
    for col in 0..size {
        out.push(' ');
        out.push((b'a' + col as u8) as char);
        out.push(' ');
    }
    out.push('\n');
    out
}

/// 统计某种格子的数量
pub fn count_cells(board: &Board, kind: Cell) -> usize {
    board
        .get_board()
        .iter()
        .flatten()
        .filter(|c| **c == kind)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoardError, MoveError};
    use crate::types::Player;

    #[test]
    fn test_parse_moves() {
        let moves = parse_moves("h8 i9,\th9  A1").unwrap();
        assert_eq!(
            moves,
            vec![
                Position::new(7, 7),
                Position::new(8, 8),
                Position::new(8, 7),
                Position::new(0, 0),
            ]
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert_eq!(
            parse_moves("h8 zz"),
            Err(NotationError::InvalidCoordinate("zz".to_string()))
        );
    }

    #[test]
    fn test_format_moves() {
        let moves = vec![Position::new(7, 7), Position::new(0, 14)];
        assert_eq!(format_moves(&moves), "h8 o1");
        assert_eq!(parse_moves(&format_moves(&moves)).unwrap(), moves);
    }

    #[test]
    fn test_replay_win() {
        let board = replay(15, "h8 a1 i8 b1 j8 c1 k8 d1 l8").unwrap();
        assert_eq!(board.winner(), Some(Player::Black));
        assert_eq!(board.move_count(), 9);
        assert_eq!(count_cells(&board, Cell::Black), 5);
        assert_eq!(count_cells(&board, Cell::White), 4);
    }

    #[test]
    fn test_replay_errors() {
        assert_eq!(
            replay(15, "h8 h8"),
            Err(NotationError::Rejected {
                index: 2,
                coord: "h8".to_string(),
                source: MoveError::CellOccupied(Position::new(7, 7)),
            })
        );
        assert!(matches!(
            replay(9, "j1"),
            Err(NotationError::Rejected {
                source: MoveError::OutOfBounds { .. },
                ..
            })
        ));
        assert!(matches!(
            replay(15, "h8 a1 i8 b1 j8 c1 k8 d1 l8 e1"),
            Err(NotationError::Rejected {
                index: 10,
                source: MoveError::GameAlreadyOver,
                ..
            })
        ));
        assert_eq!(
            replay(0, "a1"),
            Err(NotationError::Board(BoardError::InvalidSize(0)))
        );
    }

    #[test]
    fn test_board_layout() {
        let board = Board::with_size(5).unwrap();
        assert_eq!(board_layout(&board), "5/5/5/5/5 b");

        let board = replay(5, "a1 e1 c3").unwrap();
        assert_eq!(board_layout(&board), "X3O/5/2X2/5/5 w");

        let board = replay(15, "h8 a1 i8 b1 j8 c1 k8 d1 l8").unwrap();
        assert_eq!(
            board_layout(&board),
            "OOOO11/15/15/15/15/15/15/7XXXXX3/15/15/15/15/15/15/15 -"
        );
    }

    #[test]
    fn test_render_board() {
        let board = replay(3, "b2").unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], " 3  .  .  . ");
        assert_eq!(lines[1], " 2  . (X) . ");
        assert_eq!(lines[2], " 1  .  .  . ");
        assert_eq!(lines[3], "    a  b  c ");
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(Position::new(7, 7), MoveOutcome::Ok), "h8 OK");
        assert_eq!(
            describe_outcome(Position::new(7, 11), MoveOutcome::Win(Player::Black)),
            "l8 WIN (Black wins)"
        );
    }
}
