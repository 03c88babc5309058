//! 测试棋谱库
//!
//! 提供命名的走法序列，方便测试、基准和 CLI 演示
//!
//! 命名规范:
//! - *_WIN: 最后一步成五
//! - *_OPEN: 尚未分胜负的局面

// =============================================================================
// 成五 (WIN)
// =============================================================================

/// 黑方横向成五：h8-l8，白方在底线陪走
pub const HORIZONTAL_WIN: &str = "h8 a1 i8 b1 j8 c1 k8 d1 l8";

/// 白方纵向成五：f4-f8
pub const VERTICAL_WIN: &str = "a1 f4 c1 f5 e1 f6 g1 f7 i1 f8";

/// 黑方主对角线成五，中间一子最后落下
pub const DIAGONAL_WIN: &str = "c3 o1 d4 o2 f6 o3 g7 o4 e5";

/// 黑方副对角线成五，从端点补齐
pub const ANTI_DIAGONAL_WIN: &str = "k5 a15 j6 b15 i7 c15 h8 d15 l4";

/// 黑方长连（六子）同样获胜
pub const OVERLINE_WIN: &str = "a6 a11 b6 b11 c6 c11 e6 e12 f6 f12 d6";

// =============================================================================
// 未分胜负 (OPEN)
// =============================================================================

/// 开局两步
pub const OPENING_OPEN: &str = "h8 i9";

/// 黑方四连一端靠边、一端被堵
pub const BLOCKED_FOUR_OPEN: &str = "a1 e1 b1 j10 c1 l10 d1";

/// 所有带名字的棋谱
pub const ALL_POSITIONS: &[(&str, &str)] = &[
    ("horizontal", HORIZONTAL_WIN),
    ("vertical", VERTICAL_WIN),
    ("diagonal", DIAGONAL_WIN),
    ("anti-diagonal", ANTI_DIAGONAL_WIN),
    ("overline", OVERLINE_WIN),
    ("opening", OPENING_OPEN),
    ("blocked-four", BLOCKED_FOUR_OPEN),
];

/// 按名字查找棋谱
pub fn find_position(name: &str) -> Option<&'static str> {
    ALL_POSITIONS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, moves)| *moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::replay;
    use crate::types::{MoveOutcome, Player, Position, DEFAULT_BOARD_SIZE};

    #[test]
    fn test_win_positions() {
        let expected = [
            (HORIZONTAL_WIN, Player::Black),
            (VERTICAL_WIN, Player::White),
            (DIAGONAL_WIN, Player::Black),
            (ANTI_DIAGONAL_WIN, Player::Black),
            (OVERLINE_WIN, Player::Black),
        ];
        for (moves, winner) in expected {
            let board = replay(DEFAULT_BOARD_SIZE, moves).unwrap();
            assert_eq!(board.winner(), Some(winner), "position: {}", moves);
        }
    }

    #[test]
    fn test_open_positions() {
        for moves in [OPENING_OPEN, BLOCKED_FOUR_OPEN] {
            let board = replay(DEFAULT_BOARD_SIZE, moves).unwrap();
            assert!(!board.is_game_over(), "position: {}", moves);
        }
    }

    #[test]
    fn test_win_only_on_last_move() {
        // 去掉最后一步后局面仍未结束，补上这一步即获胜
        let moves: Vec<&str> = HORIZONTAL_WIN.split_whitespace().collect();
        let (last, rest) = moves.split_last().unwrap();
        let mut board = replay(DEFAULT_BOARD_SIZE, &rest.join(" ")).unwrap();
        assert!(!board.is_game_over());

        let pos = Position::from_notation(last).unwrap();
        assert_eq!(board.play(pos), Ok(MoveOutcome::Win(Player::Black)));
    }

    #[test]
    fn test_find_position() {
        assert_eq!(find_position("Horizontal"), Some(HORIZONTAL_WIN));
        assert_eq!(find_position("nope"), None);
    }
}
