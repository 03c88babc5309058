//! 五子棋棋盘引擎
//!
//! 棋盘、走棋记录、轮次和胜负状态都由 `Board` 持有，
//! 只能通过 `make_move` / `undo_move` / `reset` 修改。

use crate::error::{BoardError, MoveError, UndoError};
use crate::types::{
    Cell, GameState, GameStatus, MoveOutcome, Player, Position, DEFAULT_BOARD_SIZE,
    MAX_BOARD_SIZE, WIN_LENGTH,
};

/// 连线检测的四个方向：横、竖、主对角、副对角
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// 棋盘引擎
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// size * size 个格子，按行存储
    cells: Vec<Cell>,
    /// 走棋记录，按时间顺序
    moves: Vec<Position>,
    status: GameStatus,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// 创建默认 15x15 棋盘
    pub fn new() -> Board {
        Board::empty(DEFAULT_BOARD_SIZE)
    }

    /// 创建指定边长的棋盘
    pub fn with_size(size: usize) -> Result<Board, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Board::empty(size))
    }

    fn empty(size: usize) -> Board {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            moves: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// 当前轮到的棋手
    ///
    /// 对局进行中由走棋记录的奇偶性推出；对局结束后停留在获胜方。
    pub fn current_player(&self) -> Player {
        match self.status {
            GameStatus::Won(winner) => winner,
            GameStatus::InProgress => Player::to_move_after(self.moves.len()),
        }
    }

    /// 获取某位置的格子，越界返回 None
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !pos.is_within(self.size) {
            return None;
        }
        Some(self.cells[pos.to_index(self.size)])
    }

    /// 最近一步
    pub fn last_move(&self) -> Option<Position> {
        self.moves.last().copied()
    }

    /// 落子
    ///
    /// 失败时引擎状态不变。成五时进入结束状态，轮次不再切换。
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let pos = Position::new(row, col);
        if !pos.is_within(self.size) {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }

        let idx = pos.to_index(self.size);
        if !self.cells[idx].is_empty() {
            return Err(MoveError::CellOccupied(pos));
        }

        let mover = self.current_player();
        self.cells[idx] = mover.stone();
        self.moves.push(pos);

        if self.check_win(pos, mover) {
            self.status = GameStatus::Won(mover);
            return Ok(MoveOutcome::Win(mover));
        }

        Ok(MoveOutcome::Ok)
    }

    /// 按位置落子
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.make_move(pos.row, pos.col)
    }

    /// 悔棋：撤销最近一个回合（双方各一步）
    ///
    /// 对局结束后不允许悔棋。
    pub fn undo_move(&mut self) -> Result<(), UndoError> {
        if self.moves.len() < 2 {
            return Err(UndoError::InsufficientHistory);
        }
        if self.status.is_over() {
            return Err(UndoError::GameOver);
        }

        for _ in 0..2 {
            if let Some(pos) = self.moves.pop() {
                let idx = pos.to_index(self.size);
                self.cells[idx] = Cell::Empty;
            }
        }
        self.status = GameStatus::InProgress;

        Ok(())
    }

    /// 重置为初始局面
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.moves.clear();
        self.status = GameStatus::InProgress;
    }

    /// 检查刚落下的 `pos` 是否让 `player` 连成五子
    ///
    /// 只沿四个方向统计经过 `pos` 的连续同色子，不扫描整盘。
    pub fn check_win(&self, pos: Position, player: Player) -> bool {
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.run_length(pos, player, dr, dc) >= WIN_LENGTH)
    }

    /// 经过 `pos` 的某一方向上的连子长度（含 `pos` 本身）
    fn run_length(&self, pos: Position, player: Player, dr: i32, dc: i32) -> usize {
        1 + self.count_direction(pos, player, dr, dc) + self.count_direction(pos, player, -dr, -dc)
    }

    fn count_direction(&self, pos: Position, player: Player, dr: i32, dc: i32) -> usize {
        let stone = player.stone();
        let mut count = 0;
        let mut cur = pos.offset(dr, dc);
        while self.cell(cur) == Some(stone) {
            count += 1;
            cur = cur.offset(dr, dc);
        }
        count
    }

    /// 棋盘快照（按行的二维拷贝）
    pub fn get_board(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    /// 走棋记录快照
    pub fn get_move_history(&self) -> Vec<Position> {
        self.moves.clone()
    }

    /// 完整局面快照
    pub fn get_game_state(&self) -> GameState {
        GameState {
            board: self.get_board(),
            current_player: self.current_player(),
            game_over: self.status.is_over(),
            winner: self.status.winner(),
            move_count: self.moves.len(),
            moves: self.get_move_history(),
        }
    }
}
