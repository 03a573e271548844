use super::board::Board;
use super::frontier::{Frontier, FrontierUndo};
use super::types::{GameStatus, Position, Stone};
use super::win_detector::check_win;

/// Board, candidate frontier and game progress for one session. The
/// search borrows this mutably and works through the apply/undo move
/// pair; after an undo both board and frontier are exactly as they were
/// before the apply.
#[derive(Debug)]
pub struct GomokuGameState {
    pub board: Board,
    pub frontier: Frontier,
    pub win_length: usize,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

/// Reverses one hypothetical placement.
pub struct MoveUndo {
    pos: Position,
    frontier: FrontierUndo,
}

impl GomokuGameState {
    pub fn new(size: usize, win_length: usize) -> Self {
        Self {
            board: Board::new(size),
            frontier: Frontier::new(),
            win_length,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Places a stone for either side. Returns false without touching
    /// board or frontier when the target is out of bounds or occupied.
    pub fn place_stone(&mut self, x: usize, y: usize, is_computer: bool) -> bool {
        if !self.board.in_bounds(x, y) {
            return false;
        }
        let pos = Position::new(x, y);
        if !self.board.is_empty_at(pos) {
            return false;
        }

        let stone = if is_computer { Stone::Computer } else { Stone::Human };
        self.apply_move(pos, stone);
        self.last_move = Some(pos);
        self.refresh_status(pos);
        true
    }

    /// Scoped mutation for hypothetical search moves: occupies the cell
    /// and updates the frontier, without touching game status.
    pub(crate) fn apply_move(&mut self, pos: Position, stone: Stone) -> MoveUndo {
        self.board.put(pos, stone);
        let frontier = self.frontier.apply_placement(&self.board, pos);
        MoveUndo { pos, frontier }
    }

    pub(crate) fn undo_move(&mut self, undo: MoveUndo) {
        self.board.clear(undo.pos);
        self.frontier.undo(undo.frontier);
    }

    fn refresh_status(&mut self, placed: Position) {
        if check_win(&self.board, placed.x, placed.y, self.win_length) {
            self.status = match self.board.stone_at(placed.x, placed.y) {
                Stone::Computer => GameStatus::ComputerWon,
                Stone::Human => GameStatus::HumanWon,
                Stone::Empty => unreachable!(),
            };
            return;
        }
        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
