use super::evaluator::evaluate;
use super::game_state::GomokuGameState;
use super::types::{Position, ScoredMove, Stone};
use super::win_detector::check_win;

// A five-in-a-row needs five stones from one side, so the earliest
// possible win is nine stones into the game. Skipping the win scan
// before that point keeps shallow nodes cheap.
const MOVES_BEFORE_WIN_IS_POSSIBLE: usize = 9;

const DRAW_VALUE: i32 = 0;

/// Picks the computer's reply: depth-limited minimax with alpha-beta
/// pruning over the candidate frontier, with the win detector cutting
/// terminal lines short and the static evaluation scoring
/// depth-exhausted leaves. `last_move` is the move made just before the
/// computer's turn.
///
/// Panics when the search finds no move to make; the caller is expected
/// to have handled won, drawn and empty positions already.
pub fn calculate_computer_move(
    state: &mut GomokuGameState,
    last_move: Position,
    depth: usize,
) -> ScoredMove {
    let (best, value) = minimax(state, last_move, depth, true, i32::MIN, i32::MAX);
    match best {
        Some(pos) => ScoredMove { pos, value },
        None => panic!("search produced no move; the position was already terminal"),
    }
}

/// One search node. `last_move` is the placement that led here and
/// `is_computers_turn` names the side about to move. Returns the best
/// move found at this node (None when the node is terminal or no
/// candidate improved the bound) and the node's value.
fn minimax(
    state: &mut GomokuGameState,
    last_move: Position,
    depth: usize,
    is_computers_turn: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (Option<Position>, i32) {
    let stones_placed = state.board.stones_placed();

    if stones_placed >= MOVES_BEFORE_WIN_IS_POSSIBLE
        && check_win(&state.board, last_move.x, last_move.y, state.win_length)
    {
        // The side that just moved has won. Offsetting the score by the
        // number of stones placed ranks quick wins and slow losses ahead
        // of equally terminal lines.
        let value = if is_computers_turn {
            i32::MIN + stones_placed as i32
        } else {
            i32::MAX - stones_placed as i32
        };
        return (None, value);
    }

    if state.board.is_full() {
        return (None, DRAW_VALUE);
    }

    if depth == 0 {
        return (None, evaluate(&state.board));
    }

    // Candidates are visited in frontier insertion order, by index over
    // the live frontier: undoing a move restores the frontier exactly,
    // so the first `candidate_count` entries are stable across siblings
    // even though deeper plies mutate the collection in place.
    let candidate_count = state.frontier.len();
    let mut best: Option<Position> = None;
    let mut examined = false;

    if is_computers_turn {
        let mut best_value = i32::MIN;
        for index in 0..candidate_count {
            let pos = state.frontier.get(index);
            if !state.board.is_empty_at(pos) {
                continue;
            }
            examined = true;

            let undo = state.apply_move(pos, Stone::Computer);
            let (_, value) = minimax(state, pos, depth - 1, false, alpha, beta);
            state.undo_move(undo);

            if value > alpha {
                alpha = value;
                best = Some(pos);
                best_value = value;
            }
            if alpha >= beta {
                break;
            }
        }
        assert_node_examined(examined);
        (best, best_value)
    } else {
        let mut best_value = i32::MAX;
        for index in 0..candidate_count {
            let pos = state.frontier.get(index);
            if !state.board.is_empty_at(pos) {
                continue;
            }
            examined = true;

            let undo = state.apply_move(pos, Stone::Human);
            let (_, value) = minimax(state, pos, depth - 1, true, alpha, beta);
            state.undo_move(undo);

            if value < beta {
                beta = value;
                best = Some(pos);
                best_value = value;
            }
            if alpha >= beta {
                break;
            }
        }
        assert_node_examined(examined);
        (best, best_value)
    }
}

fn assert_node_examined(examined: bool) {
    if !examined {
        panic!("search node had no candidate moves; a terminal check should have ended this line");
    }
}
