use super::board::Board;
use super::types::Stone;

/// Static heuristic for a whole board. Every maximal run of k identical
/// stones contributes k^2 to its owner's subtotal, and the result is the
/// computer total minus the human total summed over rows, columns and
/// both diagonal directions. Larger favors the computer.
pub fn evaluate(board: &Board) -> i32 {
    evaluate_rows(board) + evaluate_columns(board) + evaluate_diagonals(board)
}

fn evaluate_rows(board: &Board) -> i32 {
    let size = board.size();
    let mut score = 0;
    for y in 0..size {
        score += score_line((0..size).map(|x| board.stone_at(x, y)));
    }
    score
}

fn evaluate_columns(board: &Board) -> i32 {
    let size = board.size();
    let mut score = 0;
    for x in 0..size {
        score += score_line((0..size).map(|y| board.stone_at(x, y)));
    }
    score
}

// Every diagonal of both directions exactly once: down-right diagonals
// start on the top row or the left column, down-left diagonals on the
// top row or the right column. The corner diagonals are single cells.
fn evaluate_diagonals(board: &Board) -> i32 {
    let size = board.size();
    let mut score = 0;
    for x in 0..size {
        score += score_line(walk(board, x, 0, 1, 1));
        score += score_line(walk(board, x, 0, -1, 1));
    }
    for y in 1..size {
        score += score_line(walk(board, 0, y, 1, 1));
        score += score_line(walk(board, size - 1, y, -1, 1));
    }
    score
}

fn walk(
    board: &Board,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
) -> impl Iterator<Item = Stone> + '_ {
    let size = board.size() as isize;
    let mut cx = x as isize;
    let mut cy = y as isize;
    std::iter::from_fn(move || {
        if cx < 0 || cy < 0 || cx >= size || cy >= size {
            return None;
        }
        let stone = board.stone_at(cx as usize, cy as usize);
        cx += dx;
        cy += dy;
        Some(stone)
    })
}

fn score_line<I>(cells: I) -> i32
where
    I: Iterator<Item = Stone>,
{
    let mut total = 0;
    let mut owner = Stone::Empty;
    let mut run = 0;
    for stone in cells {
        if stone == owner {
            if stone != Stone::Empty {
                run += 1;
            }
        } else {
            total += run_score(owner, run);
            owner = stone;
            run = 1;
        }
    }
    total + run_score(owner, run)
}

fn run_score(owner: Stone, run: usize) -> i32 {
    let value = (run * run) as i32;
    match owner {
        Stone::Computer => value,
        Stone::Human => -value,
        Stone::Empty => 0,
    }
}
