use gomoku_engine::game::Board;

/// Renders the board for the terminal: column indices across the top,
/// row indices down the left, one cell per stone.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..size {
        out.push_str(&format!("{:>3} ", x));
    }
    out.push('\n');

    let separator = format!("   {}+\n", "+---".repeat(size));
    for (y, row) in board.rows().iter().enumerate() {
        out.push_str(&separator);
        out.push_str(&format!("{:>2} ", y));
        for stone in row {
            out.push_str(&format!("| {} ", stone.to_char()));
        }
        out.push_str("|\n");
    }
    out.push_str(&separator);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_engine::game::{GomokuGameState, GomokuSession, GomokuSessionSettings, SessionRng};

    fn rendered_sample() -> String {
        let mut state = GomokuGameState::new(5, 5);
        state.place_stone(0, 0, false);
        state.place_stone(2, 1, true);
        render_board(&state.board)
    }

    #[test]
    fn test_render_shows_both_markers() {
        let rendered = rendered_sample();
        assert!(rendered.contains('X'));
        assert!(rendered.contains('O'));
    }

    #[test]
    fn test_render_has_headers_and_grid_lines() {
        let rendered = rendered_sample();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].contains('0'));
        assert!(lines[0].contains('4'));
        assert!(lines[1].contains("+---"));
        // Header, then a separator above each of the 5 rows plus a
        // closing one.
        assert_eq!(lines.len(), 1 + 5 * 2 + 1);
    }

    #[test]
    fn test_render_marks_the_expected_cells() {
        let settings = GomokuSessionSettings::default();
        let mut rng = SessionRng::new(3);
        let mut session = GomokuSession::create(&settings, &mut rng).unwrap();
        session.place_stone(0, 0, false);

        let rendered = render_board(session.board());
        let lines: Vec<&str> = rendered.lines().collect();

        // Row 0 starts right after the header and first separator; the
        // human stone sits in the first cell.
        assert!(lines[2].starts_with(" 0 | X "));
    }
}
