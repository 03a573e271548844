use super::board::Board;
use super::bot_controller::calculate_computer_move;
use super::game_state::GomokuGameState;
use super::session_rng::SessionRng;
use super::settings::GomokuSessionSettings;
use super::types::{FirstPlayer, GameStatus, Position, ScoredMove};
use super::win_detector::check_win;

/// One game between the human and the search-driven computer opponent.
/// The session exclusively owns its board and candidate frontier for the
/// whole game; callers read the board back for display and never index
/// into it directly.
pub struct GomokuSession {
    state: GomokuGameState,
    search_depth: usize,
}

impl GomokuSession {
    /// Validates the settings and starts a game. When the computer moves
    /// first it opens in the center of the board immediately.
    pub fn create(
        settings: &GomokuSessionSettings,
        rng: &mut SessionRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        let mut session = Self {
            state: GomokuGameState::new(settings.board_size, settings.win_length),
            search_depth: settings.search_depth,
        };

        let computer_starts = match settings.first_player {
            FirstPlayer::Computer => true,
            FirstPlayer::Human => false,
            FirstPlayer::Random => rng.random_bool(),
        };
        if computer_starts {
            let center = settings.board_size / 2;
            session.state.place_stone(center, center, true);
        }

        Ok(session)
    }

    /// Places a stone for either side. False means the target was out of
    /// bounds or occupied and nothing changed; the caller re-prompts.
    pub fn place_stone(&mut self, x: usize, y: usize, is_computer: bool) -> bool {
        self.state.place_stone(x, y, is_computer)
    }

    /// Whether the stone at (x, y) completes a winning run. Used the
    /// same way regardless of which side owns the stone.
    pub fn did_win(&self, x: usize, y: usize) -> bool {
        check_win(&self.state.board, x, y, self.state.win_length)
    }

    /// Runs the search for the computer's reply to `last_human_move`,
    /// applies it to the board and returns it for display.
    pub fn computer_reply(&mut self, last_human_move: Position) -> Result<ScoredMove, String> {
        if self.state.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        let reply = calculate_computer_move(&mut self.state, last_human_move, self.search_depth);
        if !self.state.place_stone(reply.pos.x, reply.pos.y, true) {
            unreachable!(
                "search proposed an illegal move at ({}, {})",
                reply.pos.x, reply.pos.y
            );
        }
        Ok(reply)
    }

    /// Read-only board snapshot for rendering; the engine makes no
    /// formatting decisions.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.state.last_move
    }
}
