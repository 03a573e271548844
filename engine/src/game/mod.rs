mod board;
mod bot_controller;
mod evaluator;
mod frontier;
mod game_state;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_computer_move;
pub use evaluator::evaluate;
pub use frontier::Frontier;
pub use game_state::GomokuGameState;
pub use session::GomokuSession;
pub use session_rng::SessionRng;
pub use settings::GomokuSessionSettings;
pub use types::{FirstPlayer, GameStatus, Position, ScoredMove, Stone};
pub use win_detector::check_win;
