mod board;
mod bot_controller;
mod game_state;
mod lines;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, get_available_moves};
pub use bot_controller::suggest_move;
pub use game_state::TicTacToeGameState;
pub use lines::{LINES, Line};
pub use settings::TicTacToeSettings;
pub use types::{GameMode, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
