use crate::config::Validate;
use super::types::{GameMode, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSettings {
    pub mode: GameMode,
    pub first_mark: Mark,
    /// Only consulted in `GameMode::VersusComputer`.
    pub bot_mark: Mark,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            first_mark: Mark::X,
            bot_mark: Mark::O,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.first_mark == Mark::Empty {
            return Err("First mark must be X or O".to_string());
        }
        if self.bot_mark == Mark::Empty {
            return Err("Bot mark must be X or O".to_string());
        }
        Ok(())
    }
}
