use common::config::Validate;
use common::games::tictactoe::Mark;
use serde::{Deserialize, Serialize};

const MAX_NAME_LENGTH: usize = 32;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub x_name: String,
    pub o_name: String,
}

impl PlayersConfig {
    pub fn name_for(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_name,
            Mark::O => &self.o_name,
            Mark::Empty => "",
        }
    }
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        for name in [&self.x_name, &self.o_name] {
            if name.trim().is_empty() {
                return Err("Player names must not be empty".to_string());
            }
            if name.chars().count() > MAX_NAME_LENGTH {
                return Err(format!(
                    "Player name '{}' exceeds {} characters",
                    name, MAX_NAME_LENGTH
                ));
            }
        }
        if self.x_name == self.o_name {
            return Err("Players must have distinct names".to_string());
        }
        Ok(())
    }
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x_name: "epilot".to_string(),
            o_name: "eka".to_string(),
        }
    }
}
