use std::str::FromStr;

use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index; players type 1..=9.
    Place(usize),
    Reset,
    ToggleMode,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "reset" => Ok(Command::Reset),
            "m" | "mode" => Ok(Command::ToggleMode),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse::<usize>() {
                Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(Command::Place(cell - 1)),
                Ok(cell) => Err(format!("Cell {} is out of range, use 1-{}", cell, CELL_COUNT)),
                Err(_) => Err(format!("Unknown command '{}', type 'h' for help", s.trim())),
            },
        }
    }
}
