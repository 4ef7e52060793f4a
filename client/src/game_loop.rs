use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::TicTacToeGameState;
use common::log;

use crate::command::Command;
use crate::config::PlayersConfig;
use crate::ui::{HELP_TEXT, render};

/// Reads one command per line and redraws after every state change. The bot
/// gets exactly one chance to move after each change.
pub struct GameLoop {
    state: TicTacToeGameState,
    rng: SessionRng,
    players: PlayersConfig,
}

impl GameLoop {
    pub fn new(state: TicTacToeGameState, rng: SessionRng, players: PlayersConfig) -> Self {
        Self {
            state,
            rng,
            players,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", HELP_TEXT)?;
        self.play_bot_turn(&mut output)?;
        self.draw(&mut output)?;

        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writeln!(output, "Input is not valid UTF-8")?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    writeln!(output, "{}", HELP_TEXT)?;
                    continue;
                }
                Ok(Command::Reset) => self.state.reset(),
                Ok(Command::ToggleMode) => {
                    self.state.toggle_mode();
                    writeln!(output, "Mode: {}", self.state.mode())?;
                }
                Ok(Command::Place(index)) => {
                    if let Err(e) = self.state.place_mark(index) {
                        writeln!(output, "{}", e)?;
                        continue;
                    }
                }
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }

            self.play_bot_turn(&mut output)?;
            self.draw(&mut output)?;
        }

        output.flush()
    }

    fn play_bot_turn<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        match self.state.play_bot_turn(&mut self.rng) {
            Ok(Some(index)) => writeln!(output, "Computer plays {}", index + 1),
            Ok(None) => Ok(()),
            Err(e) => {
                log!("Bot failed to move: {}", e);
                Err(io::Error::other(e))
            }
        }
    }

    fn draw<W: Write>(&self, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", render(&self.state, &self.players))?;
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameMode, GameStatus, Mark, TicTacToeSettings};
    use std::io::Cursor;

    fn run_script(settings: TicTacToeSettings, script: &str) -> (GameLoop, String) {
        let state = TicTacToeGameState::new(settings).unwrap();
        let mut game_loop = GameLoop::new(state, SessionRng::new(42), PlayersConfig::default());
        let mut output = Vec::new();

        game_loop.run(Cursor::new(script), &mut output).unwrap();

        (game_loop, String::from_utf8(output).unwrap())
    }

    fn versus_computer() -> TicTacToeSettings {
        TicTacToeSettings {
            mode: GameMode::VersusComputer,
            ..TicTacToeSettings::default()
        }
    }

    #[test]
    fn test_two_player_game_reports_winner() {
        let (game_loop, output) = run_script(TicTacToeSettings::default(), "1\n2\n4\n5\n7\nq\n");

        assert_eq!(game_loop.state().winner(), Some(Mark::X));
        assert!(output.contains("Winner: epilot"));
        assert!(output.contains("[X]"));
    }

    #[test]
    fn test_occupied_cell_reports_error() {
        let (game_loop, output) = run_script(TicTacToeSettings::default(), "5\n5\n");

        assert!(output.contains("Cell is already marked"));
        assert_eq!(game_loop.state().current_mark(), Some(Mark::O));
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let (_, output) = run_script(TicTacToeSettings::default(), "hello\n");

        assert!(output.contains("Unknown command 'hello'"));
    }

    #[test]
    fn test_computer_replies_to_each_move() {
        let (game_loop, output) = run_script(versus_computer(), "5\n");

        assert!(output.contains("Computer plays"));
        assert_eq!(game_loop.state().board().count(Mark::X), 1);
        assert_eq!(game_loop.state().board().count(Mark::O), 1);
        assert_eq!(game_loop.state().current_mark(), Some(Mark::X));
    }

    #[test]
    fn test_rejected_move_does_not_trigger_computer() {
        let (game_loop, output) = run_script(versus_computer(), "5\n5\n");

        assert_eq!(output.matches("Computer plays").count(), 1);
        assert_eq!(game_loop.state().board().count(Mark::O), 1);
    }

    #[test]
    fn test_toggle_mode_resets_board() {
        let (game_loop, output) = run_script(TicTacToeSettings::default(), "1\n2\nm\n");

        assert!(output.contains("Mode: versus computer"));
        assert_eq!(game_loop.state().mode(), GameMode::VersusComputer);
        assert_eq!(game_loop.state().board().count(Mark::Empty), 9);
    }

    #[test]
    fn test_reset_starts_new_game() {
        let (game_loop, _) = run_script(TicTacToeSettings::default(), "1\n2\nr\n");

        assert_eq!(game_loop.state().board().count(Mark::Empty), 9);
        assert_eq!(game_loop.state().status(), GameStatus::AwaitingMove(Mark::X));
    }

    #[test]
    fn test_computer_opens_when_it_moves_first() {
        let settings = TicTacToeSettings {
            mode: GameMode::VersusComputer,
            first_mark: Mark::O,
            bot_mark: Mark::O,
        };

        let (game_loop, output) = run_script(settings, "");

        assert_eq!(output.matches("Computer plays").count(), 1);
        assert_eq!(game_loop.state().current_mark(), Some(Mark::X));
    }

    #[test]
    fn test_invalid_utf8_line_is_reported_and_skipped() {
        let state = TicTacToeGameState::new(TicTacToeSettings::default()).unwrap();
        let mut game_loop = GameLoop::new(state, SessionRng::new(42), PlayersConfig::default());
        let mut output = Vec::new();
        let input: &[u8] = b"5\n\xff\xfe\n1\n";

        let result = game_loop.run(Cursor::new(input), &mut output);

        assert!(result.is_ok());
        assert!(String::from_utf8(output).unwrap().contains("Input is not valid UTF-8"));
        assert_eq!(game_loop.state().board()[4], Mark::X);
        assert_eq!(game_loop.state().board()[0], Mark::O);
    }

    #[test]
    fn test_quit_stops_reading_input() {
        let (game_loop, _) = run_script(TicTacToeSettings::default(), "q\n5\n");

        assert_eq!(game_loop.state().board().count(Mark::Empty), 9);
    }
}
