use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::suggest_move;
use super::settings::TicTacToeSettings;
use super::types::{GameMode, GameStatus, Mark};
use super::win_detector::check_win_with_line;

/// Owns the board and the turn. Every placement goes through here and is
/// followed by a win/draw evaluation.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    settings: TicTacToeSettings,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(settings: TicTacToeSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self {
            board: Board::new(),
            settings,
            status: GameStatus::AwaitingMove(settings.first_mark),
            last_move: None,
        })
    }

    /// Resumes from an existing position. The mark to move follows from the
    /// mark counts: equal counts mean the first mark moves.
    pub fn from_board(settings: TicTacToeSettings, board: Board) -> Result<Self, String> {
        settings.validate()?;
        let first_mark = settings.first_mark;
        let second_mark = first_mark
            .opponent()
            .ok_or_else(|| "First mark must be X or O".to_string())?;

        let first_count = board.count(first_mark);
        let second_count = board.count(second_mark);
        let next_mark = if first_count == second_count {
            first_mark
        } else if first_count == second_count + 1 {
            second_mark
        } else {
            return Err(format!(
                "Inconsistent position: {} has {} marks, {} has {}",
                first_mark, first_count, second_mark, second_count
            ));
        };

        Ok(Self {
            board,
            settings,
            status: evaluate_status(&board, next_mark),
            last_move: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> &TicTacToeSettings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn current_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::AwaitingMove(mark) => Some(mark),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        self.settings.mode == GameMode::VersusComputer
            && self.current_mark() == Some(self.settings.bot_mark)
    }

    /// Human move. Rejected while the bot is to move.
    pub fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }
        self.apply_mark(index)
    }

    /// Plays at most one bot move. Returns `Ok(None)` when it is not the bot's
    /// turn, so repeated calls after the same turn change never double-move.
    pub fn play_bot_turn(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, String> {
        if !self.is_bot_turn() {
            return Ok(None);
        }

        let Some(index) = suggest_move(&self.board, self.settings.bot_mark, rng)? else {
            return Ok(None);
        };

        self.apply_mark(index)?;
        log!("Bot {} played cell {}", self.settings.bot_mark, index);
        Ok(Some(index))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::AwaitingMove(self.settings.first_mark);
        self.last_move = None;
        log!("Game reset, {} moves first", self.settings.first_mark);
    }

    /// Switching mode always starts a fresh game, even if the mode is unchanged.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        log!("Mode set to {}", mode);
        self.reset();
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.settings.mode.toggled());
    }

    fn apply_mark(&mut self, index: usize) -> Result<(), String> {
        let GameStatus::AwaitingMove(mark) = self.status else {
            return Err("Game is already over".to_string());
        };
        let next_mark = mark
            .opponent()
            .ok_or_else(|| "Empty mark cannot move".to_string())?;

        self.board.place(index, mark)?;
        self.last_move = Some(index);
        self.status = evaluate_status(&self.board, next_mark);

        match self.status {
            GameStatus::Won(line) => log!("{} won on cells {:?}", line.mark, line.cells),
            GameStatus::Draw => log!("Game drawn"),
            GameStatus::AwaitingMove(_) => {}
        }
        Ok(())
    }
}

fn evaluate_status(board: &Board, next_mark: Mark) -> GameStatus {
    if let Some(line) = check_win_with_line(board) {
        GameStatus::Won(line)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::AwaitingMove(next_mark)
    }
}
