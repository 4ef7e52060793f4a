use common::games::tictactoe::{Board, GameStatus, Mark, TicTacToeGameState};

use crate::config::PlayersConfig;

pub const HELP_TEXT: &str = "\
Commands:
  1-9        place a mark (1 is top-left, 9 is bottom-right)
  r, reset   start a new game
  m, mode    switch between two players and versus computer (starts a new game)
  h, help    show this help
  q, quit    exit";

/// Empty cells show their 1-based number. Cells of a completed line are
/// bracketed, otherwise the last placed mark is parenthesized.
pub fn render_board(board: &Board, highlight: Option<[usize; 3]>, last_move: Option<usize>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match board[index] {
                    Mark::Empty => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                    mark => mark.symbol(),
                };
                if highlight.is_some_and(|line| line.contains(&index)) {
                    format!("[{}]", symbol)
                } else if last_move == Some(index) {
                    format!("({})", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join("\n---+---+---\n")
}

pub fn status_line(state: &TicTacToeGameState, players: &PlayersConfig) -> String {
    match state.status() {
        GameStatus::Won(line) => format!("Winner: {}", players.name_for(line.mark)),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::AwaitingMove(mark) => {
            let suffix = if state.is_bot_turn() { " (computer)" } else { "" };
            format!("Next player: {}{}", players.name_for(mark), suffix)
        }
    }
}

pub fn render(state: &TicTacToeGameState, players: &PlayersConfig) -> String {
    let highlight = match state.status() {
        GameStatus::Won(line) => Some(line.cells),
        _ => None,
    };
    format!(
        "\n{}\n\n{}  [{}]",
        render_board(state.board(), highlight, state.last_move()),
        status_line(state, players),
        state.mode()
    )
}
