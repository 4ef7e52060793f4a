use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::lines::LINES;
use super::types::Mark;

/// Picks a cell for `bot_mark`: complete an own line, else block the opponent's,
/// else a uniformly random empty cell. `Ok(None)` means the board is full.
pub fn suggest_move(
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Option<usize>, String> {
    let opponent_mark = bot_mark
        .opponent()
        .ok_or_else(|| "Bot mark must be X or O".to_string())?;

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Ok(None);
    }

    if let Some(index) = find_completing_cell(board, bot_mark) {
        return Ok(Some(index));
    }

    if let Some(index) = find_completing_cell(board, opponent_mark) {
        return Ok(Some(index));
    }

    Ok(rng.choose(&available_moves))
}

/// Empty cell of the first line holding exactly two `mark` cells and nothing else.
fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let mut owned = 0;
        let mut empty = None;
        for &index in line {
            match board[index] {
                Mark::Empty => empty = Some(index),
                cell if cell == mark => owned += 1,
                _ => return None,
            }
        }
        if owned == 2 { empty } else { None }
    })
}
