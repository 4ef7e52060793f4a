use super::board::Board;
use super::lines::LINES;
use super::types::{Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in canonical order. A full board without one is a draw,
/// which the caller has to detect separately.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark == Mark::Empty {
            continue;
        }
        if board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}
