use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use super::types::Mark;

pub const CELL_COUNT: usize = 9;
const SIDE: usize = 3;

/// 3x3 grid in row-major order: index 0 is top-left, 8 is bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn from_slice(cells: &[Mark]) -> Result<Self, String> {
        let cells: [Mark; CELL_COUNT] = cells.try_into().map_err(|_| {
            format!("Board must have exactly {} cells, got {}", CELL_COUNT, cells.len())
        })?;
        Ok(Self { cells })
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), String> {
        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or_else(|| "Position out of bounds".to_string())?;
        if *cell != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }
        *cell = mark;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl Index<usize> for Board {
    type Output = Mark;

    fn index(&self, index: usize) -> &Mark {
        &self.cells[index]
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != ',')
            .map(|c| Mark::from_symbol(c).ok_or_else(|| format!("Invalid cell character '{}'", c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.count(Mark::Empty), CELL_COUNT);
        assert!(!board.is_full());
        assert_eq!(get_available_moves(&board), (0..CELL_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_sets_cell() {
        let mut board = Board::new();

        board.place(4, Mark::X).unwrap();

        assert_eq!(board[4], Mark::X);
        assert_eq!(board.get(4), Some(Mark::X));
    }

    #[test]
    fn test_place_on_marked_cell_is_rejected() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();

        let result = board.place(0, Mark::O);

        assert!(result.is_err());
        assert_eq!(board[0], Mark::X);
    }

    #[test]
    fn test_place_out_of_bounds_is_rejected() {
        let mut board = Board::new();

        assert!(board.place(9, Mark::X).is_err());
    }

    #[test]
    fn test_place_empty_mark_is_rejected() {
        let mut board = Board::new();

        assert!(board.place(3, Mark::Empty).is_err());
    }

    #[test]
    fn test_get_out_of_bounds_returns_none() {
        assert_eq!(Board::new().get(CELL_COUNT), None);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let result = Board::from_slice(&[Mark::Empty; 8]);

        assert!(result.unwrap_err().contains("exactly 9"));
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "XX_ | _O_ | __O".parse().unwrap();

        assert_eq!(board[0], Mark::X);
        assert_eq!(board[1], Mark::X);
        assert_eq!(board[2], Mark::Empty);
        assert_eq!(board[4], Mark::O);
        assert_eq!(board[8], Mark::O);
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let result = "XX_ _Z_ __O".parse::<Board>();

        assert!(result.unwrap_err().contains("'Z'"));
    }

    #[test]
    fn test_parse_rejects_short_board() {
        assert!("XO".parse::<Board>().is_err());
    }

    #[test]
    fn test_display_renders_rows() {
        let board: Board = "XO. .X. ..O".parse().unwrap();

        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_full_board_has_no_available_moves() {
        let board: Board = "XOX XOO OXX".parse().unwrap();

        assert!(board.is_full());
        assert!(get_available_moves(&board).is_empty());
    }
}
