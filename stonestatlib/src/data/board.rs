//! Board validation and stone counting.
//!
//! A board is written as a string over three characters:
//!
//! - `O`: a stone of one colour
//! - `X`: a stone of the other colour
//! - `-`: an empty square
//!
//! Any other character makes the whole board invalid.

use crate::error::StonestatError;
use crate::Result;

/// A single square of a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    /// `O`
    Black,
    /// `X`
    White,
    /// `-`
    Empty,
}

impl Cell {
    /// Decode one board character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'O' => Some(Cell::Black),
            'X' => Some(Cell::White),
            '-' => Some(Cell::Empty),
            _ => None,
        }
    }

    /// Whether the square holds a stone.
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Count the stones on a board.
///
/// Fails with [`StonestatError::MalformedRecord`] on the first character that
/// is not `O`, `X` or `-`. The error carries the board exactly as given.
///
/// # Example
///
/// ```rust
/// use stonestatlib::count_stones;
///
/// assert_eq!(count_stones("OX-").unwrap(), 2);
/// assert!(count_stones("OY-").is_err());
/// ```
pub fn count_stones(board: &str) -> Result<usize> {
    let mut stones = 0;
    for c in board.chars() {
        let cell = Cell::from_char(c).ok_or_else(|| StonestatError::MalformedRecord {
            record: board.to_string(),
            character: c,
        })?;
        if cell.is_occupied() {
            stones += 1;
        }
    }
    Ok(stones)
}
