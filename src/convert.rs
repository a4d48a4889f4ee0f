//! Textual cell coordinates: a column letter followed by a 1-based row.

use crate::common::ParseError;
use crate::coord::Coord;

/// Converts between `"C3"`-style text and board coordinates for a board
/// of fixed dimensions. Columns map A..Z, so boards wider than 26 cells
/// cannot be addressed textually.
#[derive(Debug, Clone, Copy)]
pub struct CellConverter {
    width: u32,
    height: u32,
}

impl CellConverter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse text like `"C3"` into a coordinate, checking board range.
    pub fn parse(&self, text: &str) -> Result<Coord, ParseError> {
        let text = text.trim();
        let mut chars = text.chars();
        let col_ch = match chars.next() {
            Some(ch) if ch.is_ascii_alphabetic() => ch,
            _ => return Err(ParseError::Malformed(text.into())),
        };
        let x = col_ch.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        let y: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseError::Malformed(text.into()))?;
        if x > self.width {
            return Err(ParseError::ColumnOutOfRange(col_ch));
        }
        if y < 1 || y > self.height {
            return Err(ParseError::RowOutOfRange(y));
        }
        Ok(Coord::new(x, y))
    }

    /// Format a coordinate back to text, e.g. `(3, 4)` -> `"C4"`.
    pub fn format(&self, cell: Coord) -> String {
        let col = (b'A' + (cell.x - 1) as u8) as char;
        format!("{}{}", col, cell.y)
    }
}
