//! Common types: attack outcomes and the crate's error enums.

/// Result of applying an attack to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell holds no ship.
    Miss,
    /// A ship was hit but still floats.
    Hit,
    /// The hit sank the ship.
    Sunk,
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }

    pub fn is_sunk(self) -> bool {
        matches!(self, ShotOutcome::Sunk)
    }
}

/// Errors from ship construction and fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ship endpoints are neither row- nor column-aligned.
    InvalidGeometry,
    /// A ship does not fit within the board.
    OutOfBounds,
    /// Two ships overlap or touch, diagonals included.
    ShipsTooClose,
    /// The requested fleet cannot fit on the board.
    InfeasibleFleet,
    /// Random placement gave up after exhausting its retry budget.
    PlacementExhausted,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::InvalidGeometry => {
                write!(f, "Ship must be either horizontal or vertical")
            }
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::ShipsTooClose => write!(f, "Ships overlap or touch each other"),
            PlacementError::InfeasibleFleet => {
                write!(f, "Fleet configuration cannot fit on the board")
            }
            PlacementError::PlacementExhausted => {
                write!(f, "Unable to place fleet within the retry budget")
            }
        }
    }
}

/// Errors from parsing textual cell coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input is not a column letter followed by a row number.
    Malformed(String),
    /// Column letter lies outside the board.
    ColumnOutOfRange(char),
    /// Row number lies outside the board.
    RowOutOfRange(u32),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::Malformed(text) => write!(
                f,
                "Invalid coordinate {:?}: expected a column letter followed by a row number, e.g. C3",
                text
            ),
            ParseError::ColumnOutOfRange(col) => {
                write!(f, "Column {} is outside the board", col)
            }
            ParseError::RowOutOfRange(row) => write!(f, "Row {} is outside the board", row),
        }
    }
}
