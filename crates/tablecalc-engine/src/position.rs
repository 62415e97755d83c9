//! Grid coordinates and their textual (A1-style) notation.
//!
//! Provides bidirectional conversion between spreadsheet-style cell
//! references (e.g. "A1", "B2", "AA100") and zero-indexed row/column
//! coordinates, bounded by [`Position::MAX_ROWS`] / [`Position::MAX_COLS`].

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// A grid coordinate, 0-indexed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Failure to parse or validate a textual cell reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid cell reference: {0:?}")]
    Malformed(String),
    #[error("cell reference out of range: {0:?}")]
    OutOfRange(String),
}

fn a1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?<letters>[A-Z]+)(?<number>[1-9][0-9]*)$").unwrap())
}

impl Position {
    /// Default row bound (exclusive). Rows `0..MAX_ROWS` are addressable.
    pub const MAX_ROWS: usize = 16384;
    /// Default column bound (exclusive). Cols `0..MAX_COLS` are addressable.
    pub const MAX_COLS: usize = 16384;

    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// True if this position falls within the default addressable range.
    pub fn is_valid(&self) -> bool {
        self.row < Self::MAX_ROWS && self.col < Self::MAX_COLS
    }

    /// Parse strict A1 notation: uppercase column letters, then a decimal
    /// row with no leading zero (`[A-Z]+[1-9][0-9]*`).
    pub fn parse(text: &str) -> Result<Position, PositionError> {
        let caps = a1_re()
            .captures(text)
            .ok_or_else(|| PositionError::Malformed(text.to_string()))?;
        let letters = &caps["letters"];
        let number = &caps["number"];

        let mut col_acc: usize = 0;
        for c in letters.bytes() {
            let digit = (c - b'A') as usize + 1;
            col_acc = col_acc
                .checked_mul(26)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| PositionError::OutOfRange(text.to_string()))?;
        }
        let col = col_acc - 1;

        let row_one_based: usize = number
            .parse()
            .map_err(|_| PositionError::OutOfRange(text.to_string()))?;
        let row = row_one_based - 1;

        let pos = Position::new(row, col);
        if !pos.is_valid() {
            return Err(PositionError::OutOfRange(text.to_string()));
        }
        Ok(pos)
    }

    /// Convert a 0-indexed column to spreadsheet-style letters (0 -> "A",
    /// 25 -> "Z", 26 -> "AA").
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }

    /// Canonical textual form, e.g. `Position::new(6, 26).format() == "AA7"`.
    pub fn format(&self) -> String {
        format!("{}{}", Position::col_to_letters(self.col), self.row + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
