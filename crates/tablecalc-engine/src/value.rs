//! The evaluated value of a cell, and the trait formulas use to read
//! other cells' values without depending on `tablecalc-core`.

use std::fmt;

use crate::error::FormulaError;
use crate::position::Position;

/// A tagged union of the three things a cell can evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Error(FormulaError),
}

impl CellValue {
    pub fn empty() -> CellValue {
        CellValue::Text(String::new())
    }

    /// Coerce to a number the way a formula operand does: numbers pass
    /// through, empty/absent text reads as zero, a numeric-looking string
    /// converts, anything else is `#VALUE!`. Errors propagate unchanged.
    pub fn as_operand(&self) -> Result<f64, FormulaError> {
        match self {
            CellValue::Number(n) => Ok(*n),
            CellValue::Error(e) => Err(*e),
            CellValue::Text(s) if s.is_empty() => Ok(0.0),
            CellValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(FormulaError::Value),
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{}", crate::format::format_number(*n)),
            CellValue::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Read-only access to cell values, implemented by `tablecalc-core::Sheet`.
/// Kept here (rather than on `Sheet` directly) so the evaluator has no
/// dependency in the other direction.
pub trait CellValueSource {
    /// The value at `pos`. Absent positions read as an empty [`CellValue::Text`],
    /// matching the rule that un-materialised cells behave as Empty.
    fn value_at(&self, pos: Position) -> CellValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero_operand() {
        assert_eq!(CellValue::empty().as_operand(), Ok(0.0));
    }

    #[test]
    fn numeric_string_converts() {
        assert_eq!(CellValue::Text("3.5".into()).as_operand(), Ok(3.5));
    }

    #[test]
    fn non_numeric_string_is_value_error() {
        assert_eq!(
            CellValue::Text("hello".into()).as_operand(),
            Err(FormulaError::Value)
        );
    }

    #[test]
    fn error_propagates() {
        assert_eq!(
            CellValue::Error(FormulaError::DivZero).as_operand(),
            Err(FormulaError::DivZero)
        );
    }

    #[test]
    fn non_finite_string_is_value_error() {
        for text in ["inf", "-inf", "infinity", "nan", "1e400"] {
            assert_eq!(
                CellValue::Text(text.into()).as_operand(),
                Err(FormulaError::Value),
                "{text:?} should not convert to a finite operand"
            );
        }
    }
}
