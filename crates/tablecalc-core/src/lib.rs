//! Sheet: cells, the bidirectional dependency graph, and the mutation
//! protocol that keeps them consistent. Built on `tablecalc-engine` for
//! positions and formula evaluation.

pub mod cell;
pub mod error;
pub mod sheet;

pub use cell::Cell;
pub use error::SheetError;
pub use sheet::Sheet;

pub use tablecalc_engine::{CellValue, FormulaError, Position, PositionError, SyntaxError};
