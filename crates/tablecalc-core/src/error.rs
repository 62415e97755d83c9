//! Errors surfaced by the sheet's mutating operations. Read-side operations
//! never fail except `get_cell` on an out-of-range position.

use thiserror::Error;

use tablecalc_engine::{PositionError, SyntaxError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error(transparent)]
    Position(#[from] PositionError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("setting this cell would create a circular dependency")]
    CircularDependency,
}
