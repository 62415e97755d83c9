use thiserror::Error;

use tablecalc_core::SheetError;

/// Errors surfaced by the command-line front end. This is purely an
/// ambient convenience layer over [`SheetError`] — none of the core
/// evaluation logic lives here.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Sheet(#[from] SheetError),
    #[error("expected '<ref>=<text>', got {0:?}")]
    BadAssignment(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}
