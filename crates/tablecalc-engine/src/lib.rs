//! Formula engine: grid coordinates, the arithmetic formula grammar, and
//! the AST evaluator. Knows nothing about a sheet or its cells — only about
//! [`CellValueSource`], so `tablecalc-core` can drive evaluation without a
//! circular crate dependency.

pub mod ast;
pub mod error;
pub mod format;
pub mod formula;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod value;

pub use ast::Expr;
pub use error::{FormulaError, SyntaxError};
pub use formula::{parse_formula, Formula};
pub use position::{Position, PositionError};
pub use value::{CellValue, CellValueSource};
