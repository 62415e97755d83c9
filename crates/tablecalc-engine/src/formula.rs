//! A parsed formula: its AST, canonical reprint, and evaluator.

use crate::ast::Expr;
use crate::error::{FormulaError, SyntaxError};
use crate::format;
use crate::parser;
use crate::position::Position;
use crate::value::CellValueSource;

/// A successfully parsed formula. Construction parses once; the canonical
/// text and the deduplicated reference list are both pure functions of the
/// AST, so they're computed up front rather than on every accessor call.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    ast: Expr,
    expression: String,
    references: Vec<Position>,
}

/// Parse the tail of a formula (the caller strips the leading `=`).
pub fn parse_formula(text: &str) -> Result<Formula, SyntaxError> {
    let ast = parser::parse(text)?;
    let references = parser::sorted_references(&ast);
    let expression = format::print(&ast);
    Ok(Formula {
        ast,
        expression,
        references,
    })
}

impl Formula {
    /// The AST this formula parsed to, for structural round-trip comparison.
    pub fn ast(&self) -> &Expr {
        &self.ast
    }

    /// Evaluate against `source`, propagating the first error encountered
    /// in left-to-right, depth-first order.
    pub fn evaluate(&self, source: &dyn CellValueSource) -> Result<f64, FormulaError> {
        eval(&self.ast, source)
    }

    /// Canonical reprint, no leading `=`.
    pub fn get_expression(&self) -> &str {
        &self.expression
    }

    /// Sorted, deduplicated positions this formula reads.
    pub fn get_referenced_cells(&self) -> &[Position] {
        &self.references
    }
}

fn eval(expr: &Expr, source: &dyn CellValueSource) -> Result<f64, FormulaError> {
    match expr {
        Expr::Number(n) => finite(*n),
        Expr::Ref(pos) => source.value_at(*pos).as_operand(),
        Expr::Neg(inner) => eval(inner, source).map(|v| -v),
        Expr::Add(l, r) => finite(eval(l, source)? + eval(r, source)?),
        Expr::Sub(l, r) => finite(eval(l, source)? - eval(r, source)?),
        Expr::Mul(l, r) => finite(eval(l, source)? * eval(r, source)?),
        Expr::Div(l, r) => {
            let lv = eval(l, source)?;
            let rv = eval(r, source)?;
            if rv == 0.0 {
                Err(FormulaError::DivZero)
            } else {
                finite(lv / rv)
            }
        }
    }
}

fn finite(v: f64) -> Result<f64, FormulaError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FormulaError::DivZero)
    }
}
