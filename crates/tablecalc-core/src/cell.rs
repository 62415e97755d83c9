//! A single grid cell: its body, its memoised value, and its in-edges.

use std::cell::RefCell;
use std::collections::HashSet;

use tablecalc_engine::{parse_formula, CellValue, CellValueSource, Formula, Position, SyntaxError};

/// What a cell holds. The three variants have distinct textual and
/// evaluation rules that must not leak into each other — Text never
/// consults the sheet, Formula always does.
#[derive(Debug, Clone, PartialEq)]
enum CellBody {
    Empty,
    Text(String),
    Formula(Formula),
}

/// One grid cell. Holds its body, a lazily-populated value cache (interior
/// mutability so reads can memoise through a shared reference), and the set
/// of positions that reference this one. The `referenced` set from the
/// data model isn't stored redundantly here — it's derived from the body on
/// demand via [`Cell::referenced_positions`].
#[derive(Debug, Clone)]
pub struct Cell {
    body: CellBody,
    cache: RefCell<Option<CellValue>>,
    dependents: HashSet<Position>,
}

impl Cell {
    pub fn empty() -> Cell {
        Cell {
            body: CellBody::Empty,
            cache: RefCell::new(None),
            dependents: HashSet::new(),
        }
    }

    /// Build a fresh cell body from raw input text. Dependents are *not*
    /// carried here — the sheet transfers the previous occupant's
    /// dependents onto the result, since those edges belong to `pos`, not
    /// to any particular body.
    pub fn from_text(text: &str) -> Result<Cell, SyntaxError> {
        let body = if text.is_empty() {
            CellBody::Empty
        } else if let Some(rest) = text.strip_prefix('=') {
            if rest.is_empty() {
                CellBody::Text(text.to_string())
            } else {
                CellBody::Formula(parse_formula(rest)?)
            }
        } else {
            CellBody::Text(text.to_string())
        };
        Ok(Cell {
            body,
            cache: RefCell::new(None),
            dependents: HashSet::new(),
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, CellBody::Empty)
    }

    /// The raw source text, as `set` received it (or its canonical formula
    /// reprint with a leading `=`).
    pub fn get_text(&self) -> String {
        match &self.body {
            CellBody::Empty => String::new(),
            CellBody::Text(s) => s.clone(),
            CellBody::Formula(f) => format!("={}", f.get_expression()),
        }
    }

    /// The evaluated value, memoising through the cache. `source` is
    /// whatever can answer other cells' values — in practice, the owning
    /// sheet.
    pub fn get_value(&self, source: &dyn CellValueSource) -> CellValue {
        if let Some(cached) = self.cache.borrow().as_ref() {
            return cached.clone();
        }
        let value = match &self.body {
            CellBody::Empty => CellValue::empty(),
            CellBody::Text(s) => match s.strip_prefix('\'') {
                Some(rest) => CellValue::Text(rest.to_string()),
                None => CellValue::Text(s.clone()),
            },
            CellBody::Formula(f) => match f.evaluate(source) {
                Ok(n) => CellValue::Number(n),
                Err(e) => CellValue::Error(e),
            },
        };
        *self.cache.borrow_mut() = Some(value.clone());
        value
    }

    /// Positions this cell's body reads. Empty for Empty/Text.
    pub fn referenced_positions(&self) -> Vec<Position> {
        match &self.body {
            CellBody::Formula(f) => f.get_referenced_cells().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Drop this cell's own cached value. Fan-out to dependents is the
    /// sheet's job (it owns the dependents adjacency across cells).
    pub fn invalidate_cache(&self) {
        *self.cache.borrow_mut() = None;
    }

    pub fn dependents(&self) -> &HashSet<Position> {
        &self.dependents
    }

    pub fn dependents_mut(&mut self) -> &mut HashSet<Position> {
        &mut self.dependents
    }
}
