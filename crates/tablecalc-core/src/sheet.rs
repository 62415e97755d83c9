//! The sparse grid: cell storage, the mutation protocol, cycle detection,
//! and printable-range tracking.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fmt;

use tablecalc_engine::{CellValue, CellValueSource, Position};

use crate::cell::Cell;
use crate::error::SheetError;

/// A sparse `Position -> Cell` grid with per-row/per-column fill counters
/// for O(log n) printable-range queries.
pub struct Sheet {
    cells: HashMap<Position, Cell>,
    row_fill: BTreeMap<usize, usize>,
    col_fill: BTreeMap<usize, usize>,
    max_rows: usize,
    max_cols: usize,
}

impl Default for Sheet {
    fn default() -> Sheet {
        Sheet::new()
    }
}

impl Sheet {
    pub fn new() -> Sheet {
        Sheet::with_limits(Position::MAX_ROWS, Position::MAX_COLS)
    }

    /// A sheet with smaller addressable bounds, e.g. for tests that want
    /// cheap exhaustive coverage of the boundary.
    pub fn with_limits(max_rows: usize, max_cols: usize) -> Sheet {
        Sheet {
            cells: HashMap::new(),
            row_fill: BTreeMap::new(),
            col_fill: BTreeMap::new(),
            max_rows,
            max_cols,
        }
    }

    fn validate(&self, pos: Position) -> Result<(), SheetError> {
        if pos.row < self.max_rows && pos.col < self.max_cols {
            Ok(())
        } else {
            Err(SheetError::Position(
                tablecalc_engine::PositionError::OutOfRange(pos.format()),
            ))
        }
    }

    /// The cell at `pos`, or `None` if it was never written. `pos` out of
    /// range is the only read-side failure in this API.
    pub fn get_cell(&self, pos: Position) -> Result<Option<&Cell>, SheetError> {
        self.validate(pos)?;
        Ok(self.cells.get(&pos))
    }

    /// Parse and install `text` at `pos`. Transactional: on any error the
    /// sheet is left exactly as it was.
    pub fn set_cell(&mut self, pos: Position, text: &str) -> Result<(), SheetError> {
        self.validate(pos)?;
        let mut tentative = Cell::from_text(text)?;

        let r_new: HashSet<Position> = tentative.referenced_positions().into_iter().collect();
        if !r_new.is_empty() && self.creates_cycle(&r_new, pos) {
            return Err(SheetError::CircularDependency);
        }

        let (old_dependents, old_referenced, was_nonempty) = match self.cells.get(&pos) {
            Some(old) => (
                old.dependents().clone(),
                old.referenced_positions().into_iter().collect::<HashSet<_>>(),
                !old.is_empty(),
            ),
            None => (HashSet::new(), HashSet::new(), false),
        };

        *tentative.dependents_mut() = old_dependents;
        let now_nonempty = !tentative.is_empty();

        self.cells.insert(pos, tentative);

        if !was_nonempty && now_nonempty {
            self.bump_fill(pos, true);
        } else if was_nonempty && !now_nonempty {
            self.bump_fill(pos, false);
        }

        for p in old_referenced.difference(&r_new) {
            if let Some(c) = self.cells.get_mut(p) {
                c.dependents_mut().remove(&pos);
            }
        }
        for p in r_new.difference(&old_referenced) {
            self.cells.entry(*p).or_insert_with(Cell::empty);
            self.cells.get_mut(p).unwrap().dependents_mut().insert(pos);
        }

        self.invalidate_transitive(pos);
        Ok(())
    }

    /// Reset `pos` to Empty. A no-op (no error, no counter change) if the
    /// slot is absent or already Empty.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), SheetError> {
        self.validate(pos)?;
        let Some(existing) = self.cells.get(&pos) else {
            return Ok(());
        };
        if existing.is_empty() {
            return Ok(());
        }

        let referenced = existing.referenced_positions();
        for p in &referenced {
            if let Some(c) = self.cells.get_mut(p) {
                c.dependents_mut().remove(&pos);
            }
        }

        let dependents = self.cells.get(&pos).unwrap().dependents().clone();
        let mut replacement = Cell::empty();
        *replacement.dependents_mut() = dependents;
        self.cells.insert(pos, replacement);

        self.bump_fill(pos, false);
        self.invalidate_transitive(pos);
        Ok(())
    }

    /// `(rows, cols)` of the smallest rectangle anchored at `(0,0)`
    /// containing every non-empty cell, or `(0, 0)` when the sheet is
    /// empty.
    pub fn printable_size(&self) -> (usize, usize) {
        let rows = self.row_fill.keys().next_back().map_or(0, |r| r + 1);
        let cols = self.col_fill.keys().next_back().map_or(0, |c| c + 1);
        (rows, cols)
    }

    /// Emit the evaluated values of the printable range, tab-separated,
    /// newline-terminated, one row per line.
    pub fn print_values<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.print_with(out, |cell, sheet| cell.get_value(sheet).to_string())
    }

    /// Emit the source text of the printable range, tab-separated,
    /// newline-terminated, one row per line.
    pub fn print_texts<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.print_with(out, |cell, _sheet| cell.get_text())
    }

    fn print_with<W, F>(&self, out: &mut W, render: F) -> fmt::Result
    where
        W: fmt::Write,
        F: Fn(&Cell, &Sheet) -> String,
    {
        let (rows, cols) = self.printable_size();
        for row in 0..rows {
            for col in 0..cols {
                if col > 0 {
                    write!(out, "\t")?;
                }
                if let Some(cell) = self.cells.get(&Position::new(row, col)) {
                    write!(out, "{}", render(cell, self))?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn bump_fill(&mut self, pos: Position, increment: bool) {
        Self::bump_counter(&mut self.row_fill, pos.row, increment);
        Self::bump_counter(&mut self.col_fill, pos.col, increment);
    }

    fn bump_counter(map: &mut BTreeMap<usize, usize>, key: usize, increment: bool) {
        if increment {
            *map.entry(key).or_insert(0) += 1;
            return;
        }
        if let Some(count) = map.get_mut(&key) {
            *count -= 1;
            if *count == 0 {
                map.remove(&key);
            }
        }
    }

    /// Breadth-first search over `referenced_positions()` edges from every
    /// element of `frontier`, looking for `target`. Absent cells are treated
    /// as having no out-edges — they'd become Empty after this operation
    /// anyway, so they can't contribute a path.
    fn creates_cycle(&self, frontier: &HashSet<Position>, target: Position) -> bool {
        let mut visited: HashSet<Position> = HashSet::new();
        let mut queue: VecDeque<Position> = frontier.iter().copied().collect();
        while let Some(pos) = queue.pop_front() {
            if pos == target {
                return true;
            }
            if !visited.insert(pos) {
                continue;
            }
            if let Some(cell) = self.cells.get(&pos) {
                queue.extend(cell.referenced_positions());
            }
        }
        false
    }

    /// Work-set traversal over the dependents adjacency, clearing every
    /// reachable cell's cache. Bounded by the DAG invariant and
    /// deduplicated via `visited`, so wide or repeated fan-out is linear in
    /// the reachable set rather than exponential.
    fn invalidate_transitive(&self, start: Position) {
        let mut visited: HashSet<Position> = HashSet::new();
        let mut queue: VecDeque<Position> = VecDeque::new();
        queue.push_back(start);
        while let Some(pos) = queue.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            if let Some(cell) = self.cells.get(&pos) {
                cell.invalidate_cache();
                queue.extend(cell.dependents().iter().copied());
            }
        }
    }
}

impl CellValueSource for Sheet {
    fn value_at(&self, pos: Position) -> CellValue {
        match self.cells.get(&pos) {
            Some(cell) => cell.get_value(self),
            None => CellValue::empty(),
        }
    }
}
