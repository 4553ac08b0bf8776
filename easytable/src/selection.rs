//! Selection state for the table.
//!
//! Indices refer to rows of the current visible page and columns in
//! declaration order. All of this state is transient: the host resets it by
//! replacing the table's inputs.

use std::collections::BTreeSet;

/// Which parts of a clicked cell become selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionMode {
    pub row: bool,
    pub col: bool,
    pub cell: bool,
}

/// Selected row and column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSelection {
    row: Option<usize>,
    col: Option<usize>,
}

impl CellSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row(&self) -> Option<usize> {
        self.row
    }

    pub fn col(&self) -> Option<usize> {
        self.col
    }

    /// Apply a click on (`row`, `col`) under `mode`.
    ///
    /// Returns true if anything changed.
    pub fn click(&mut self, mode: SelectionMode, row: usize, col: usize) -> bool {
        let before = *self;
        if mode.row || mode.cell {
            self.row = Some(row);
        }
        if mode.col || mode.cell {
            self.col = Some(col);
        }
        before != *self
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Rows whose detail content is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailRows {
    expanded: BTreeSet<usize>,
}

impl DetailRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `index`. Returns true if the row is now expanded.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.expanded.remove(&index) {
            false
        } else {
            self.expanded.insert(index);
            true
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Expanded indices in ascending order.
    pub fn expanded(&self) -> Vec<usize> {
        self.expanded.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}
