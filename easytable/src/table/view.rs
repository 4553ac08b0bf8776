//! Derived view: filter, sort and page the rows.

use crate::row::Row;
use crate::sort::sort_rows;

use super::state::Table;

impl Table {
    /// Rows after local search and sort, before paging.
    ///
    /// In server pagination mode the host already did this work and the rows
    /// are returned as supplied.
    pub fn filtered_rows(&self) -> Vec<&Row> {
        let rows: Vec<&Row> = self.rows.iter().collect();
        if self.config.server_pagination {
            return rows;
        }
        let mut rows = self.search.filter(rows, self.config.search_mode);
        if let Some(sort) = &self.sort {
            sort_rows(&mut rows, sort);
        }
        rows
    }

    /// Rows on the current page. Interaction handlers index into this.
    pub fn visible_rows(&self) -> Vec<&Row> {
        let rows = self.filtered_rows();
        if self.config.server_pagination || !self.config.pagination_enabled {
            return rows;
        }
        let range = self.pagination.range(rows.len());
        rows[range].to_vec()
    }

    /// Total rows across all pages.
    pub fn total_count(&self) -> usize {
        if self.config.server_pagination {
            self.count.unwrap_or(self.rows.len())
        } else {
            self.filtered_rows().len()
        }
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total_count())
    }

    /// Display text of the visible cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Option<String> {
        let column = self.columns.get(col)?;
        let rows = self.visible_rows();
        rows.get(row).map(|r| r.render(&column.key))
    }

    /// Display text of the value at `key` (a dot path) in `row`.
    pub fn render_value(row: &Row, key: &str) -> String {
        row.render(key)
    }
}
