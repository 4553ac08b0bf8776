//! Interaction handlers for the Table.
//!
//! Each handler checks the capability it needs, updates local state and
//! emits one event. Refused interactions change nothing and emit nothing.

use crate::events::{
    CellEvent, CheckboxEvent, EventResult, OrderEvent, Pointer, ResizeEvent, TableEvent,
};
use crate::pagination::PageRequest;
use crate::resize::ResizeState;
use crate::row::Row;
use crate::search::ColumnSearch;
use crate::selection::SelectionMode;
use crate::sort::SortState;

use super::state::Table;

impl Table {
    /// Look up a visible row and a column for a cell interaction.
    fn cell_target(&self, row_index: usize, col_index: usize) -> Option<(Row, String)> {
        let Some(column) = self.columns.get(col_index) else {
            log::warn!(
                "[{}] column {} out of range ({} columns)",
                self.id,
                col_index,
                self.columns.len()
            );
            return None;
        };
        let row = self.visible_row(row_index)?;
        Some((row, column.key.clone()))
    }

    fn visible_row(&self, row_index: usize) -> Option<Row> {
        let rows = self.visible_rows();
        match rows.get(row_index) {
            Some(row) => Some((*row).clone()),
            None => {
                log::warn!(
                    "[{}] row {} out of range ({} visible rows)",
                    self.id,
                    row_index,
                    rows.len()
                );
                None
            }
        }
    }

    fn refuse(&self, capability: &str) -> EventResult {
        log::debug!("[{}] {} is disabled, ignoring", self.id, capability);
        EventResult::Ignored
    }

    /// Toggle sorting on `key`.
    ///
    /// Re-selecting the current key flips the direction; any other key starts
    /// ascending.
    pub fn order_by(&mut self, key: &str) -> EventResult {
        if !self.config.order_enabled {
            return self.refuse("orderEnabled");
        }
        if self
            .columns
            .iter()
            .any(|c| c.key == key && !c.order_enabled)
        {
            return self.refuse("column ordering");
        }

        let next = SortState::toggle(self.sort.as_ref(), key);
        let event = OrderEvent {
            key: next.key.clone(),
            order: next.order,
        };
        self.sort = Some(next);
        if !self.config.server_pagination {
            self.pagination.reset();
        }
        self.emit(TableEvent::Order(event));
        EventResult::Consumed
    }

    /// Handle a click on a visible cell.
    pub fn on_click(&mut self, pointer: Pointer, row_index: usize, col_index: usize) -> EventResult {
        let Some((row, key)) = self.cell_target(row_index, col_index) else {
            return EventResult::Ignored;
        };

        let mode = SelectionMode {
            row: self.config.select_row,
            col: self.config.select_col,
            cell: self.config.select_cell,
        };
        self.selection.click(mode, row_index, col_index);

        if self.config.click_event {
            self.emit(TableEvent::Click(CellEvent {
                pointer,
                row,
                key,
                row_id: row_index,
                col_id: col_index,
            }));
        }
        EventResult::Consumed
    }

    /// Handle a double click on a visible cell.
    pub fn on_double_click(
        &mut self,
        pointer: Pointer,
        row_index: usize,
        col_index: usize,
    ) -> EventResult {
        let Some((row, key)) = self.cell_target(row_index, col_index) else {
            return EventResult::Ignored;
        };
        self.emit(TableEvent::DoubleClick(CellEvent {
            pointer,
            row,
            key,
            row_id: row_index,
            col_id: col_index,
        }));
        EventResult::Consumed
    }

    /// Handle a row checkbox.
    pub fn on_checkbox_select(&mut self, pointer: Pointer, row_index: usize) -> EventResult {
        if !self.config.checkboxes {
            return self.refuse("checkboxes");
        }
        let Some(row) = self.visible_row(row_index) else {
            return EventResult::Ignored;
        };
        self.emit(TableEvent::CheckboxSelect(CheckboxEvent {
            pointer,
            row,
            row_id: row_index,
        }));
        EventResult::Consumed
    }

    /// Flip the select-all checkbox.
    pub fn on_select_all(&mut self) -> EventResult {
        if !self.config.checkboxes {
            return self.refuse("checkboxes");
        }
        self.all_selected = !self.all_selected;
        self.emit(TableEvent::SelectAll(self.all_selected));
        EventResult::Consumed
    }

    /// Handle per-column search input.
    pub fn on_search(&mut self, search: ColumnSearch) -> EventResult {
        if !self.config.search_enabled {
            return self.refuse("searchEnabled");
        }
        if self
            .columns
            .iter()
            .any(|c| c.key == search.key && !c.search_enabled)
        {
            return self.refuse("column search");
        }
        if !self.config.server_pagination {
            self.search.set_column(&search);
            self.pagination.reset();
        }
        self.emit(TableEvent::Search(search));
        EventResult::Consumed
    }

    /// Handle global search input.
    pub fn on_global_search(&mut self, term: impl Into<String>) -> EventResult {
        if !self.config.global_search_enabled {
            return self.refuse("globalSearchEnabled");
        }
        let term = term.into();
        if !self.config.server_pagination {
            self.search.set_global(&term);
            self.pagination.reset();
        }
        self.emit(TableEvent::GlobalSearch(term));
        EventResult::Consumed
    }

    /// Handle a pager request.
    pub fn on_pagination(&mut self, request: PageRequest) -> EventResult {
        if !self.config.pagination_enabled {
            return self.refuse("paginationEnabled");
        }
        self.pagination.apply(request);
        self.emit(TableEvent::Pagination(request));
        EventResult::Consumed
    }

    /// Expand or collapse the detail content of a visible row.
    pub fn toggle_row_details(&mut self, row_index: usize) -> EventResult {
        if self.visible_row(row_index).is_none() {
            return EventResult::Ignored;
        }
        self.details.toggle(row_index);
        EventResult::Consumed
    }

    /// Whether a row's detail content is shown.
    pub fn is_row_expanded(&self, row_index: usize) -> bool {
        self.config.collapse_all_rows || self.details.contains(row_index)
    }

    /// Indices with expanded detail content, ascending.
    pub fn expanded_rows(&self) -> Vec<usize> {
        self.details.expanded()
    }

    // -------------------------------------------------------------------------
    // Column resize
    // -------------------------------------------------------------------------

    /// Start resizing `col_index`, currently `width` pixels wide.
    pub fn resize_press(&mut self, pointer: Pointer, col_index: usize, width: u32) -> EventResult {
        if !self.config.resize_column {
            return self.refuse("resizeColumn");
        }
        if col_index >= self.columns.len() {
            log::warn!("[{}] cannot resize missing column {}", self.id, col_index);
            return EventResult::Ignored;
        }
        self.resize = ResizeState::press(col_index, width, pointer.x);
        self.widths.insert(col_index, width);
        self.emit(TableEvent::ColumnResizeMouseDown(ResizeEvent {
            pointer,
            column: col_index,
            width,
        }));
        EventResult::Consumed
    }

    /// Track the pointer during a resize. Returns the new width, or `None`
    /// when no resize is in progress.
    pub fn resize_move(&mut self, pointer: Pointer) -> Option<u32> {
        let (column, width) = self.resize.width_at(pointer.x)?;
        self.widths.insert(column, width);
        Some(width)
    }

    /// Finish a resize.
    pub fn resize_release(&mut self, pointer: Pointer) -> EventResult {
        let Some(column) = self.resize.column() else {
            return EventResult::Ignored;
        };
        self.resize = ResizeState::Idle;
        let width = self.column_width(column).unwrap_or_default();
        self.emit(TableEvent::ColumnResizeMouseUp(ResizeEvent {
            pointer,
            column,
            width,
        }));
        EventResult::Consumed
    }
}
