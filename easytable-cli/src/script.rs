//! Interaction scripts replayed against a table.

use easytable::prelude::*;
use serde::Deserialize;

/// One scripted interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", deny_unknown_fields)]
pub enum Action {
    OrderBy {
        key: String,
    },
    Click {
        row: usize,
        col: usize,
        #[serde(default)]
        pointer: Pointer,
    },
    DoubleClick {
        row: usize,
        col: usize,
        #[serde(default)]
        pointer: Pointer,
    },
    CheckboxSelect {
        row: usize,
        #[serde(default)]
        pointer: Pointer,
    },
    SelectAll,
    Search {
        key: String,
        value: String,
    },
    GlobalSearch {
        term: String,
    },
    Pagination {
        page: usize,
        limit: usize,
    },
    ToggleDetails {
        row: usize,
    },
    ResizePress {
        col: usize,
        width: u32,
        pointer: Pointer,
    },
    ResizeMove {
        pointer: Pointer,
    },
    ResizeRelease {
        pointer: Pointer,
    },
    GroupBy {
        key: Option<String>,
    },
}

impl Action {
    /// Apply this action to `table`.
    ///
    /// Returns whether the table accepted it.
    pub fn apply(self, table: &mut Table) -> bool {
        match self {
            Action::OrderBy { key } => table.order_by(&key).is_handled(),
            Action::Click { row, col, pointer } => table.on_click(pointer, row, col).is_handled(),
            Action::DoubleClick { row, col, pointer } => {
                table.on_double_click(pointer, row, col).is_handled()
            }
            Action::CheckboxSelect { row, pointer } => {
                table.on_checkbox_select(pointer, row).is_handled()
            }
            Action::SelectAll => table.on_select_all().is_handled(),
            Action::Search { key, value } => {
                table.on_search(ColumnSearch::new(key, value)).is_handled()
            }
            Action::GlobalSearch { term } => table.on_global_search(term).is_handled(),
            Action::Pagination { page, limit } => {
                table.on_pagination(PageRequest::new(page, limit)).is_handled()
            }
            Action::ToggleDetails { row } => table.toggle_row_details(row).is_handled(),
            Action::ResizePress {
                col,
                width,
                pointer,
            } => table.resize_press(pointer, col, width).is_handled(),
            Action::ResizeMove { pointer } => table.resize_move(pointer).is_some(),
            Action::ResizeRelease { pointer } => table.resize_release(pointer).is_handled(),
            Action::GroupBy { key } => {
                table.set_group_rows_by(key);
                true
            }
        }
    }
}
