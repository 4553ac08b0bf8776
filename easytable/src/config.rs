//! Table configuration.
//!
//! A [`Config`] is the merge of caller overrides onto [`Config::default`].
//! The set of options is closed: overrides naming an unknown option are
//! rejected rather than silently carried along.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How local search terms are matched against cell values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    /// Case-insensitive substring match.
    #[default]
    Contains,
    /// Fuzzy subsequence match.
    Fuzzy,
}

/// Active configuration for a [`Table`](crate::Table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    /// Accept per-column search input.
    pub search_enabled: bool,
    /// Show the header row. Rendering hint for the host.
    pub header_enabled: bool,
    /// Accept sort toggles.
    pub order_enabled: bool,
    /// Accept global search input.
    pub global_search_enabled: bool,
    /// Accept pagination requests and page the local view.
    pub pagination_enabled: bool,
    /// Emit click events.
    pub click_event: bool,
    /// Clicking a cell selects its row.
    pub select_row: bool,
    /// Clicking a cell selects its column.
    pub select_col: bool,
    /// Clicking a cell selects both row and column.
    pub select_cell: bool,
    /// Page size.
    pub rows: usize,
    /// Sorting, searching and paging are done by the caller.
    pub server_pagination: bool,
    /// Show the grouped view. Rendering hint for the host.
    pub group_rows: bool,
    /// Report every detail row as open.
    pub collapse_all_rows: bool,
    /// Accept checkbox and select-all input.
    pub checkboxes: bool,
    /// Accept column resize drags.
    pub resize_column: bool,
    /// Matching used for local search.
    pub search_mode: SearchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_enabled: false,
            header_enabled: true,
            order_enabled: true,
            global_search_enabled: true,
            pagination_enabled: true,
            click_event: true,
            select_row: false,
            select_col: false,
            select_cell: false,
            rows: DEFAULT_PAGE_SIZE,
            server_pagination: false,
            group_rows: false,
            collapse_all_rows: false,
            checkboxes: false,
            resize_column: false,
            search_mode: SearchMode::Contains,
        }
    }
}

impl Config {
    /// Merge a JSON override document onto the defaults.
    ///
    /// Options missing from `overrides` keep their default value.
    pub fn from_json(overrides: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(overrides)?;
        config.validate()
    }

    /// Merge an already-parsed JSON override onto the defaults.
    pub fn from_value(overrides: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(overrides)?;
        config.validate()
    }

    /// Check invariants that the type system cannot express.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(self)
    }

    pub fn search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    pub fn header_enabled(mut self, enabled: bool) -> Self {
        self.header_enabled = enabled;
        self
    }

    pub fn order_enabled(mut self, enabled: bool) -> Self {
        self.order_enabled = enabled;
        self
    }

    pub fn global_search_enabled(mut self, enabled: bool) -> Self {
        self.global_search_enabled = enabled;
        self
    }

    pub fn pagination_enabled(mut self, enabled: bool) -> Self {
        self.pagination_enabled = enabled;
        self
    }

    pub fn click_event(mut self, enabled: bool) -> Self {
        self.click_event = enabled;
        self
    }

    pub fn select_row(mut self, enabled: bool) -> Self {
        self.select_row = enabled;
        self
    }

    pub fn select_col(mut self, enabled: bool) -> Self {
        self.select_col = enabled;
        self
    }

    pub fn select_cell(mut self, enabled: bool) -> Self {
        self.select_cell = enabled;
        self
    }

    /// Set the page size.
    ///
    /// Zero is rejected by [`Config::validate`]; a table handed a zero page
    /// size without validation raises it to 1.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Delegate sorting, searching and paging to the caller.
    pub fn server_pagination(mut self, enabled: bool) -> Self {
        self.server_pagination = enabled;
        self
    }

    pub fn group_rows(mut self, enabled: bool) -> Self {
        self.group_rows = enabled;
        self
    }

    pub fn collapse_all_rows(mut self, enabled: bool) -> Self {
        self.collapse_all_rows = enabled;
        self
    }

    pub fn checkboxes(mut self, enabled: bool) -> Self {
        self.checkboxes = enabled;
        self
    }

    pub fn resize_column(mut self, enabled: bool) -> Self {
        self.resize_column = enabled;
        self
    }

    pub fn search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }
}
