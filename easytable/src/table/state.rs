//! Table state and input ingestion.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::Config;
use crate::events::TableEvent;
use crate::group::{Group, group_rows};
use crate::pagination::{Pagination, PaginationInput};
use crate::resize::ResizeState;
use crate::row::{Column, Row};
use crate::search::SearchState;
use crate::selection::{CellSelection, DetailRows};
use crate::sort::SortState;

/// Unique identifier for a Table instance.
///
/// Hosts showing several tables use it to keep pager state apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Raise a zero page size to 1 so the config and the pager agree.
fn clamp_page_size(mut config: Config) -> Config {
    if config.rows == 0 {
        log::warn!("page size 0 raised to 1");
        config.rows = 1;
    }
    config
}

/// Callback invoked for every emitted event.
pub type Listener = Box<dyn FnMut(&TableEvent)>;

#[derive(Default)]
pub(super) struct Listeners(pub Vec<Listener>);

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listeners({})", self.0.len())
    }
}

/// A set of input changes pushed by the host.
///
/// Fields left as `None` are unchanged.
#[derive(Debug, Clone, Default)]
pub struct TableChanges {
    pub rows: Option<Vec<Row>>,
    pub columns: Option<Vec<Column>>,
    pub config: Option<Config>,
    pub pagination: Option<PaginationInput>,
    /// `Some(None)` clears the grouping key.
    pub group_rows_by: Option<Option<String>>,
}

/// A headless data table.
///
/// `Table` owns the rows and columns supplied by the host together with all
/// interaction state: sort key and direction, selected cell, expanded detail
/// rows, pagination cursor, search terms and column resize drags. The host
/// forwards user input to the `on_*` handlers and reads back the derived view
/// ([`visible_rows`](Table::visible_rows), [`groups`](Table::groups)) and the
/// emitted [`TableEvent`]s.
///
/// # Example
///
/// ```
/// use easytable::prelude::*;
///
/// let columns = vec![Column::new("name", "Name"), Column::new("age", "Age")];
/// let rows = vec![
///     Row::new().set("name", "Ada").set("age", 36),
///     Row::new().set("name", "Grace").set("age", 85),
/// ];
/// let mut table = Table::new(columns, rows);
///
/// table.order_by("age");
/// table.order_by("age");
/// assert_eq!(table.visible_rows()[0].render("name"), "Grace");
/// assert_eq!(table.take_events().len(), 2);
/// ```
#[derive(Debug)]
pub struct Table {
    pub(super) id: TableId,
    pub(super) config: Config,
    pub(super) columns: Vec<Column>,
    pub(super) rows: Vec<Row>,
    pub(super) group_rows_by: Option<String>,
    pub(super) grouped: Vec<Group>,
    /// Total row count reported by the server.
    pub(super) count: Option<usize>,
    pub(super) sort: Option<SortState>,
    pub(super) selection: CellSelection,
    pub(super) details: DetailRows,
    pub(super) all_selected: bool,
    pub(super) pagination: Pagination,
    pub(super) search: SearchState,
    pub(super) resize: ResizeState,
    /// Widths set by resize drags this session, by column index.
    pub(super) widths: HashMap<usize, u32>,
    pub(super) events: Vec<TableEvent>,
    pub(super) listeners: Listeners,
}

impl Table {
    /// Create a table with the default configuration.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self::with_config(Config::default(), columns, rows)
    }

    /// Create a table with an explicit configuration.
    ///
    /// A zero page size is raised to 1, see [`Config::rows`].
    pub fn with_config(config: Config, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let config = clamp_page_size(config);
        let pagination = Pagination::new(config.rows);
        Self {
            id: TableId::new(),
            config,
            columns,
            rows,
            group_rows_by: None,
            grouped: Vec::new(),
            count: None,
            sort: None,
            selection: CellSelection::new(),
            details: DetailRows::new(),
            all_selected: false,
            pagination,
            search: SearchState::new(),
            resize: ResizeState::Idle,
            widths: HashMap::new(),
            events: Vec::new(),
            listeners: Listeners::default(),
        }
    }

    /// Group rows by the value at `key`, builder style.
    pub fn grouped_by(mut self, key: impl Into<String>) -> Self {
        self.set_group_rows_by(Some(key.into()));
        self
    }

    /// Apply a set of input changes.
    pub fn apply(&mut self, changes: TableChanges) {
        let mut regroup = false;
        if let Some(rows) = changes.rows {
            self.rows = rows;
            self.reset_selection();
            regroup = true;
        }
        if let Some(columns) = changes.columns {
            self.columns = columns;
        }
        if let Some(config) = changes.config {
            self.set_config(config);
        }
        if let Some(pagination) = changes.pagination {
            self.count = pagination.count;
        }
        if let Some(key) = changes.group_rows_by {
            self.group_rows_by = key;
            regroup = true;
        }
        if regroup {
            self.regroup();
        }
    }

    /// Replace the row collection.
    ///
    /// Selection, expanded detail rows and the select-all flag refer to the
    /// old rows and are cleared.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.reset_selection();
        self.regroup();
    }

    fn reset_selection(&mut self) {
        self.selection.clear();
        self.details.clear();
        self.all_selected = false;
    }

    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Replace the active configuration.
    ///
    /// A change of page size takes effect immediately. Disabling column
    /// resizing ends any drag in progress.
    pub fn set_config(&mut self, config: Config) {
        let config = clamp_page_size(config);
        if config.rows != self.config.rows {
            self.pagination.set_limit(config.rows);
        }
        if !config.resize_column && self.resize.is_active() {
            log::debug!("[{}] resizeColumn disabled mid-drag, ending drag", self.id);
            self.resize = ResizeState::Idle;
        }
        self.config = config;
    }

    /// Set the server-side total row count.
    pub fn set_pagination(&mut self, input: PaginationInput) {
        self.count = input.count;
    }

    /// Set or clear the grouping key.
    pub fn set_group_rows_by(&mut self, key: Option<String>) {
        self.group_rows_by = key;
        self.regroup();
    }

    fn regroup(&mut self) {
        self.grouped = match &self.group_rows_by {
            Some(key) => group_rows(&self.rows, key),
            None => Vec::new(),
        };
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows as supplied by the host, before any local transform.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn group_rows_by(&self) -> Option<&str> {
        self.group_rows_by.as_deref()
    }

    /// Grouped rows; empty when no grouping key is set.
    pub fn groups(&self) -> &[Group] {
        &self.grouped
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selection.row()
    }

    pub fn selected_col(&self) -> Option<usize> {
        self.selection.col()
    }

    /// Whether the select-all checkbox is on.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize
    }

    /// Current width of column `index`: the session width from a resize
    /// drag if any, else the column's declared width.
    pub fn column_width(&self, index: usize) -> Option<u32> {
        self.widths
            .get(&index)
            .copied()
            .or_else(|| self.columns.get(index).and_then(|c| c.width))
    }

    // -------------------------------------------------------------------------
    // Event emission
    // -------------------------------------------------------------------------

    /// Register a callback invoked for every emitted event.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) {
        self.listeners.0.push(Box::new(listener));
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events queued since the last drain.
    pub fn pending_events(&self) -> &[TableEvent] {
        &self.events
    }

    pub(super) fn emit(&mut self, event: TableEvent) {
        log::debug!("[{}] emit {}: {:?}", self.id, event.kind(), event);
        for listener in self.listeners.0.iter_mut() {
            listener(&event);
        }
        self.events.push(event);
    }
}
