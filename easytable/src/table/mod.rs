//! Table component - a headless data table with sorting, paging, grouping,
//! selection, detail rows and column resizing.
//!
//! The host owns rendering. It feeds user input to the handlers on
//! [`Table`] and renders from [`Table::visible_rows`] or [`Table::groups`].
//! Every accepted interaction emits one [`TableEvent`](crate::TableEvent).

mod handlers;
mod state;
mod view;

pub use state::{Listener, Table, TableChanges, TableId};
