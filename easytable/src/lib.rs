//! Headless data table state.
//!
//! See [`Table`] for the entry point.

pub mod config;
pub mod error;
pub mod events;
pub mod group;
pub mod pagination;
pub mod resize;
pub mod row;
pub mod search;
pub mod selection;
pub mod sort;
pub mod table;

pub use config::{Config, SearchMode};
pub use error::ConfigError;
pub use events::{EventResult, Pointer, TableEvent};
pub use row::{Column, Row};
pub use table::{Table, TableChanges, TableId};

pub mod prelude {
    pub use crate::config::{Config, SearchMode};
    pub use crate::error::ConfigError;
    pub use crate::events::{
        CellEvent, CheckboxEvent, EventResult, Modifiers, OrderEvent, Pointer, ResizeEvent,
        TableEvent,
    };
    pub use crate::group::Group;
    pub use crate::pagination::{PageRequest, PaginationInput};
    pub use crate::resize::ResizeState;
    pub use crate::row::{Column, Row};
    pub use crate::search::ColumnSearch;
    pub use crate::sort::{SortOrder, SortState};
    pub use crate::table::{Table, TableChanges, TableId};
}
