//! Outbound table events.
//!
//! Every user interaction that the table accepts is normalized into one
//! [`TableEvent`] and pushed through a single emission point. The serialized
//! form is `{"event": "<kind>", "value": <payload>}`.

use serde::{Deserialize, Serialize};

use crate::pagination::PageRequest;
use crate::row::Row;
use crate::search::ColumnSearch;
use crate::sort::SortOrder;

/// Result of handling an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The interaction was refused: capability disabled, index out of range,
    /// or no drag in progress.
    Ignored,
    /// The interaction was applied.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Keyboard modifiers held during a pointer interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub alt: bool,
}

/// Host-neutral pointer event, in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Pointer {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            modifiers: Modifiers::default(),
        }
    }
}

/// Payload for click and double-click events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEvent {
    pub pointer: Pointer,
    pub row: Row,
    /// Column key of the clicked cell.
    pub key: String,
    pub row_id: usize,
    pub col_id: usize,
}

/// Payload for checkbox events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxEvent {
    pub pointer: Pointer,
    pub row: Row,
    pub row_id: usize,
}

/// Payload for sort events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEvent {
    pub key: String,
    pub order: SortOrder,
}

/// Payload for column resize press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeEvent {
    pub pointer: Pointer,
    pub column: usize,
    /// Column width at the time of the event.
    pub width: u32,
}

/// Everything the table reports to its host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "value", rename_all = "camelCase")]
pub enum TableEvent {
    Order(OrderEvent),
    Click(CellEvent),
    DoubleClick(CellEvent),
    CheckboxSelect(CheckboxEvent),
    SelectAll(bool),
    Search(ColumnSearch),
    GlobalSearch(String),
    Pagination(PageRequest),
    ColumnResizeMouseDown(ResizeEvent),
    ColumnResizeMouseUp(ResizeEvent),
}

impl TableEvent {
    /// Symbolic kind, identical to the serialized `event` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TableEvent::Order(_) => "order",
            TableEvent::Click(_) => "click",
            TableEvent::DoubleClick(_) => "doubleClick",
            TableEvent::CheckboxSelect(_) => "checkboxSelect",
            TableEvent::SelectAll(_) => "selectAll",
            TableEvent::Search(_) => "search",
            TableEvent::GlobalSearch(_) => "globalSearch",
            TableEvent::Pagination(_) => "pagination",
            TableEvent::ColumnResizeMouseDown(_) => "columnResizeMouseDown",
            TableEvent::ColumnResizeMouseUp(_) => "columnResizeMouseUp",
        }
    }
}

impl std::fmt::Display for TableEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
