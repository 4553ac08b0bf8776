//! Row records and column descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An open-ended key/value record.
///
/// Rows carry no schema. Columns address values by key, and a key may be a
/// dot-separated path into nested objects (`"address.city"`).
///
/// # Example
///
/// ```
/// use easytable::Row;
///
/// let row = Row::new()
///     .set("name", "Ada")
///     .set("address", serde_json::json!({ "city": "London" }));
///
/// assert_eq!(row.render("address.city"), "London");
/// assert_eq!(row.render("missing"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: Map<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a top-level field, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a top-level field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Top-level field lookup. Dots in `key` are not interpreted.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Follow a dot-separated path through nested objects.
    ///
    /// Returns `None` when a segment is missing or an intermediate value is
    /// not an object.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.fields.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Display text for the value at `path`.
    pub fn render(&self, path: &str) -> String {
        self.get_path(path).map(display_value).unwrap_or_default()
    }

    /// All top-level fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Display text for a single JSON value.
///
/// Strings are shown without quotes and `null` as empty text; everything else
/// uses its JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Column descriptor.
///
/// # Examples
///
/// ```
/// use easytable::Column;
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("address.city", "City").unsortable(),
///     Column::new("age", "Age").width(80),
/// ];
/// assert_eq!(columns[2].width, Some(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Key or dot path into each row.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Whether sort toggles on this column are accepted.
    #[serde(default = "enabled")]
    pub order_enabled: bool,
    /// Whether per-column search on this column is accepted.
    #[serde(default = "enabled")]
    pub search_enabled: bool,
    /// Initial width in pixels, if the host fixes one.
    #[serde(default)]
    pub width: Option<u32>,
}

fn enabled() -> bool {
    true
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            order_enabled: true,
            search_enabled: true,
            width: None,
        }
    }

    /// Refuse sort toggles on this column.
    pub fn unsortable(mut self) -> Self {
        self.order_enabled = false;
        self
    }

    /// Refuse per-column search on this column.
    pub fn unsearchable(mut self) -> Self {
        self.search_enabled = false;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}
