//! Sort state and local row ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::row::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// The current sort key and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: String,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: impl Into<String>, order: SortOrder) -> Self {
        Self {
            key: key.into(),
            order,
        }
    }

    /// Next state after a toggle on `key`.
    ///
    /// The same key flips the direction; a different key starts ascending.
    pub fn toggle(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState::new(key, state.order.flipped()),
            _ => SortState::new(key, SortOrder::Asc),
        }
    }
}

/// Rank of a value kind. Null sorts after everything else.
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) | Value::Object(_) => 3,
        Value::Null => 4,
    }
}

/// Integer value widened so that every i64 and u64 fits.
fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Integers compare exactly; anything involving a float goes through f64.
fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (as_integer(x), as_integer(y)) {
        return a.cmp(&b);
    }
    let a = x.as_f64().unwrap_or(f64::NAN);
    let b = y.as_f64().unwrap_or(f64::NAN);
    a.total_cmp(&b)
}

/// Ascending comparison of two cell values.
///
/// Numbers compare numerically, strings case-insensitively (ties broken by
/// exact text), booleans `false < true`. Mixed kinds order by kind with
/// `null` last.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x
            .to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ => match kind_rank(a).cmp(&kind_rank(b)) {
            Ordering::Equal => a.to_string().cmp(&b.to_string()),
            other => other,
        },
    }
}

/// Stable sort of `rows` by the value at `sort.key`.
///
/// Rows missing the key sort last in either direction.
pub fn sort_rows(rows: &mut [&Row], sort: &SortState) {
    rows.sort_by(|a, b| {
        match (a.get_path(&sort.key), b.get_path(&sort.key)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) if x.is_null() || y.is_null() => compare_values(x, y),
            (Some(x), Some(y)) => match sort.order {
                SortOrder::Asc => compare_values(x, y),
                SortOrder::Desc => compare_values(y, x),
            },
        }
    });
}
