//! Row grouping.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::row::Row;

/// A bucket of rows sharing the same value at the grouping key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    /// The shared value. Rows missing the key are grouped under `null`.
    pub key: Value,
    pub rows: Vec<Row>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Partition `rows` by the value at `key` (a dot path).
///
/// Groups appear in the order their key was first seen, and rows keep their
/// input order within a group. Keys compare by JSON identity, so `1` and
/// `"1"` land in different groups.
pub fn group_rows(rows: &[Row], key: &str) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let value = row.get_path(key).cloned().unwrap_or(Value::Null);
        // Value has no Hash impl; its JSON text is an exact identity.
        let slot = *index.entry(value.to_string()).or_insert_with(|| {
            groups.push(Group {
                key: value,
                rows: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].rows.push(row.clone());
    }

    log::trace!("grouped {} rows by '{}' into {} groups", rows.len(), key, groups.len());
    groups
}
