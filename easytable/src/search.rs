//! Local search state and row filtering.

use std::collections::BTreeMap;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config as MatcherConfig, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

use crate::config::SearchMode;
use crate::row::{Row, display_value};

/// A per-column search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSearch {
    /// Column key (dot path) the term applies to.
    pub key: String,
    pub value: String,
}

impl ColumnSearch {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Search terms applied to the local view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    columns: BTreeMap<String, String>,
    global: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the term for one column. An empty term clears it.
    pub fn set_column(&mut self, search: &ColumnSearch) {
        if search.value.is_empty() {
            self.columns.remove(&search.key);
        } else {
            self.columns.insert(search.key.clone(), search.value.clone());
        }
    }

    /// Set the global term. An empty term clears it.
    pub fn set_global(&mut self, term: &str) {
        self.global = (!term.is_empty()).then(|| term.to_string());
    }

    /// Active column terms, ordered by key.
    pub fn column_terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn column_term(&self, key: &str) -> Option<&str> {
        self.columns.get(key).map(String::as_str)
    }

    pub fn global_term(&self) -> Option<&str> {
        self.global.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.global.is_none()
    }

    /// Keep the rows matching every column term and the global term.
    ///
    /// The global term matches when any top-level field of the row matches.
    pub fn filter<'a>(&self, rows: Vec<&'a Row>, mode: SearchMode) -> Vec<&'a Row> {
        if self.is_empty() {
            return rows;
        }
        let mut matcher = TermMatcher::new(mode);
        rows.into_iter()
            .filter(|row| {
                let columns_match = self
                    .columns
                    .iter()
                    .all(|(key, term)| matcher.matches(term, &row.render(key)));
                columns_match
                    && match &self.global {
                        None => true,
                        Some(term) => row
                            .fields()
                            .values()
                            .any(|value| matcher.matches(term, &display_value(value))),
                    }
            })
            .collect()
    }
}

/// Matches a term against cell text in the configured mode.
struct TermMatcher {
    mode: SearchMode,
    fuzzy: Matcher,
    buf: Vec<char>,
}

impl TermMatcher {
    fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            fuzzy: Matcher::new(MatcherConfig::DEFAULT),
            buf: Vec::new(),
        }
    }

    fn matches(&mut self, term: &str, text: &str) -> bool {
        match self.mode {
            SearchMode::Contains => text.to_lowercase().contains(&term.to_lowercase()),
            SearchMode::Fuzzy => {
                let pattern =
                    Pattern::new(term, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
                let haystack = Utf32Str::new(text, &mut self.buf);
                pattern.score(haystack, &mut self.fuzzy).is_some()
            }
        }
    }
}
