mod common;

use easytable::prelude::*;

use common::{names, table};

#[test]
fn test_column_search_filters_locally() {
    let mut table = table(Config::default().search_enabled(true));
    table.on_search(ColumnSearch::new("team", "OPS"));
    assert_eq!(names(&table), vec!["grace", "Ken"]);
    assert_eq!(table.total_count(), 2);
}

#[test]
fn test_column_terms_combine() {
    let mut table = table(Config::default().search_enabled(true));
    table.on_search(ColumnSearch::new("team", "core"));
    table.on_search(ColumnSearch::new("name", "lin"));
    assert_eq!(names(&table), vec!["Linus"]);

    let terms: Vec<_> = table.search().column_terms().collect();
    assert_eq!(terms, vec![("name", "lin"), ("team", "core")]);

    table.on_search(ColumnSearch::new("name", ""));
    assert_eq!(names(&table), vec!["Ada", "Linus"]);
    assert_eq!(table.search().column_term("name"), None);
    assert_eq!(table.search().column_term("team"), Some("core"));
}

#[test]
fn test_global_search_matches_any_field() {
    let mut table = table(Config::default());
    table.on_global_search("8");
    assert_eq!(names(&table), vec!["grace", "Ken"]);
    assert_eq!(table.take_events(), vec![TableEvent::GlobalSearch("8".to_string())]);
}

#[test]
fn test_fuzzy_search_mode() {
    let mut table = table(
        Config::default()
            .search_enabled(true)
            .search_mode(SearchMode::Fuzzy),
    );
    table.on_search(ColumnSearch::new("name", "brb"));
    assert_eq!(names(&table), vec!["Barbara"]);
}

#[test]
fn test_server_mode_only_emits() {
    let mut table = table(Config::default().search_enabled(true).server_pagination(true));
    table.on_search(ColumnSearch::new("team", "ops"));
    table.on_global_search("Ada");
    assert!(table.search().is_empty());
    assert_eq!(names(&table).len(), 5);
    assert_eq!(table.take_events().len(), 2);
}

#[test]
fn test_search_disabled_is_ignored() {
    let mut table = table(Config::default().global_search_enabled(false));
    assert_eq!(table.on_search(ColumnSearch::new("team", "ops")), EventResult::Ignored);
    assert_eq!(table.on_global_search("ops"), EventResult::Ignored);
    assert!(table.take_events().is_empty());
    assert_eq!(names(&table).len(), 5);
}

#[test]
fn test_unsearchable_column_is_ignored() {
    let columns = vec![Column::new("team", "Team").unsearchable()];
    let mut table = Table::with_config(
        Config::default().search_enabled(true),
        columns,
        common::people(),
    );
    assert_eq!(table.on_search(ColumnSearch::new("team", "ops")), EventResult::Ignored);
}

#[test]
fn test_search_returns_to_first_page() {
    let mut table = table(Config::default().rows(2));
    table.on_pagination(PageRequest::new(3, 2));
    table.on_global_search("a");
    assert_eq!(table.pagination().page(), 1);
}
