mod common;

use easytable::group::group_rows;
use easytable::prelude::*;
use serde_json::json;

fn group_names(group: &Group) -> Vec<String> {
    group.rows.iter().map(|row| row.render("name")).collect()
}

#[test]
fn test_groups_keep_first_seen_order() {
    let groups = group_rows(&common::people(), "team");

    let keys: Vec<_> = groups.iter().map(|g| g.key.clone()).collect();
    assert_eq!(keys, vec![json!("core"), json!("ops"), json!("web")]);
    assert_eq!(group_names(&groups[0]), vec!["Ada", "Linus"]);
    assert_eq!(group_names(&groups[1]), vec!["grace", "Ken"]);
    assert_eq!(group_names(&groups[2]), vec!["Barbara"]);
}

#[test]
fn test_missing_key_groups_under_null() {
    let rows = vec![
        Row::new().set("name", "a"),
        Row::new().set("name", "b").set("team", "x"),
        Row::new().set("name", "c"),
    ];
    let groups = group_rows(&rows, "team");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].key, json!(null));
    assert_eq!(group_names(&groups[0]), vec!["a", "c"]);
}

#[test]
fn test_number_and_string_keys_differ() {
    let rows = vec![
        Row::new().set("name", "a").set("k", 1),
        Row::new().set("name", "b").set("k", "1"),
    ];
    assert_eq!(group_rows(&rows, "k").len(), 2);
}

#[test]
fn test_table_regroups_on_row_change() {
    let mut table = Table::new(common::columns(), common::people()).grouped_by("team");
    assert_eq!(table.groups().len(), 3);

    table.set_rows(vec![Row::new().set("name", "z").set("team", "solo")]);
    assert_eq!(table.groups().len(), 1);
    assert_eq!(table.groups()[0].key, json!("solo"));
}

#[test]
fn test_table_regroups_on_key_change() {
    let mut table = Table::new(common::columns(), common::people());
    assert!(table.groups().is_empty());

    table.apply(TableChanges {
        group_rows_by: Some(Some("age".to_string())),
        ..Default::default()
    });
    assert_eq!(table.groups().len(), 5);

    table.apply(TableChanges {
        group_rows_by: Some(None),
        ..Default::default()
    });
    assert!(table.groups().is_empty());
    assert_eq!(table.group_rows_by(), None);
}

#[test]
fn test_group_by_nested_key() {
    let rows = vec![
        Row::new().set("name", "a").set("address", json!({ "city": "Oslo" })),
        Row::new().set("name", "b").set("address", json!({ "city": "Rome" })),
        Row::new().set("name", "c").set("address", json!({ "city": "Oslo" })),
    ];
    let groups = group_rows(&rows, "address.city");
    assert_eq!(groups.len(), 2);
    assert_eq!(group_names(&groups[0]), vec!["a", "c"]);
}
