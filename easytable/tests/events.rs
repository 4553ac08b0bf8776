mod common;

use std::cell::RefCell;
use std::rc::Rc;

use easytable::prelude::*;
use serde_json::json;

use common::table;

#[test]
fn test_order_event_serializes_tagged() {
    let event = TableEvent::Order(OrderEvent {
        key: "age".to_string(),
        order: SortOrder::Desc,
    });
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({ "event": "order", "value": { "key": "age", "order": "desc" } })
    );
}

#[test]
fn test_click_event_serializes_camel_case() {
    let mut table = table(Config::default());
    table.on_click(Pointer::at(1, 2), 0, 0);
    let value = serde_json::to_value(&table.take_events()[0]).unwrap();

    assert_eq!(value["event"], json!("click"));
    assert_eq!(value["value"]["rowId"], json!(0));
    assert_eq!(value["value"]["colId"], json!(0));
    assert_eq!(value["value"]["key"], json!("name"));
    assert_eq!(value["value"]["row"]["name"], json!("Ada"));
}

#[test]
fn test_kind_matches_serialized_tag() {
    let events = vec![
        TableEvent::SelectAll(true),
        TableEvent::GlobalSearch("x".to_string()),
        TableEvent::Search(ColumnSearch::new("a", "b")),
        TableEvent::Pagination(PageRequest::new(1, 10)),
        TableEvent::ColumnResizeMouseUp(ResizeEvent {
            pointer: Pointer::default(),
            column: 0,
            width: 10,
        }),
    ];
    for event in events {
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], json!(event.kind()));
    }
}

#[test]
fn test_listeners_see_every_event() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut table = table(Config::default().checkboxes(true));
    let sink = Rc::clone(&seen);
    table.subscribe(move |event| sink.borrow_mut().push(event.kind()));

    table.order_by("age");
    table.on_select_all();
    table.on_double_click(Pointer::default(), 0, 0);

    assert_eq!(*seen.borrow(), vec!["order", "selectAll", "doubleClick"]);
    assert_eq!(table.take_events().len(), 3);
    assert!(table.pending_events().is_empty());
}

#[test]
fn test_table_ids_are_unique() {
    let a = Table::new(Vec::new(), Vec::new());
    let b = Table::new(Vec::new(), Vec::new());
    assert_ne!(a.id(), b.id());
}
