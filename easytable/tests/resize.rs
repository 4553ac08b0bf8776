mod common;

use easytable::prelude::*;

use common::table;

#[test]
fn test_width_tracks_pointer_delta() {
    let mut table = table(Config::default().resize_column(true));

    assert_eq!(table.resize_press(Pointer::at(200, 0), 1, 120), EventResult::Consumed);
    assert!(table.resize_state().is_active());

    assert_eq!(table.resize_move(Pointer::at(230, 0)), Some(150));
    assert_eq!(table.resize_move(Pointer::at(190, 0)), Some(110));
    assert_eq!(table.column_width(1), Some(110));

    assert_eq!(table.resize_release(Pointer::at(190, 0)), EventResult::Consumed);
    assert_eq!(table.resize_state(), ResizeState::Idle);
    assert_eq!(table.column_width(1), Some(110));
}

#[test]
fn test_move_without_press_changes_nothing() {
    let mut table = table(Config::default().resize_column(true));
    assert_eq!(table.resize_move(Pointer::at(300, 0)), None);
    assert_eq!(table.column_width(0), None);
    assert_eq!(table.resize_release(Pointer::at(300, 0)), EventResult::Ignored);
    assert!(table.take_events().is_empty());
}

#[test]
fn test_move_after_release_changes_nothing() {
    let mut table = table(Config::default().resize_column(true));
    table.resize_press(Pointer::at(10, 0), 0, 100);
    table.resize_release(Pointer::at(10, 0));
    assert_eq!(table.resize_move(Pointer::at(500, 0)), None);
    assert_eq!(table.column_width(0), Some(100));
}

#[test]
fn test_resize_disabled_is_ignored() {
    let mut table = table(Config::default());
    assert_eq!(table.resize_press(Pointer::at(10, 0), 0, 100), EventResult::Ignored);
    assert_eq!(table.resize_move(Pointer::at(50, 0)), None);
    assert!(table.take_events().is_empty());
}

#[test]
fn test_resize_emits_press_and_release() {
    let mut table = table(Config::default().resize_column(true));
    table.resize_press(Pointer::at(100, 4), 2, 80);
    table.resize_move(Pointer::at(120, 4));
    table.resize_release(Pointer::at(120, 4));

    let events = table.take_events();
    assert_eq!(
        events,
        vec![
            TableEvent::ColumnResizeMouseDown(ResizeEvent {
                pointer: Pointer::at(100, 4),
                column: 2,
                width: 80,
            }),
            TableEvent::ColumnResizeMouseUp(ResizeEvent {
                pointer: Pointer::at(120, 4),
                column: 2,
                width: 100,
            }),
        ]
    );
}

#[test]
fn test_declared_width_until_resized() {
    let columns = vec![Column::new("name", "Name").width(90)];
    let table = Table::new(columns, common::people());
    assert_eq!(table.column_width(0), Some(90));
}

#[test]
fn test_disabling_resize_ends_drag() {
    let mut table = table(Config::default().resize_column(true));
    table.resize_press(Pointer::at(100, 0), 0, 80);
    table.resize_move(Pointer::at(110, 0));

    table.set_config(Config::default());
    assert_eq!(table.resize_state(), ResizeState::Idle);
    assert_eq!(table.resize_move(Pointer::at(300, 0)), None);
    assert_eq!(table.column_width(0), Some(90));
    assert_eq!(table.resize_release(Pointer::at(300, 0)), EventResult::Ignored);
}
