#![allow(dead_code)]

use easytable::prelude::*;

pub fn people() -> Vec<Row> {
    vec![
        Row::new().set("name", "Ada").set("age", 36).set("team", "core"),
        Row::new().set("name", "grace").set("age", 85).set("team", "ops"),
        Row::new().set("name", "Linus").set("age", 54).set("team", "core"),
        Row::new().set("name", "Barbara").set("age", 47).set("team", "web"),
        Row::new().set("name", "Ken").set("age", 80).set("team", "ops"),
    ]
}

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name"),
        Column::new("age", "Age"),
        Column::new("team", "Team"),
    ]
}

pub fn table(config: Config) -> Table {
    Table::with_config(config, columns(), people())
}

pub fn names(table: &Table) -> Vec<String> {
    table
        .visible_rows()
        .iter()
        .map(|row| row.render("name"))
        .collect()
}
