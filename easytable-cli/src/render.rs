//! Plain-text rendering of a table page.

use easytable::Table;
use easytable::row::display_value;

/// Character width used when a column has no explicit width.
const MIN_CELL_WIDTH: usize = 4;

/// Pixels per character when converting resized widths.
const PIXELS_PER_CHAR: u32 = 8;

/// Optional group label and the rendered cells under it.
type Section = (Option<String>, Vec<Vec<String>>);

fn column_widths(table: &Table, cells: &[Vec<String>]) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| match table.column_width(i) {
            Some(px) => (px / PIXELS_PER_CHAR).max(1) as usize,
            None => cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.title.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_CELL_WIDTH),
        })
        .collect()
}

fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

fn line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| fit(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render the visible page, or the groups when a grouping key is set.
pub fn render(table: &Table) -> String {
    let mut out = String::new();

    let pages: Vec<Section> = if table.group_rows_by().is_some() {
        table
            .groups()
            .iter()
            .map(|group| {
                let rows = group
                    .rows
                    .iter()
                    .map(|row| table.columns().iter().map(|c| row.render(&c.key)).collect())
                    .collect();
                (Some(display_value(&group.key)), rows)
            })
            .collect()
    } else {
        let rows = table
            .visible_rows()
            .iter()
            .map(|row| table.columns().iter().map(|c| row.render(&c.key)).collect())
            .collect();
        vec![(None, rows)]
    };

    let all_cells: Vec<Vec<String>> = pages.iter().flat_map(|(_, rows)| rows.clone()).collect();
    let widths = column_widths(table, &all_cells);

    if table.config().header_enabled {
        let titles: Vec<String> = table.columns().iter().map(|c| c.title.clone()).collect();
        out.push_str(&line(&titles, &widths));
        out.push('\n');
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&line(&rule, &widths));
        out.push('\n');
    }

    for (label, rows) in &pages {
        if let Some(label) = label {
            out.push_str(&format!("[{}]\n", label));
        }
        for (index, row) in rows.iter().enumerate() {
            out.push_str(&line(row, &widths));
            if label.is_none() && table.is_row_expanded(index) {
                out.push_str("  (details)");
            }
            out.push('\n');
        }
    }

    let search = table.search();
    let mut filters: Vec<String> = search
        .column_terms()
        .map(|(key, term)| format!("{}~{:?}", key, term))
        .collect();
    if let Some(term) = search.global_term() {
        filters.push(format!("*~{:?}", term));
    }
    if !filters.is_empty() {
        out.push_str(&format!("filters: {}\n", filters.join(", ")));
    }

    if table.group_rows_by().is_none() && table.config().pagination_enabled {
        out.push_str(&format!(
            "page {}/{} ({} rows)\n",
            table.pagination().page(),
            table.page_count(),
            table.total_count()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use easytable::prelude::*;

    #[test]
    fn test_render_page_footer() {
        let table = Table::with_config(
            Config::default().rows(1),
            vec![Column::new("name", "Name")],
            vec![Row::new().set("name", "Ada"), Row::new().set("name", "Grace")],
        );
        let text = render(&table);
        assert!(text.contains("Ada"));
        assert!(!text.contains("Grace"));
        assert!(text.contains("page 1/2 (2 rows)"));
    }

    #[test]
    fn test_render_active_filters() {
        let mut table = Table::with_config(
            Config::default().search_enabled(true),
            vec![Column::new("name", "Name")],
            vec![Row::new().set("name", "Ada"), Row::new().set("name", "Grace")],
        );
        table.on_search(ColumnSearch::new("name", "gr"));
        table.on_global_search("a");
        let text = render(&table);
        assert!(text.contains(r#"filters: name~"gr", *~"a""#));
        assert!(!text.contains("Ada"));
    }

    #[test]
    fn test_render_groups() {
        let table = Table::new(
            vec![Column::new("name", "Name")],
            vec![
                Row::new().set("name", "Ada").set("team", "core"),
                Row::new().set("name", "Ken").set("team", "ops"),
            ],
        )
        .grouped_by("team");
        let text = render(&table);
        assert!(text.contains("[core]"));
        assert!(text.contains("[ops]"));
    }
}
