//! Tests for header-activation sorting.

use std::sync::{Arc, Mutex};

use econdash_lib::table::{Column, Row, SortChange, SortDirection, Table, TableView};

fn column_texts(table: &Table, column: usize) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|r| r.cells()[column].text().to_string())
        .collect()
}

fn ids(table: &Table) -> Vec<String> {
    table.rows().iter().map(|r| r.id().to_string()).collect()
}

fn single_column(kind_numeric: bool, values: &[&str]) -> Table {
    let column = if kind_numeric {
        Column::new("Value").sortable().numeric()
    } else {
        Column::new("Value").sortable()
    };
    let rows = values
        .iter()
        .enumerate()
        .map(|(i, v)| Row::new(i.to_string(), [*v]))
        .collect();
    Table::with_rows(vec![column], rows).unwrap()
}

fn score_table() -> Table {
    Table::with_rows(
        vec![
            Column::new("Governorate").sortable(),
            Column::new("Score").sortable().numeric(),
        ],
        vec![
            Row::new("tunis", ["Tunis", "7.2"]),
            Row::new("sfax", ["Sfax", "5.1"]),
            Row::new("sousse", ["Sousse", "9.0"]),
        ],
    )
    .unwrap()
}

fn directions(table: &Table) -> Vec<Option<SortDirection>> {
    table.columns().iter().map(|c| c.direction()).collect()
}

#[test]
fn test_numeric_extraction_orders_currency() {
    let mut table = single_column(true, &["$1,200", "$300", "$45"]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["$45", "$300", "$1,200"]);
}

#[test]
fn test_lexicographic_default_is_case_insensitive() {
    let mut table = single_column(false, &["Banana", "apple", "Cherry"]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["apple", "Banana", "Cherry"]);
}

#[test]
fn test_text_column_does_not_sort_numerically() {
    let mut table = single_column(false, &["10", "9", "100"]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["10", "100", "9"]);
}

#[test]
fn test_keys_are_trimmed() {
    let mut table = single_column(false, &["  beta", "alpha  ", " gamma "]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["alpha  ", "  beta", " gamma "]);
}

#[test]
fn test_toggle_cycle_scenario() {
    let mut table = score_table();

    let first = table.sort_by(1).unwrap();
    assert_eq!(first.direction, SortDirection::Ascending);
    assert_eq!(column_texts(&table, 1), vec!["5.1", "7.2", "9.0"]);

    let second = table.sort_by(1).unwrap();
    assert_eq!(second.direction, SortDirection::Descending);
    assert_eq!(column_texts(&table, 1), vec!["9.0", "7.2", "5.1"]);

    let third = table.sort_by(0).unwrap();
    assert_eq!(third.direction, SortDirection::Ascending);
    assert_eq!(directions(&table), vec![Some(SortDirection::Ascending), None]);
    assert_eq!(column_texts(&table, 0), vec!["Sfax", "Sousse", "Tunis"]);
}

#[test]
fn test_switching_back_restarts_ascending() {
    let mut table = score_table();
    table.sort_by(1);
    table.sort_by(1);
    table.sort_by(0);
    let change = table.sort_by(1).unwrap();
    assert_eq!(change.direction, SortDirection::Ascending);
}

#[test]
fn test_double_activation_reverses_tie_free_column() {
    let mut table = single_column(true, &["3", "-1", "12", "0.5", "7"]);
    table.sort_by(0);
    let mut ascending = ids(&table);
    table.sort_by(0);
    ascending.reverse();
    assert_eq!(ids(&table), ascending);
}

#[test]
fn test_exactly_one_active_column_after_every_activation() {
    let mut table = Table::with_rows(
        vec![
            Column::new("A").sortable(),
            Column::new("B").sortable().numeric(),
            Column::new("C").sortable(),
        ],
        vec![Row::new("1", ["x", "1", "q"]), Row::new("2", ["y", "2", "p"])],
    )
    .unwrap();

    for index in [0, 1, 1, 2, 0, 2, 2] {
        table.sort_by(index);
        let active: Vec<usize> = directions(&table)
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|_| i))
            .collect();
        assert_eq!(active, vec![index]);
    }
}

#[test]
fn test_stable_for_equal_keys() {
    let mut table = Table::with_rows(
        vec![
            Column::new("Country").sortable(),
            Column::new("Score").sortable().numeric(),
        ],
        vec![
            Row::new("a", ["A", "5.0"]),
            Row::new("b", ["B", "4.0"]),
            Row::new("c", ["C", "5.0"]),
            Row::new("d", ["D", "4.0"]),
            Row::new("e", ["E", "5.00"]),
        ],
    )
    .unwrap();

    table.sort_by(1);
    assert_eq!(ids(&table), vec!["b", "d", "a", "c", "e"]);

    // Descending keeps tie order too: reversing the comparator is not
    // reversing the sequence.
    table.sort_by(1);
    assert_eq!(ids(&table), vec!["a", "c", "e", "b", "d"]);
}

#[test]
fn test_row_multiset_preserved() {
    let values: Vec<String> = (0..50).map(|i| format!("{}", (i * 37) % 23)).collect();
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    let mut table = single_column(true, &refs);

    let mut before = ids(&table);
    let cells_before: Vec<Row> = table.rows().to_vec();

    for _ in 0..3 {
        table.sort_by(0);
        assert_eq!(table.len(), 50);
    }

    let mut after = ids(&table);
    before.sort();
    after.sort();
    assert_eq!(before, after);

    for row in table.rows() {
        let original = cells_before.iter().find(|r| r.id() == row.id()).unwrap();
        assert_eq!(original, row);
    }
}

#[test]
fn test_empty_table_updates_direction_only() {
    let mut table = Table::new(vec![Column::new("Name").sortable()]);
    let change = table.sort_by(0).unwrap();
    assert_eq!(change.direction, SortDirection::Ascending);
    assert!(table.is_empty());
}

#[test]
fn test_invalid_column_is_noop() {
    let mut table = score_table();
    table.sort_by(1);
    let snapshot = table.clone();

    assert_eq!(table.sort_by(7), None);
    assert_eq!(table.sort_by_header("Population"), None);
    assert_eq!(table, snapshot);
}

#[test]
fn test_non_sortable_column_is_noop() {
    let mut table = Table::with_rows(
        vec![Column::new("Name").sortable(), Column::new("Notes")],
        vec![Row::new("1", ["b", "z"]), Row::new("2", ["a", "y"])],
    )
    .unwrap();
    table.sort_by(0);
    let snapshot = table.clone();

    assert_eq!(table.sort_by(1), None);
    assert_eq!(table, snapshot);
    assert_eq!(table.sort(), Some((0, SortDirection::Ascending)));
}

#[test]
fn test_unparseable_numbers_sort_last_consistently() {
    let mut table = single_column(true, &["N/A", "3", "—", "1"]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["1", "3", "N/A", "—"]);
    table.sort_by(0);
    assert_eq!(column_texts(&table, 0), vec!["N/A", "—", "3", "1"]);
}

#[test]
fn test_view_notifies_subscribers() {
    let seen: Arc<Mutex<Vec<SortChange>>> = Arc::default();
    let mut view = TableView::new(score_table());

    let sink = Arc::clone(&seen);
    let subscription = view.subscribe(move |change, table| {
        assert_eq!(table.sort(), Some((change.column, change.direction)));
        sink.lock().unwrap().push(*change);
    });

    view.activate(1);
    view.activate(5);
    view.activate(1);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            SortChange {
                column: 1,
                direction: SortDirection::Ascending
            },
            SortChange {
                column: 1,
                direction: SortDirection::Descending
            },
        ]
    );

    assert!(view.unsubscribe(subscription));
    assert!(!view.unsubscribe(subscription));
    view.activate(0);
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(view.listener_count(), 0);
}

#[test]
fn test_view_replace_keeps_subscribers() {
    let seen: Arc<Mutex<Vec<SortChange>>> = Arc::default();
    let mut view = TableView::new(score_table());
    let sink = Arc::clone(&seen);
    view.subscribe(move |change, _| sink.lock().unwrap().push(*change));

    view.activate(1);
    view.replace(single_column(false, &["b", "a"]));
    assert_eq!(view.table().sort(), None);
    assert_eq!(view.listener_count(), 1);

    view.activate(0);
    assert_eq!(column_texts(view.table(), 0), vec!["a", "b"]);
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(seen.lock().unwrap()[1].column, 0);
}
