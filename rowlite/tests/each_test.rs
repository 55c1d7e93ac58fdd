//! Integration tests for callback-driven traversal
//!
//! `each` binds typed values from columns 0..N-1 according to the
//! callback's own parameter list and reports how many rows the callback
//! ran for (-1 for an unbound cursor).

use rowlite::{ResultSet, RowCursor};

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn person_set() -> ResultSet {
    ResultSet::from_rows(
        3,
        vec![
            vec![text("1"), text("A"), text("62.5")],
            vec![text("2"), text("B"), None],
            vec![text("3"), text("C"), text("56.0")],
        ],
    )
    .expect("well-formed rows")
}

#[test]
fn test_each_binds_declared_parameter_types() {
    let mut cursor = RowCursor::from_set(person_set());

    let mut rows = Vec::new();
    let visited = cursor.each(|id: i32, name: String, weight: Option<f64>| {
        rows.push((id, name, weight));
        true
    });

    assert_eq!(visited, 3);
    assert_eq!(
        rows,
        vec![
            (1, "A".to_string(), Some(62.5)),
            (2, "B".to_string(), None),
            (3, "C".to_string(), Some(56.0)),
        ]
    );
}

#[test]
fn test_each_on_unbound_cursor_returns_minus_one() {
    let mut cursor = RowCursor::unbound();
    let mut calls = 0;
    let visited = cursor.each(|_: i32| {
        calls += 1;
        true
    });
    assert_eq!(visited, -1);
    assert_eq!(calls, 0);
}

#[test]
fn test_each_on_empty_result_returns_zero() {
    let mut cursor = RowCursor::from_set(ResultSet::new(1));
    let mut calls = 0;
    let visited = cursor.each(|_: i32| {
        calls += 1;
        true
    });
    assert_eq!(visited, 0);
    assert_eq!(calls, 0);

    // A successful statement without result data also reports 0.
    let mut statement = RowCursor::statement();
    assert_eq!(statement.each(|_: i32| true), 0);
}

#[test]
fn test_callback_returning_false_stops_after_that_row() {
    let mut cursor = RowCursor::from_set(person_set());

    let mut seen = Vec::new();
    let visited = cursor.each(|id: i32| {
        seen.push(id);
        id < 2 // stop on row index 1
    });

    assert_eq!(visited, 2);
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn test_zero_parameter_callback_runs_once_per_row() {
    let mut cursor = RowCursor::from_set(person_set());
    let mut calls = 0;
    let visited = cursor.each(|| {
        calls += 1;
        true
    });
    assert_eq!(visited, 3);
    assert_eq!(calls, 3);
}

#[test]
fn test_each_restarts_from_the_first_row() {
    let mut cursor = RowCursor::from_set(person_set());
    cursor.seek(2);

    let mut first = None;
    cursor.each(|id: i32| {
        first.get_or_insert(id);
        true
    });
    assert_eq!(first, Some(1));

    // Repeated traversals see the same data.
    assert_eq!(cursor.each(|_: i32| true), 3);
    assert_eq!(cursor.each(|_: i32| true), 3);
}

#[test]
fn test_each_with_fewer_parameters_than_columns() {
    // Only columns 0..N-1 are bound; extra columns are ignored.
    let mut cursor = RowCursor::from_set(person_set());
    let mut ids = Vec::new();
    let visited = cursor.each(|id: i32| {
        ids.push(id);
        true
    });
    assert_eq!(visited, 3);
    assert_eq!(ids, vec![1, 2, 3]);
}
