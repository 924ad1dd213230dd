use serde::Serialize;
use shared::table::{ColumnDef, TableState, recompute};

#[derive(Debug, Clone, Serialize)]
struct Charge {
    email: String,
    amount: f64,
    note: Option<String>,
}

fn charge(email: &str, amount: f64) -> Charge {
    Charge {
        email: email.to_string(),
        amount,
        note: None,
    }
}

fn columns() -> Vec<ColumnDef<Charge>> {
    vec![
        ColumnDef::accessor_key("email", "Email"),
        ColumnDef::accessor_key("amount", "Amount"),
        ColumnDef::accessor_key("note", "Note"),
        ColumnDef::display("actions", "Actions"),
    ]
}

// Deterministic spread of emails and amounts with plenty of duplicates.
fn generated(len: usize) -> Vec<Charge> {
    let names = ["alice", "Bob", "carol", "DAVE", "erin", "bob"];
    (0..len)
        .map(|n| {
            let name = names[n % names.len()];
            let domain = if n % 3 == 0 { "x.com" } else { "mail.io" };
            let mut row = charge(&format!("{name}{}@{domain}", n % 4), ((n * 7) % 11) as f64);
            if n % 5 == 0 {
                row.note = Some(format!("refund #{n}"));
            }
            row
        })
        .collect()
}

fn visible_text(row: &Charge) -> Vec<String> {
    columns()
        .iter()
        .filter(|column| column.can_filter())
        .map(|column| column.value_of(row).to_text().to_lowercase())
        .collect()
}

#[test]
fn test_global_filter_only_keeps_matching_rows() {
    let filters = ["", "b", "BOB", "x.com", "@mail", "7", "refund", "zzz", "0@"];
    for len in [0, 1, 6, 17, 40] {
        let data = generated(len);
        for filter in filters {
            let mut state = TableState::new(1000);
            state.set_global_filter(filter);
            let view = recompute(&state, &columns(), &data);

            assert!(view.total_items <= data.len());
            if filter.is_empty() {
                assert_eq!(view.total_items, data.len());
            }
            let needle = filter.to_lowercase();
            for row in view.page_rows(&data) {
                assert!(
                    visible_text(row).iter().any(|text| text.contains(&needle)),
                    "{row:?} does not match {filter:?}"
                );
            }
        }
    }
}

#[test]
fn test_sorting_is_stable_and_idempotent() {
    let data = generated(30);
    for column in ["email", "amount", "note"] {
        let mut once = TableState::new(1000);
        once.toggle_sort(column);
        let sorted_once = recompute(&once, &columns(), &data).rows;

        let sorted_again: Vec<Charge> = sorted_once.iter().map(|i| data[*i].clone()).collect();
        let resorted = recompute(&once, &columns(), &sorted_again).rows;
        assert_eq!(resorted, (0..sorted_again.len()).collect::<Vec<_>>(), "{column}");

        // Equal keys keep their original relative order.
        for pair in sorted_once.windows(2) {
            let left = columns()
                .iter()
                .find(|def| def.id == column)
                .map(|def| (def.value_of(&data[pair[0]]), def.value_of(&data[pair[1]])));
            if let Some((left_key, right_key)) = left {
                if left_key.compare(&right_key).is_eq() {
                    assert!(pair[0] < pair[1], "{column}: unstable at {pair:?}");
                }
            }
        }
    }
}

#[test]
fn test_three_toggles_restore_filtered_order() {
    let data = generated(25);
    let mut state = TableState::new(1000);
    state.set_global_filter("b");
    let unsorted = recompute(&state, &columns(), &data).rows;

    state.toggle_sort("amount");
    state.toggle_sort("amount");
    assert_ne!(recompute(&state, &columns(), &data).rows, unsorted);
    state.toggle_sort("amount");
    assert_eq!(recompute(&state, &columns(), &data).rows, unsorted);
}

#[test]
fn test_pages_partition_the_filtered_rows() {
    for len in [0, 1, 9, 10, 11, 37, 50] {
        let data = generated(len);
        for page_size in [1, 3, 5, 10, 20] {
            let mut state = TableState::new(page_size);
            let first = recompute(&state, &columns(), &data);
            let mut seen = Vec::new();
            for page in 0..first.total_pages {
                state.set_page_index(page, first.total_pages);
                let view = recompute(&state, &columns(), &data);
                assert!(view.rows.len() <= page_size);
                if page + 1 == first.total_pages {
                    let expected = match len % page_size {
                        0 => page_size,
                        rest => rest,
                    };
                    assert_eq!(view.rows.len(), expected, "len {len} size {page_size}");
                }
                seen.extend(view.rows);
            }
            assert_eq!(seen.len(), first.total_items);
            assert_eq!(seen, (0..len).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_page_size_and_filter_changes_reset_page() {
    let data = generated(60);
    let mut state = TableState::new(5);
    let total = recompute(&state, &columns(), &data).total_pages;

    state.set_page_index(4, total);
    state.set_page_size(10);
    assert_eq!(state.page_index(), 0);

    state.set_page_index(4, total);
    state.set_global_filter("carol");
    assert_eq!(state.page_index(), 0);
    assert_eq!(recompute(&state, &columns(), &data).page_index, 0);
}

#[test]
fn test_two_rows_fit_on_one_page() {
    let data = vec![charge("a@x.com", 10.0), charge("b@x.com", 5.0)];
    let view = recompute(&TableState::new(10), &columns(), &data);

    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(!view.can_next_page);
    assert!(!view.can_previous_page);
}

#[test]
fn test_filter_narrows_to_single_row() {
    let data = vec![charge("a@x.com", 10.0), charge("b@x.com", 5.0)];
    let mut state = TableState::new(10);
    state.set_global_filter("b@");
    let view = recompute(&state, &columns(), &data);

    assert_eq!(view.total_items, 1);
    let emails: Vec<&str> = view.page_rows(&data).map(|row| row.email.as_str()).collect();
    assert_eq!(emails, vec!["b@x.com"]);
}

#[test]
fn test_rows_missing_fields_never_break_sorting() {
    let data = generated(12);
    let mut state = TableState::new(50);
    state.toggle_sort("note");
    let view = recompute(&state, &columns(), &data);
    assert_eq!(view.total_items, 12);

    state.toggle_sort("actions");
    let view = recompute(&state, &columns(), &data);
    assert_eq!(view.total_items, 12);
}
