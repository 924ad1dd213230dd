use serde::Serialize;

use super::column::serialize_row;
use super::state::{SortDirection, TableState, clamp_page};
use super::{CellValue, ColumnDef};

/// Everything the table renders, derived from state and data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Indices into the data slice for the visible page, in display order.
    pub rows: Vec<usize>,
    pub total_items: usize,
    pub total_pages: usize,
    /// Page actually shown, after clamping to the available pages.
    pub page_index: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub can_previous_page: bool,
    pub can_next_page: bool,
    /// One-based position of the first visible row, 0 when empty.
    pub first_item: usize,
    pub last_item: usize,
}

impl TableView {
    pub const fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Visible rows of `data`.
    pub fn page_rows<'a, T>(&'a self, data: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        self.rows.iter().filter_map(move |index| data.get(*index))
    }
}

/// `ceil(total_items / page_size)`.
pub const fn total_pages(total_items: usize, page_size: usize) -> usize {
    let page_size = if page_size == 0 { 1 } else { page_size };
    total_items.div_ceil(page_size)
}

struct Candidate {
    index: usize,
    sort_key: CellValue,
}

/// Indices of the rows passing every filter, in sorted order.
///
/// Filters match case-insensitively against each filterable column's text.
/// Sorting is stable, so equal keys keep their original relative order.
pub fn filtered_sorted_indices<T, C>(state: &TableState, columns: &[C], data: &[T]) -> Vec<usize>
where
    T: Serialize,
    C: AsRef<ColumnDef<T>>,
{
    let global = state.global_filter.to_lowercase();
    let column_filters: Vec<(&ColumnDef<T>, String)> = state
        .column_filters
        .iter()
        .filter(|(_, filter)| !filter.is_empty())
        .filter_map(|(id, filter)| {
            columns
                .iter()
                .map(AsRef::as_ref)
                .find(|column| column.id == *id && column.can_filter())
                .map(|column| (column, filter.to_lowercase()))
        })
        .collect();
    let sort = state.sorting.as_ref().and_then(|sort| {
        columns
            .iter()
            .map(AsRef::as_ref)
            .find(|column| column.id == sort.column_id && column.can_sort())
            .map(|column| (column, sort.direction))
    });

    let needs_values = !global.is_empty() || !column_filters.is_empty() || sort.is_some();
    let mut candidates: Vec<Candidate> = data
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if !needs_values {
                return Some(Candidate {
                    index,
                    sort_key: CellValue::Empty,
                });
            }
            let serialized = serialize_row(row);
            let passes_columns = column_filters.iter().all(|(column, filter)| {
                column.extract(row, &serialized).contains_lowercase(filter)
            });
            let passes_global = global.is_empty()
                || columns
                    .iter()
                    .map(AsRef::as_ref)
                    .filter(|column| column.can_filter())
                    .any(|column| column.extract(row, &serialized).contains_lowercase(&global));
            (passes_columns && passes_global).then(|| Candidate {
                index,
                sort_key: sort.map_or(CellValue::Empty, |(column, _)| {
                    column.extract(row, &serialized)
                }),
            })
        })
        .collect();

    if let Some((_, direction)) = sort {
        candidates.sort_by(|left, right| {
            let ordering = left.sort_key.compare(&right.sort_key);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    candidates.into_iter().map(|candidate| candidate.index).collect()
}

/// Derive the rendered view. Pure; call again after every state change and
/// whenever `data` is replaced.
pub fn recompute<T, C>(state: &TableState, columns: &[C], data: &[T]) -> TableView
where
    T: Serialize,
    C: AsRef<ColumnDef<T>>,
{
    let indices = filtered_sorted_indices(state, columns, data);
    let total_items = indices.len();
    let page_size = state.page_size().max(1);
    let total_pages = total_pages(total_items, page_size);
    let page_index = clamp_page(state.page_index(), total_pages);

    let start = page_index.saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    TableView {
        rows: indices[start..end].to_vec(),
        total_items,
        total_pages,
        page_index,
        page_size,
        current_page: page_index + 1,
        can_previous_page: page_index > 0,
        can_next_page: page_index + 1 < total_pages,
        first_item: if total_items == 0 { 0 } else { start + 1 },
        last_item: end,
    }
}
