use std::collections::BTreeMap;

use super::{ColumnDef, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

/// Largest valid page index for `total_pages`, or 0 when there are none.
pub const fn clamp_page(page_index: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else if page_index >= total_pages {
        total_pages - 1
    } else {
        page_index
    }
}

/// Interaction state owned by one table instance.
///
/// Mutators that take `total_pages` need the current derived view, since
/// the page count depends on the filtered data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sorting: Option<SortState>,
    pub global_filter: String,
    pub column_filters: BTreeMap<String, String>,
    pub pagination: Pagination,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sorting: None,
            global_filter: String::new(),
            column_filters: BTreeMap::new(),
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
        }
    }

    pub const fn page_index(&self) -> usize {
        self.pagination.page_index
    }

    pub const fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn set_global_filter(&mut self, filter: impl Into<String>) {
        self.global_filter = filter.into();
        self.pagination.page_index = 0;
    }

    /// Filter one column. An empty filter removes it.
    pub fn set_column_filter(&mut self, column_id: &str, filter: impl Into<String>) {
        let filter = filter.into();
        if filter.is_empty() {
            self.column_filters.remove(column_id);
        } else {
            self.column_filters.insert(column_id.to_string(), filter);
        }
        self.pagination.page_index = 0;
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|sort| sort.column_id == column_id)
            .map(|sort| sort.direction)
    }

    /// Header click: `asc → desc → none` on the same column, `asc` on a new one.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sorting = match self.sort_direction(column_id) {
            None => Some(SortState {
                column_id: column_id.to_string(),
                direction: SortDirection::Asc,
            }),
            Some(SortDirection::Asc) => Some(SortState {
                column_id: column_id.to_string(),
                direction: SortDirection::Desc,
            }),
            Some(SortDirection::Desc) => None,
        };
    }

    /// [`TableState::toggle_sort`] for columns that allow it. Returns whether
    /// the sort changed.
    pub fn toggle_column<T>(&mut self, column: &ColumnDef<T>) -> bool {
        if !column.can_sort() {
            return false;
        }
        self.toggle_sort(&column.id);
        true
    }

    pub fn clear_sort(&mut self) {
        self.sorting = None;
    }

    /// Page sizes below one are treated as one.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.page_size = page_size.max(1);
        self.pagination.page_index = 0;
    }

    pub fn set_page_index(&mut self, page_index: usize, total_pages: usize) {
        self.pagination.page_index = clamp_page(page_index, total_pages);
    }

    pub fn first_page(&mut self) {
        self.pagination.page_index = 0;
    }

    pub fn previous_page(&mut self, total_pages: usize) {
        let current = clamp_page(self.pagination.page_index, total_pages);
        self.pagination.page_index = current.saturating_sub(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        let current = clamp_page(self.pagination.page_index, total_pages);
        self.pagination.page_index = clamp_page(current + 1, total_pages);
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.pagination.page_index = total_pages.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = TableState::default();
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), 10);
        assert!(state.sorting.is_none());
        assert!(state.global_filter.is_empty());
    }

    #[test]
    fn test_toggle_cycles_asc_desc_none() {
        let mut state = TableState::default();
        state.toggle_sort("email");
        assert_eq!(state.sort_direction("email"), Some(SortDirection::Asc));
        state.toggle_sort("email");
        assert_eq!(state.sort_direction("email"), Some(SortDirection::Desc));
        state.toggle_sort("email");
        assert_eq!(state.sort_direction("email"), None);
        assert!(state.sorting.is_none());
    }

    #[test]
    fn test_other_column_restarts_at_asc() {
        let mut state = TableState::default();
        state.toggle_sort("email");
        state.toggle_sort("email");
        state.toggle_sort("amount");
        assert_eq!(state.sort_direction("amount"), Some(SortDirection::Asc));
        assert_eq!(state.sort_direction("email"), None);
    }

    #[test]
    fn test_unsortable_columns_are_ignored() {
        let mut state = TableState::default();
        let column = ColumnDef::<()>::display("actions", "");
        assert!(!state.toggle_column(&column));
        assert!(state.sorting.is_none());
    }

    #[test]
    fn test_filter_and_page_size_reset_page() {
        let mut state = TableState::default();
        state.set_page_index(3, 5);
        state.set_global_filter("b@");
        assert_eq!(state.page_index(), 0);

        state.set_page_index(3, 5);
        state.set_page_size(20);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), 20);

        state.set_page_index(3, 5);
        state.set_column_filter("email", "x");
        assert_eq!(state.page_index(), 0);
        state.set_column_filter("email", "");
        assert!(state.column_filters.is_empty());
    }

    #[test]
    fn test_zero_page_size_becomes_one() {
        let mut state = TableState::new(0);
        assert_eq!(state.page_size(), 1);
        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = TableState::default();
        state.set_page_index(9, 3);
        assert_eq!(state.page_index(), 2);
        state.next_page(3);
        assert_eq!(state.page_index(), 2);
        state.previous_page(3);
        assert_eq!(state.page_index(), 1);
        state.first_page();
        state.previous_page(3);
        assert_eq!(state.page_index(), 0);
        state.last_page(3);
        assert_eq!(state.page_index(), 2);
        state.set_page_index(4, 0);
        assert_eq!(state.page_index(), 0);
        state.last_page(0);
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_stale_index_is_clamped_before_moving() {
        let mut state = TableState::default();
        state.set_page_index(7, 8);
        state.previous_page(2);
        assert_eq!(state.page_index(), 0);
    }
}
