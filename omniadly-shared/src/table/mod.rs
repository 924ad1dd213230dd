//! Client-side table state machine.
//!
//! [`TableState`] holds what the user did (filter text, sort column, page),
//! and [`recompute`] turns it plus the current data into a [`TableView`].
//! Nothing here performs I/O or knows where the rows came from.

pub mod cell;
pub mod column;
pub mod state;
pub mod view;

pub use cell::CellValue;
pub use column::{Accessor, ColumnDef, ValueFn};
pub use state::{Pagination, SortDirection, SortState, TableState, clamp_page};
pub use view::{TableView, filtered_sorted_indices, recompute, total_pages};

/// Choices offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 6] = [5, 10, 20, 30, 40, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;
