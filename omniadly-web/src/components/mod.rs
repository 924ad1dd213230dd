pub(crate) mod data_table;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod nav_item;
pub(crate) mod stat_card;
pub(crate) mod theme_switcher;
pub(crate) mod toaster;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use data_table::{Column, DataTable};
pub use loading::Loading;
pub use stat_card::StatCard;
