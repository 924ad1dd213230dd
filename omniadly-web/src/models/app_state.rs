use shared::models::AdminUser;
use yewdux::Store;

/// State shared by every view.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    /// Administrator confirmed by the most recent gate check.
    pub user: Option<AdminUser>,
}
