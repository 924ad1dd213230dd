mod account;
mod dashboard;
pub mod login;
mod not_found;
pub mod payments;
mod profile_detail;
mod settings;
mod user_detail;

pub use account::AccountPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use payments::PaymentsPage;
pub use profile_detail::ProfileDetailPage;
pub use settings::SettingsPage;
pub use user_detail::UserDetailPage;
