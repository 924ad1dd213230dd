//! Toast notifications.

use shared::auth::NoticeLevel;
use uuid::Uuid;
use yewdux::Store;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: NoticeLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            level,
        }
    }

    /// DaisyUI alert class for the level.
    pub const fn alert_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Warning => "alert-warning",
            NoticeLevel::Error => "alert-error",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut state = ToastState::default();
        let first = Toast::new("Logged out successfully", NoticeLevel::Success);
        let second = Toast::new("Failed to verify admin privileges.", NoticeLevel::Error);
        let first_id = first.id;
        state.push(first);
        state.push(second);
        assert_eq!(state.toasts.len(), 2);

        state.dismiss(first_id);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].alert_class(), "alert-error");
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut state = ToastState::default();
        state.push(Toast::new("hello", NoticeLevel::Info));
        state.dismiss(Uuid::new_v4());
        assert_eq!(state.toasts.len(), 1);
    }
}
