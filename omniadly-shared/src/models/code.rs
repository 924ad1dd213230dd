use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Enumerated field the API sends either as its numeric code or as its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeOrLabel {
    Code(i64),
    Label(String),
}

impl CodeOrLabel {
    /// Resolve to a display label. Strings pass through untouched, codes go
    /// through `table`, and unmapped codes read `Unknown`.
    pub fn resolve<'a>(&'a self, table: &[(i64, &'static str)]) -> Cow<'a, str> {
        match self {
            Self::Label(label) => Cow::Borrowed(label.as_str()),
            Self::Code(code) => Cow::Borrowed(
                table
                    .iter()
                    .find(|(candidate, _)| candidate == code)
                    .map_or("Unknown", |(_, label)| *label),
            ),
        }
    }
}

impl Default for CodeOrLabel {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl fmt::Display for CodeOrLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

macro_rules! coded_field {
    ($(#[$meta:meta])* $name:ident, [$(($code:literal, $label:literal)),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub CodeOrLabel);

        impl $name {
            pub const LABELS: &'static [(i64, &'static str)] = &[$(($code, $label)),*];

            /// Human readable label.
            pub fn label(&self) -> Cow<'_, str> {
                self.0.resolve(Self::LABELS)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.label())
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self(CodeOrLabel::Code(code))
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self(CodeOrLabel::Label(label.to_string()))
            }
        }
    };
}

coded_field!(
    /// Subscription tier of a profile.
    ProfileType,
    [(0, "Free"), (1, "Basic"), (2, "Pro")]
);

coded_field!(
    /// Lifecycle status of a profile.
    ProfileStatus,
    [(0, "Pending"), (1, "Active"), (2, "Suspended"), (3, "Cancelled")]
);

/// Status of a payment. Rendered exactly as the API sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentStatus(pub CodeOrLabel);

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_profile_types_map_to_tiers() {
        assert_eq!(ProfileType::from(0).label(), "Free");
        assert_eq!(ProfileType::from(1).label(), "Basic");
        assert_eq!(ProfileType::from(2).label(), "Pro");
        assert_eq!(ProfileType::from(9).label(), "Unknown");
    }

    #[test]
    fn test_string_values_pass_through() {
        let status: ProfileStatus = serde_json::from_value(json!("Archived")).unwrap();
        assert_eq!(status.label(), "Archived");
        let status: ProfileStatus = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(status.to_string(), "Suspended");
    }

    #[test]
    fn test_payment_status_keeps_raw_code() {
        let status: PaymentStatus = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(status.to_string(), "1");
        let status: PaymentStatus = serde_json::from_value(json!("Succeeded")).unwrap();
        assert_eq!(status.to_string(), "Succeeded");
    }

    #[test]
    fn test_serializes_in_wire_shape() {
        assert_eq!(serde_json::to_value(ProfileType::from(2)).unwrap(), json!(2));
        assert_eq!(
            serde_json::to_value(ProfileStatus::from("Active")).unwrap(),
            json!("Active")
        );
    }
}
