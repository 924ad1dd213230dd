use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// Account role as reported by the OmniAdly API.
///
/// The API is inconsistent about how it encodes roles: the same admin can come
/// back as `"Admin"`, `2` or `"2"` depending on the endpoint. Every encoding is
/// resolved here, once, when the payload is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Admin,
    Customer,
    /// Anything else, kept verbatim for display. An empty string stays
    /// `Unknown("")`.
    Unknown(String),
    /// The field was absent or `null`.
    #[default]
    Missing,
}

impl Role {
    const ADMIN_CODE: i64 = 2;
    const CUSTOMER_CODE: i64 = 1;

    /// Resolve a raw JSON role value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Self::from_text(text),
            Value::Number(number) => match integral(number) {
                Some(Self::ADMIN_CODE) => Self::Admin,
                Some(Self::CUSTOMER_CODE) => Self::Customer,
                _ => Self::Unknown(number.to_string()),
            },
            Value::Null => Self::Missing,
            other => Self::Unknown(other.to_string()),
        }
    }

    fn from_text(text: &str) -> Self {
        match text {
            "Admin" | "2" => Self::Admin,
            "Customer" | "1" => Self::Customer,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The admin predicate gating the whole dashboard.
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Integer value of a JSON number, accepting integral floats such as `2.0`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral(number: &Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.is_finite() && value.fract() == 0.0)
            .map(|value| value as i64)
    })
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("Admin"),
            Self::Customer => f.write_str("Customer"),
            Self::Unknown(raw) => f.write_str(raw),
            Self::Missing => f.write_str("Unknown"),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::from_text(value)
    }
}

impl From<i64> for Role {
    fn from(value: i64) -> Self {
        Self::from_value(&Value::from(value))
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Missing => serializer.serialize_none(),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_every_admin_encoding_is_admin() {
        for raw in [json!("Admin"), json!(2), json!("2"), json!(2.0)] {
            assert!(Role::from_value(&raw).is_admin(), "{raw} should be admin");
        }
    }

    #[test]
    fn test_other_encodings_are_not_admin() {
        for raw in [
            json!("admin"),
            json!("ADMIN"),
            json!(1),
            json!(0),
            json!("1"),
            json!(null),
            json!(2.5),
            json!(true),
            json!(""),
        ] {
            assert!(!Role::from_value(&raw).is_admin(), "{raw} should not be admin");
        }
    }

    #[test]
    fn test_customer_codes_resolve() {
        assert_eq!(Role::from_value(&json!(1)), Role::Customer);
        assert_eq!(Role::from_value(&json!("1")), Role::Customer);
        assert_eq!(Role::from("Customer"), Role::Customer);
    }

    #[test]
    fn test_unknown_roles_keep_raw_text() {
        assert_eq!(Role::from("admin"), Role::Unknown("admin".into()));
        assert_eq!(Role::from(7), Role::Unknown("7".into()));
        assert_eq!(Role::from("admin").to_string(), "admin");
    }

    #[derive(Debug, Deserialize, Serialize)]
    struct Holder {
        #[serde(default)]
        role: Role,
    }

    #[test]
    fn test_missing_field_decodes_as_missing() {
        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(holder.role, Role::Missing);
        assert!(!holder.role.is_admin());
    }

    #[test]
    fn test_null_is_missing_and_empty_text_is_unknown() {
        assert_eq!(Role::from_value(&json!(null)), Role::Missing);
        assert_eq!(Role::from_value(&json!("")), Role::Unknown(String::new()));
    }

    #[test]
    fn test_admin_serializes_canonically() {
        let holder: Holder = serde_json::from_value(json!({ "role": 2 })).unwrap();
        assert_eq!(serde_json::to_value(&holder).unwrap(), json!({ "role": "Admin" }));
    }
}
