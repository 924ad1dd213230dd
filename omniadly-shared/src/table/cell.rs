use std::cmp::Ordering;

use serde_json::Value;

use crate::format::format_number;

/// Value a column extracts from a row, used for filtering and sorting.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Missing or null field. Behaves as the empty string.
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => number.as_f64().map_or(Self::Empty, Self::Number),
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Text the global filter matches against.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(*number),
            Self::Bool(flag) => flag.to_string(),
        }
    }

    /// Case-insensitive substring test. `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.to_text().to_lowercase().contains(needle)
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Empty | Self::Text(_) => 2,
        }
    }

    /// Total order used by column sorting. Values of different kinds order
    /// booleans, then numbers, then text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(left), Self::Number(right)) => left.total_cmp(right),
            (Self::Bool(left), Self::Bool(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()).then_with(|| {
                self.to_text()
                    .to_lowercase()
                    .cmp(&other.to_text().to_lowercase())
            }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<u32> for CellValue {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl<V: Into<Self>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_values_map_to_cells() {
        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from_json(&json!(5)), CellValue::Number(5.0));
        assert_eq!(CellValue::from_json(&json!("x")), CellValue::from("x"));
        assert_eq!(CellValue::from_json(&json!(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_integral_numbers_match_without_fraction() {
        let cell = CellValue::Number(10.0);
        assert_eq!(cell.to_text(), "10");
        assert!(cell.contains_lowercase("10"));
        assert!(!cell.contains_lowercase("10.0"));
    }

    #[test]
    fn test_numbers_sort_numerically() {
        assert_eq!(
            CellValue::Number(5.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_text_sorts_case_insensitively() {
        assert_eq!(
            CellValue::from("apple").compare(&CellValue::from("Banana")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("ABC").compare(&CellValue::from("abc")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_empty_sorts_as_empty_text() {
        assert_eq!(CellValue::Empty.compare(&CellValue::from("a")), Ordering::Less);
        assert_eq!(CellValue::Empty.compare(&CellValue::from("")), Ordering::Equal);
        assert_eq!(
            CellValue::Number(1.0).compare(&CellValue::Empty),
            Ordering::Less
        );
    }

    #[test]
    fn test_optional_values_convert() {
        assert_eq!(CellValue::from(None::<String>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(3_u32)), CellValue::Number(3.0));
    }
}
