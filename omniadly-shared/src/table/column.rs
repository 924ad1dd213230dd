use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;

use super::CellValue;

/// Computes a column's value from a row.
pub type ValueFn<T> = Rc<dyn Fn(&T) -> CellValue>;

/// How a column reads its value.
pub enum Accessor<T> {
    /// Named field of the row's serialized form. Dots descend into nested
    /// objects (`owner.email`).
    Key(String),
    Value(ValueFn<T>),
    /// No value at all: row numbers, action buttons and the like.
    Display,
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Key(key) => Self::Key(key.clone()),
            Self::Value(value) => Self::Value(Rc::clone(value)),
            Self::Display => Self::Display,
        }
    }
}

impl<T> PartialEq for Accessor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Key(left), Self::Key(right)) => left == right,
            (Self::Value(left), Self::Value(right)) => Rc::ptr_eq(left, right),
            (Self::Display, Self::Display) => true,
            _ => false,
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Value(_) => f.write_str("Value(..)"),
            Self::Display => f.write_str("Display"),
        }
    }
}

/// Declaration of one table column.
pub struct ColumnDef<T> {
    pub id: String,
    pub header: String,
    accessor: Accessor<T>,
    enable_sorting: bool,
}

impl<T> ColumnDef<T> {
    /// Column reading the field `key`; the key doubles as the column id.
    pub fn accessor_key(key: impl Into<String>, header: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            header: header.into(),
            accessor: Accessor::Key(key),
            enable_sorting: true,
        }
    }

    /// Column whose value is computed from the row.
    pub fn accessor_fn<F>(id: impl Into<String>, header: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> CellValue + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Accessor::Value(Rc::new(value)),
            enable_sorting: true,
        }
    }

    /// Display-only column. Never filtered, never sorted.
    pub fn display(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: Accessor::Display,
            enable_sorting: false,
        }
    }

    #[must_use]
    pub fn sortable(mut self, enabled: bool) -> Self {
        self.enable_sorting = enabled;
        self
    }

    pub const fn accessor(&self) -> &Accessor<T> {
        &self.accessor
    }

    pub const fn can_sort(&self) -> bool {
        self.enable_sorting && self.can_filter()
    }

    pub const fn can_filter(&self) -> bool {
        !matches!(self.accessor, Accessor::Display)
    }

    /// Value of this column for `row`, given the row's serialized form.
    pub fn extract(&self, row: &T, serialized: &Value) -> CellValue {
        match &self.accessor {
            Accessor::Key(path) => {
                lookup(serialized, path).map_or(CellValue::Empty, CellValue::from_json)
            }
            Accessor::Value(value) => value(row),
            Accessor::Display => CellValue::Empty,
        }
    }
}

impl<T: Serialize> ColumnDef<T> {
    /// Value of this column for `row`. Missing fields read as empty.
    pub fn value_of(&self, row: &T) -> CellValue {
        match &self.accessor {
            Accessor::Key(_) => self.extract(row, &serialize_row(row)),
            _ => self.extract(row, &Value::Null),
        }
    }
}

/// Serialized form of a row; `Null` if the row cannot be serialized.
pub fn serialize_row<T: Serialize>(row: &T) -> Value {
    serde_json::to_value(row).unwrap_or(Value::Null)
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(fields) => fields.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            enable_sorting: self.enable_sorting,
        }
    }
}

impl<T> PartialEq for ColumnDef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.header == other.header
            && self.enable_sorting == other.enable_sorting
            && self.accessor == other.accessor
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("enable_sorting", &self.enable_sorting)
            .finish()
    }
}

impl<T> AsRef<Self> for ColumnDef<T> {
    fn as_ref(&self) -> &Self {
        self
    }
}
