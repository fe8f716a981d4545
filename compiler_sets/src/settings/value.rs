//!
//! The stored value.
//!

///
/// The stored value.
///
/// Readers convert leniently, so a missing or mistyped value yields the type default.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean flag.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A string.
    String(String),
    /// A list of strings.
    List(Vec<String>),
}

impl Value {
    ///
    /// Converts the value into a string.
    ///
    pub fn into_string(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::String(value) => value,
            Self::List(values) => values.into_iter().next().unwrap_or_default(),
        }
    }

    ///
    /// Converts the value into a boolean.
    ///
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Integer(value) => *value != 0,
            Self::String(value) => matches!(value.trim(), "true" | "1"),
            Self::List(_) => false,
        }
    }

    ///
    /// Converts the value into an integer.
    ///
    pub fn to_integer(&self) -> i64 {
        match self {
            Self::Bool(value) => i64::from(*value),
            Self::Integer(value) => *value,
            Self::String(value) => value.trim().parse().unwrap_or_default(),
            Self::List(_) => 0,
        }
    }

    ///
    /// Converts the value into a list of strings.
    ///
    /// A non-empty scalar becomes a single-element list.
    ///
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(values) => values,
            Self::String(value) if value.is_empty() => Vec::new(),
            value => vec![value.into_string()],
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}
