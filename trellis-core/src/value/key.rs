//! Property keys.

use std::fmt;

/// A property name on an object or an index into an array.
///
/// Nodes normalize keys against their container: numeric names become
/// indices on arrays and indices become names on objects, so `"2"` and `2`
/// address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl Key {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Name(name) => name.parse().ok(),
            Key::Index(index) => Some(*index),
        }
    }

    /// The key as an object property name.
    pub fn to_name(&self) -> String {
        match self {
            Key::Name(name) => name.clone(),
            Key::Index(index) => index.to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Name(name.clone())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_names_convert_to_indices() {
        assert_eq!(Key::from("3").as_index(), Some(3));
        assert_eq!(Key::from("three").as_index(), None);
        assert_eq!(Key::from(3).to_name(), "3");
    }

    #[test]
    fn display() {
        assert_eq!(Key::from("total").to_string(), "total");
        assert_eq!(Key::from(7).to_string(), "7");
    }
}
