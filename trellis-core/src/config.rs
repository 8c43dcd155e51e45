//! Engine Options
//!
//! Options are fixed when a root node is created and shared by every node in
//! that tree. They can be built in code or loaded from a JSON document:
//!
//! ```rust,ignore
//! let options = Options::from_json(r#"{ "private_prefix": "$", "max_depth": 64 }"#)?;
//! let root = Node::with_options(state, options)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Properties whose name starts with this marker are left out of
    /// snapshots. An empty prefix disables the rule.
    pub private_prefix: String,

    /// Raise [`Error::Cycle`](crate::Error::Cycle) when a computed property
    /// re-enters its own evaluation, or an update re-enters its own
    /// propagation, instead of recursing without bound.
    pub detect_cycles: bool,

    /// Optional cap on nested update propagation (dependents plus
    /// ancestors). `None` leaves acyclic graphs of any depth unbounded.
    pub max_depth: Option<usize>,

    /// Run update propagation even when a write stores a value identical
    /// to the one already present.
    pub notify_identical_writes: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            private_prefix: "_".to_string(),
            detect_cycles: true,
            max_depth: None,
            notify_identical_writes: true,
        }
    }
}

impl Options {
    /// Parse options from JSON. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_private_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.private_prefix = prefix.into();
        self
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_identical_writes(mut self, notify: bool) -> Self {
        self.notify_identical_writes = notify;
        self
    }

    /// Whether `name` is hidden from snapshots.
    pub fn is_private(&self, name: &str) -> bool {
        !self.private_prefix.is_empty() && name.starts_with(&self.private_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.private_prefix, "_");
        assert!(options.detect_cycles);
        assert_eq!(options.max_depth, None);
        assert!(options.notify_identical_writes);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options = Options::from_json(r#"{ "private_prefix": "$" }"#).unwrap();
        assert_eq!(options.private_prefix, "$");
        assert_eq!(options.max_depth, None);

        let capped = Options::from_json(r#"{ "max_depth": 64 }"#).unwrap();
        assert_eq!(capped.max_depth, Some(64));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Options::from_json(r#"{ "max_dept": 3 }"#).is_err());
    }

    #[test]
    fn private_marker() {
        let options = Options::default();
        assert!(options.is_private("_secret"));
        assert!(!options.is_private("public"));

        let disabled = Options::default().with_private_prefix("");
        assert!(!disabled.is_private("_secret"));
    }
}
