use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a scheduled session (e.g. `w3s1`).
///
/// Ids are opaque strings. The completion store accepts any id so that
/// persisted progress survives schedule revisions; only `TrainingPlan`
/// enforces non-empty, unique ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new `SessionId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = SessionId::new("w1s1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"w1s1\"");
        let back: SessionId = serde_json::from_str("\"w1s1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn debug_and_display_formats() {
        let id = SessionId::from("w12s2");
        assert_eq!(format!("{id:?}"), "SessionId(w12s2)");
        assert_eq!(id.to_string(), "w12s2");
    }
}
