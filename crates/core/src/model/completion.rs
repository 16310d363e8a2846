use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::ids::SessionId;

/// Durable slot key for the current completion schema.
///
/// The version suffix changes whenever the encoded shape changes, so older
/// values are never decoded as the new format.
pub const PROGRESS_SLOT_KEY: &str = "trainingPlanProgress_v2";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompletionCodecError {
    #[error("invalid completion payload: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode completion state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Completion flag per session id.
///
/// Missing ids read as incomplete, so an explicit `false` and an absent key are
/// interchangeable, including for equality. Ids unknown to the current plan are
/// kept as-is and ignored by statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionStore {
    flags: BTreeMap<SessionId, bool>,
}

impl CompletionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_complete(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<SessionId>, completed: bool) {
        self.flags.insert(id.into(), completed);
    }

    /// Flip the flag for `id` and return the new value.
    ///
    /// The id is not checked against any plan.
    pub fn toggle(&mut self, id: impl Into<SessionId>) -> bool {
        let flag = self.flags.entry(id.into()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// By-value form of [`CompletionStore::toggle`].
    #[must_use]
    pub fn toggled(mut self, id: impl Into<SessionId>) -> Self {
        self.toggle(id);
        self
    }

    /// Ids currently marked complete, in sorted order.
    pub fn completed_ids(&self) -> impl Iterator<Item = &SessionId> + '_ {
        self.flags
            .iter()
            .filter_map(|(id, done)| done.then_some(id))
    }

    /// Number of ids marked complete, stale ids included.
    #[must_use]
    pub fn completed_len(&self) -> usize {
        self.completed_ids().count()
    }

    /// Number of stored entries, including explicit `false` flags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Decode a persisted JSON object of `id -> bool`.
    ///
    /// # Errors
    ///
    /// Returns `CompletionCodecError::Decode` unless the payload is exactly a
    /// JSON object whose values are booleans.
    pub fn decode(raw: &str) -> Result<Self, CompletionCodecError> {
        serde_json::from_str(raw).map_err(CompletionCodecError::Decode)
    }

    /// Encode the full mapping as a JSON object with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns `CompletionCodecError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<String, CompletionCodecError> {
        serde_json::to_string(self).map_err(CompletionCodecError::Encode)
    }
}

impl PartialEq for CompletionStore {
    fn eq(&self, other: &Self) -> bool {
        self.completed_ids().eq(other.completed_ids())
    }
}

impl Eq for CompletionStore {}

impl<I: Into<SessionId>> FromIterator<(I, bool)> for CompletionStore {
    fn from_iter<T: IntoIterator<Item = (I, bool)>>(iter: T) -> Self {
        Self {
            flags: iter.into_iter().map(|(id, v)| (id.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reads_as_incomplete() {
        let store = CompletionStore::new();
        assert!(!store.is_complete("w1s1"));
    }

    #[test]
    fn toggle_flips_and_reports_new_value() {
        let mut store = CompletionStore::new();
        assert!(store.toggle("w1s1"));
        assert!(store.is_complete("w1s1"));
        assert!(!store.toggle("w1s1"));
        assert!(!store.is_complete("w1s1"));
        // explicit false is retained
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_equality() {
        let original: CompletionStore = [("w1s1", true), ("ghost", true)].into_iter().collect();
        let back = original.clone().toggled("w2s1").toggled("w2s1");
        assert_eq!(back, original);
        let back = original.clone().toggled("w1s1").toggled("w1s1");
        assert_eq!(back, original);
    }

    #[test]
    fn explicit_false_equals_absent() {
        let a: CompletionStore = [("w1s1", false)].into_iter().collect();
        assert_eq!(a, CompletionStore::new());
    }

    #[test]
    fn decode_accepts_bool_map_and_keeps_stale_ids() {
        let store = CompletionStore::decode(r#"{"w1s1":true,"w1s2":false,"ghost-id":true}"#)
            .unwrap();
        assert!(store.is_complete("w1s1"));
        assert!(!store.is_complete("w1s2"));
        assert!(store.is_complete("ghost-id"));
        assert_eq!(store.completed_len(), 2);
    }

    #[test]
    fn decode_rejects_other_shapes() {
        for raw in ["", "null", "[]", "[true]", "42", r#"{"w1s1":"yes"}"#, "{", r#"{"a":1}"#] {
            assert!(
                CompletionStore::decode(raw).is_err(),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn encode_writes_sorted_object() {
        let mut store = CompletionStore::new();
        store.set("w2s1", true);
        store.set("w1s2", false);
        assert_eq!(store.encode().unwrap(), r#"{"w1s2":false,"w2s1":true}"#);
    }
}
