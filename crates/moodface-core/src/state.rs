//! Saved widget state for host-triggered reconstruction.
//!
//! When the host tears a widget down and rebuilds it (for example after a
//! display configuration change), the widget's only runtime-mutable field —
//! its mood — must survive the round trip. [`SavedState`] is the explicit
//! composite record for that: the mood as an integer tag, plus whatever
//! opaque payload the host's own base behavior wants carried alongside.
//!
//! The wire form is postcard; [`SavedState::from_bytes`] is the only place a
//! blob of unexpected shape can surface, and it does so as a recoverable
//! [`StateError`] rather than a panic.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::widgets::face::Mood;

/// Error types for saved-state encoding and decoding.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state record could not be serialized.
    #[error("saved state could not be encoded: {0}")]
    Encode(postcard::Error),

    /// The blob was malformed or truncated.
    #[error("saved state could not be decoded: {0}")]
    Decode(postcard::Error),
}

/// Composite saved-state record: `{mood, base}`.
///
/// `mood` is stored as its integer tag so the persisted layout stays an
/// integer-like field; `base` is the host's own opaque payload, carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    mood_tag: u64,
    base: Vec<u8>,
}

impl SavedState {
    /// Capture a mood with no base payload.
    pub fn new(mood: Mood) -> Self {
        Self {
            mood_tag: mood.tag(),
            base: Vec::new(),
        }
    }

    /// Attach the host's own opaque payload to the record.
    pub fn with_base(mut self, base: Vec<u8>) -> Self {
        self.base = base;
        self
    }

    /// The captured mood.
    ///
    /// Tags outside the two recognized values decode leniently via
    /// [`Mood::from_tag`].
    pub fn mood(&self) -> Mood {
        Mood::from_tag(self.mood_tag)
    }

    /// The host's opaque payload, to be forwarded to its base restore path.
    pub fn base(&self) -> &[u8] {
        &self.base
    }

    /// Serialize to the opaque blob handed to the host.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        postcard::to_allocvec(self).map_err(StateError::Encode)
    }

    /// Deserialize a blob produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        postcard::from_bytes(bytes).map_err(StateError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn mood_round_trips_through_bytes() {
        let state = SavedState::new(Mood::Sad);

        let bytes = state.to_bytes().unwrap();
        let restored = SavedState::from_bytes(&bytes).unwrap();

        assert_eq!(restored.mood(), Mood::Sad);
        assert_eq!(restored, state);
    }

    #[test]
    fn base_payload_is_carried_untouched() {
        let state = SavedState::new(Mood::Happy).with_base(vec![0xde, 0xad, 0xbe, 0xef]);

        let bytes = state.to_bytes().unwrap();
        let restored = SavedState::from_bytes(&bytes).unwrap();

        assert_eq!(restored.base(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn truncated_blob_is_a_decode_error() {
        let bytes = SavedState::new(Mood::Sad).to_bytes().unwrap();

        let result = SavedState::from_bytes(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(StateError::Decode(_))));
    }

    #[test]
    fn default_state_reads_happy() {
        assert_eq!(SavedState::default().mood(), Mood::Happy);
        assert!(SavedState::default().base().is_empty());
    }

    #[test]
    fn unrecognized_tag_reads_sad() {
        let state = SavedState {
            mood_tag: 42,
            base: Vec::new(),
        };

        let bytes = state.to_bytes().unwrap();
        assert_eq!(SavedState::from_bytes(&bytes).unwrap().mood(), Mood::Sad);
    }
}
