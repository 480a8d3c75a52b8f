//! Moodface UI system.
//!
//! Provides the host-facing widget lifecycle trait, dirty-region tracking,
//! and the styling layer for the face widget.

pub mod core;
pub mod styling;

// Re-export commonly used items
pub use self::core::{DirtyRegion, MAX_DIRTY_REGIONS, Widget};
pub use styling::{
    DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH, DEFAULT_EYES_COLOR, DEFAULT_FACE_COLOR,
    DEFAULT_MOUTH_COLOR, FaceStyle,
};
