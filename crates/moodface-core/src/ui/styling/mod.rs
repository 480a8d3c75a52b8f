//! Styling layer for the face widget.
//!
//! Default colors live in [`colors`]; [`style::FaceStyle`] bundles them with
//! the border width into the widget's one-shot configuration record.

pub mod colors;
pub mod style;

pub use colors::{
    DEFAULT_BORDER_COLOR, DEFAULT_EYES_COLOR, DEFAULT_FACE_COLOR, DEFAULT_MOUTH_COLOR,
};
pub use style::{DEFAULT_BORDER_WIDTH, FaceStyle};
