//! Widget implementations.

pub mod face;

pub use face::{FaceWidget, Mood};
