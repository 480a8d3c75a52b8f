//! Style configuration for the face widget.
//!
//! A [`FaceStyle`] is read once at widget construction and never mutated
//! afterwards. Unset options silently fall back to the defaults in
//! [`colors`](super::colors); there are no validation failures.

use embedded_graphics::pixelcolor::Rgb565;

use super::colors::{
    DEFAULT_BORDER_COLOR, DEFAULT_EYES_COLOR, DEFAULT_FACE_COLOR, DEFAULT_MOUTH_COLOR,
};

/// Default border stroke thickness in device-independent units.
pub const DEFAULT_BORDER_WIDTH: f32 = 4.0;

/// Visual configuration for a face widget.
///
/// # Examples
///
/// ```ignore
/// let style = FaceStyle::new()
///     .with_face_color(Rgb565::CSS_LIGHT_PINK)
///     .with_border_width(6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceStyle {
    /// Fill color of the background disc.
    pub face_color: Rgb565,

    /// Fill color of both eye ellipses.
    pub eyes_color: Rgb565,

    /// Fill color of the mouth lens.
    pub mouth_color: Rgb565,

    /// Stroke color of the border ring.
    pub border_color: Rgb565,

    /// Border stroke thickness in device-independent units (non-negative).
    pub border_width: f32,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            face_color: DEFAULT_FACE_COLOR,
            eyes_color: DEFAULT_EYES_COLOR,
            mouth_color: DEFAULT_MOUTH_COLOR,
            border_color: DEFAULT_BORDER_COLOR,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl FaceStyle {
    /// Creates a style with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face_color(mut self, color: Rgb565) -> Self {
        self.face_color = color;
        self
    }

    pub fn with_eyes_color(mut self, color: Rgb565) -> Self {
        self.eyes_color = color;
        self
    }

    pub fn with_mouth_color(mut self, color: Rgb565) -> Self {
        self.mouth_color = color;
        self
    }

    pub fn with_border_color(mut self, color: Rgb565) -> Self {
        self.border_color = color;
        self
    }

    /// Sets the border thickness. Negative values are clamped to zero.
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = width.max(0.0);
        self
    }
}
