//! Default color definitions for the face widget.
//!
//! All colors use the RGB565 format (5 bits red, 6 bits green, 5 bits blue)
//! shared by the rest of the drawing stack. Hosts supply their own colors
//! through [`FaceStyle`](super::FaceStyle); these constants are the fallbacks
//! applied when a style option is left unset.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Default fill color for the face disc.
pub const DEFAULT_FACE_COLOR: Rgb565 = Rgb565::YELLOW;

/// Default fill color for both eyes.
pub const DEFAULT_EYES_COLOR: Rgb565 = Rgb565::BLACK;

/// Default fill color for the mouth.
pub const DEFAULT_MOUTH_COLOR: Rgb565 = Rgb565::BLACK;

/// Default stroke color for the face border.
pub const DEFAULT_BORDER_COLOR: Rgb565 = Rgb565::BLACK;
