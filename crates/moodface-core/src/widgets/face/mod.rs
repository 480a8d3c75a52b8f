//! Emotional face widget.
//!
//! Renders a circular face whose mouth toggles between a smile and a frown
//! based on a two-valued mood. All geometry is proportional to the widget's
//! resolved square side, so the face scales with whatever size the host
//! grants it.
//!
//! # Example
//!
//! ```ignore
//! let mut face = FaceWidget::new().with_style(
//!     FaceStyle::new().with_face_color(Rgb565::CSS_LIGHT_PINK),
//! );
//!
//! face.measure(Size::new(240, 240));
//! face.set_mood(Mood::Sad);
//! face.draw(&mut framebuffer)?;
//! ```

pub mod constants;
mod component;
mod curve;

pub use component::FaceWidget;
pub use curve::MouthPath;

/// The widget's two-valued expression state, driving mouth geometry.
///
/// This is a closed enumeration: no third state is representable, and
/// [`FaceWidget::set_mood`] rejects out-of-domain input at the type level.
/// Integer tags only appear at the persistence boundary, where decoding is
/// lenient (see [`Mood::from_tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    /// Convex-down "smile" mouth.
    #[default]
    Happy,
    /// Concave "frown" mouth.
    Sad,
}

impl Mood {
    /// Integer tag used in the persisted state layout.
    pub const fn tag(self) -> u64 {
        match self {
            Mood::Happy => 0,
            Mood::Sad => 1,
        }
    }

    /// Lenient tag decoding: `0` is `Happy`, any other value is treated as
    /// "not happy" and renders `Sad`.
    pub const fn from_tag(tag: u64) -> Self {
        if tag == 0 { Mood::Happy } else { Mood::Sad }
    }

    pub const fn is_happy(self) -> bool {
        matches!(self, Mood::Happy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_for_both_moods() {
        assert_eq!(Mood::from_tag(Mood::Happy.tag()), Mood::Happy);
        assert_eq!(Mood::from_tag(Mood::Sad.tag()), Mood::Sad);
    }

    #[test]
    fn unrecognized_tags_are_not_happy() {
        assert_eq!(Mood::from_tag(2), Mood::Sad);
        assert_eq!(Mood::from_tag(u64::MAX), Mood::Sad);
    }

    #[test]
    fn default_mood_is_happy() {
        assert!(Mood::default().is_happy());
    }
}
