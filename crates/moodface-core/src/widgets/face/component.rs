//! The face widget itself: configuration intake, mood state, layout,
//! painting, and state preservation.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Ellipse, PrimitiveStyle, Rectangle};
use log::warn;

use crate::state::SavedState;
use crate::ui::core::Widget;
use crate::ui::styling::FaceStyle;

use super::Mood;
use super::constants::{EYE_BOTTOM_Y, EYE_TOP_Y, LEFT_EYE_LEFT_X, LEFT_EYE_RIGHT_X};
use super::curve::MouthPath;

/// A circular face whose mouth toggles between a smile and a frown.
///
/// Style options are read once at construction through the builder methods
/// and never mutated afterwards; the mood is the only runtime-mutable field.
/// Every mood mutation marks the widget dirty so the host's next draw pass
/// picks it up.
pub struct FaceWidget {
    origin: Point,
    side: u32,
    mood: Mood,
    style: FaceStyle,
    dirty: bool,
}

impl Default for FaceWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl FaceWidget {
    /// Create a widget with default style and a happy mood.
    ///
    /// The side is zero until the first measure pass.
    pub fn new() -> Self {
        Self {
            origin: Point::zero(),
            side: 0,
            mood: Mood::default(),
            style: FaceStyle::default(),
            dirty: true,
        }
    }

    /// Apply a style read from the host's configuration surface.
    pub fn with_style(mut self, style: FaceStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the initial mood from configuration.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// Place the widget's square at a host-assigned position.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Update the mood and unconditionally schedule a redraw.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        self.dirty = true;
    }

    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// The resolved square edge length from the last measure pass.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Restore from an opaque blob produced by a previous instance.
    ///
    /// A malformed blob is not an error at this boundary: the widget falls
    /// back to the default state so a damaged bundle can never take the host
    /// down with it.
    pub fn restore_from_bytes(&mut self, bytes: &[u8]) {
        match SavedState::from_bytes(bytes) {
            Ok(state) => self.restore_state(state),
            Err(err) => {
                warn!("Discarding malformed saved state: {err}");
                self.restore_state(SavedState::default());
            }
        }
    }

    /// Bounding boxes of the two eyes at the current size.
    ///
    /// The right box is the left box mirrored about the vertical centerline,
    /// derived from the same rounded pixels so the pair stays symmetric at
    /// every side length.
    pub fn eye_boxes(&self) -> (Rectangle, Rectangle) {
        let s = self.side as f32;

        let left_x0 = (LEFT_EYE_LEFT_X * s + 0.5) as i32;
        let left_x1 = (LEFT_EYE_RIGHT_X * s + 0.5) as i32;
        let top_y = (EYE_TOP_Y * s + 0.5) as i32;
        let bottom_y = (EYE_BOTTOM_Y * s + 0.5) as i32;

        let size = Size::new((left_x1 - left_x0) as u32, (bottom_y - top_y) as u32);

        let left = Rectangle::new(self.origin + Point::new(left_x0, top_y), size);
        let right_x0 = self.side as i32 - left_x1;
        let right = Rectangle::new(self.origin + Point::new(right_x0, top_y), size);

        (left, right)
    }

    fn draw_face_background<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        // Filled disc spanning the whole square: radius side/2.
        Circle::new(self.origin, self.side)
            .into_styled(PrimitiveStyle::with_fill(self.style.face_color))
            .draw(display)?;

        // Border ring inset by half the stroke width, so the stroke's outer
        // edge (centered stroke) meets the face's outer boundary.
        let border_width = self.style.border_width.max(0.0);
        let stroke_px = (border_width + 0.5) as u32;
        let inset = (border_width / 2.0 + 0.5) as i32;
        let diameter = self.side.saturating_sub((border_width + 0.5) as u32);

        Circle::new(self.origin + Point::new(inset, inset), diameter)
            .into_styled(PrimitiveStyle::with_stroke(self.style.border_color, stroke_px))
            .draw(display)
    }

    fn draw_eyes<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let fill = PrimitiveStyle::with_fill(self.style.eyes_color);
        let (left, right) = self.eye_boxes();

        Ellipse::new(left.top_left, left.size)
            .into_styled(fill)
            .draw(display)?;
        Ellipse::new(right.top_left, right.size)
            .into_styled(fill)
            .draw(display)
    }

    fn draw_mouth<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        MouthPath::new(self.origin, self.side, self.mood)
            .draw_filled(self.style.mouth_color, display)
    }
}

impl Widget for FaceWidget {
    /// Force a square: both dimensions resolve to the smaller proposal.
    fn measure(&mut self, proposed: Size) -> Size {
        let side = proposed.width.min(proposed.height);
        if side != self.side {
            self.side = side;
            self.dirty = true;
        }
        Size::new(side, side)
    }

    /// Paint the three layers. Order is load-bearing: the shapes overlap, and
    /// later draws land on top of earlier ones.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.side == 0 {
            return Ok(());
        }

        self.draw_face_background(display)?;
        self.draw_eyes(display)?;
        self.draw_mouth(display)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new(self.side, self.side))
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn save_state(&self) -> SavedState {
        SavedState::new(self.mood)
    }

    fn restore_state(&mut self, state: SavedState) {
        self.set_mood(state.mood());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    /// Probe side used by the pixel tests. At 64 px the smile lens covers
    /// column x = 32 between y = 48 and y = 51, and the frown lens between
    /// y = 38 and y = 42.
    const PROBE_SIDE: u32 = 64;
    const SMILE_PROBE: Point = Point::new(32, 50);
    const FROWN_PROBE: Point = Point::new(32, 40);

    fn drawn(widget: &FaceWidget) -> FrameBuffer {
        let mut fb = FrameBuffer::new(Size::new(PROBE_SIDE, PROBE_SIDE));
        widget.draw(&mut fb).unwrap();
        fb
    }

    fn measured(mood: Mood) -> FaceWidget {
        let mut widget = FaceWidget::new().with_mood(mood);
        widget.measure(Size::new(PROBE_SIDE, PROBE_SIDE));
        widget
    }

    #[test]
    fn defaults_match_the_configuration_contract() {
        let widget = FaceWidget::new();

        assert_eq!(widget.mood(), Mood::Happy);
        assert_eq!(widget.style().face_color, Rgb565::YELLOW);
        assert_eq!(widget.style().border_width, 4.0);
        assert_eq!(widget.side(), 0);
        assert!(widget.is_dirty());
    }

    #[test]
    fn measure_forces_a_square_from_the_smaller_proposal() {
        let mut widget = FaceWidget::new();

        let resolved = widget.measure(Size::new(300, 100));
        assert_eq!(resolved, Size::new(100, 100));
        assert_eq!(widget.side(), 100);

        let resolved = widget.measure(Size::new(100, 300));
        assert_eq!(resolved, Size::new(100, 100));
    }

    #[test]
    fn resize_marks_dirty_but_same_size_does_not() {
        let mut widget = FaceWidget::new();
        widget.measure(Size::new(100, 100));
        widget.mark_clean();

        widget.measure(Size::new(100, 100));
        assert!(!widget.is_dirty());

        widget.measure(Size::new(50, 100));
        assert!(widget.is_dirty());
    }

    #[test]
    fn set_mood_schedules_a_redraw() {
        let mut widget = measured(Mood::Happy);
        widget.mark_clean();

        widget.set_mood(Mood::Sad);
        assert!(widget.is_dirty());

        // Dirty widgets report their full bounds for partial updates.
        let regions = widget.dirty_regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].bounds, widget.bounds());
    }

    #[test]
    fn draw_layers_land_where_the_geometry_says() {
        let widget = measured(Mood::Happy);
        let fb = drawn(&widget);

        // Top of the face, inside the disc but above the eyes.
        assert_eq!(fb.pixel(Point::new(32, 8)), Some(Rgb565::YELLOW));
        // Centers of both eye boxes.
        let (left, right) = widget.eye_boxes();
        assert_eq!(fb.pixel(left.center()), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(right.center()), Some(Rgb565::BLACK));
        // Outside the disc the framebuffer keeps its clear color.
        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::BLACK));
    }

    #[test]
    fn mouth_follows_the_mood() {
        let happy = drawn(&measured(Mood::Happy));
        assert_eq!(happy.pixel(SMILE_PROBE), Some(Rgb565::BLACK));
        assert_eq!(happy.pixel(FROWN_PROBE), Some(Rgb565::YELLOW));

        let sad = drawn(&measured(Mood::Sad));
        assert_eq!(sad.pixel(FROWN_PROBE), Some(Rgb565::BLACK));
        assert_eq!(sad.pixel(SMILE_PROBE), Some(Rgb565::YELLOW));
    }

    #[test]
    fn border_ring_is_inset_by_half_its_width() {
        let style = FaceStyle::new().with_border_color(Rgb565::RED);
        let widget = measured(Mood::Happy).with_style(style);
        let fb = drawn(&widget);

        // Default width 4 on a 64 px face: ring centered on radius 30,
        // covering radii 28..=32. Probe straight up from the center.
        assert_eq!(fb.pixel(Point::new(32, 2)), Some(Rgb565::RED));
        // Inside the ring the face fill shows through.
        assert_eq!(fb.pixel(Point::new(32, 8)), Some(Rgb565::YELLOW));
    }

    #[test]
    fn eye_boxes_mirror_about_the_centerline() {
        for side in [1u32, 10, 63, 64, 97, 100, 300] {
            let mut widget = FaceWidget::new();
            widget.measure(Size::new(side, side));

            let (left, right) = widget.eye_boxes();
            assert_eq!(left.size, right.size, "asymmetric eyes at side {side}");

            let left_x1 = left.top_left.x + left.size.width as i32;
            assert_eq!(
                right.top_left.x,
                side as i32 - left_x1,
                "unmirrored eyes at side {side}"
            );
        }
    }

    #[test]
    fn repeated_set_mood_is_idempotent_in_pixels() {
        let mut once = measured(Mood::Sad);
        once.set_mood(Mood::Happy);

        let mut twice = measured(Mood::Sad);
        twice.set_mood(Mood::Happy);
        twice.set_mood(Mood::Happy);

        let fb_once = drawn(&once);
        let fb_twice = drawn(&twice);

        for y in 0..PROBE_SIDE as i32 {
            for x in 0..PROBE_SIDE as i32 {
                let p = Point::new(x, y);
                assert_eq!(fb_once.pixel(p), fb_twice.pixel(p));
            }
        }
    }

    #[test]
    fn zero_side_draws_nothing() {
        let widget = FaceWidget::new();
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        widget.draw(&mut fb).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(fb.pixel(Point::new(x, y)), Some(Rgb565::BLACK));
            }
        }
    }

    #[test]
    fn saved_state_round_trips_the_mood() {
        let mut widget = measured(Mood::Happy);
        widget.set_mood(Mood::Sad);

        let blob = widget.save_state().to_bytes().unwrap();

        // Host reconstructs the widget, then restores before the first draw.
        let mut rebuilt = FaceWidget::new();
        rebuilt.restore_from_bytes(&blob);

        assert_eq!(rebuilt.mood(), Mood::Sad);
        assert!(rebuilt.is_dirty());
    }

    #[test]
    fn malformed_blob_restores_the_default_mood() {
        let mut widget = measured(Mood::Sad);
        widget.restore_from_bytes(&[0xff, 0xff, 0xff, 0xff, 0xff]);

        assert_eq!(widget.mood(), Mood::Happy);
    }
}
