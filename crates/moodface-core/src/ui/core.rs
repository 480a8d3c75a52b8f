//! Core UI traits and types for the moodface widget system.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::state::SavedState;

/// Maximum number of dirty regions a widget may report per frame.
pub const MAX_DIRTY_REGIONS: usize = 8;

/// Dirty region tracking for efficient rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirtyRegion {
    pub bounds: Rectangle,
    pub is_dirty: bool,
}

impl DirtyRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            is_dirty: true,
        }
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }
}

/// Lifecycle contract between a widget and its embedding host.
///
/// The host calls these methods in a well-defined order:
///
/// 1. **`measure`** — before any draw that could follow a size change.
/// 2. **`draw`** — whenever `is_dirty()` is true, or whenever the windowing
///    system demands a repaint for unrelated reasons.
/// 3. **`mark_clean`** — after a successful draw.
/// 4. **`save_state`** / **`restore_state`** — around host-triggered
///    reconstruction (for example a configuration change).
///
/// All methods run synchronously on the host's UI thread; none block or
/// suspend. A mood mutation that happens before a draw callback is always
/// reflected in that callback's output because mutation marks the widget
/// dirty unconditionally and `draw` reads current state.
pub trait Widget {
    /// Resolve the widget's size from the host's proposed dimensions.
    ///
    /// The returned size never exceeds the proposal in either dimension.
    fn measure(&mut self, proposed: Size) -> Size;

    /// Render the widget to the given display target.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Bounding rectangle of this widget at its current resolved size.
    fn bounds(&self) -> Rectangle;

    /// Whether the widget needs to be redrawn.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag after a successful draw.
    fn mark_clean(&mut self);

    /// Force the widget to be redrawn on the next frame.
    fn mark_dirty(&mut self);

    /// Capture the widget's runtime-mutable state for host reconstruction.
    fn save_state(&self) -> SavedState;

    /// Apply previously captured state, typically right after reconstruction
    /// and before the first draw.
    fn restore_state(&mut self, state: SavedState);

    /// Return the set of dirty sub-regions for partial-update displays.
    ///
    /// The default implementation returns the full widget bounds when dirty.
    fn dirty_regions(&self) -> heapless::Vec<DirtyRegion, MAX_DIRTY_REGIONS> {
        let mut regions = heapless::Vec::new();
        if self.is_dirty() {
            regions.push(DirtyRegion::new(self.bounds())).ok();
        }
        regions
    }
}
