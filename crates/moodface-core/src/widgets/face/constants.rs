//! Proportional geometry constants for the face.
//!
//! Every value is a fraction of the widget's resolved square side, so the
//! face keeps its proportions at any size. The fractions are grouped by the
//! shape they parameterize.

// ---------------------------------------------------------------------------
// Eyes
// ---------------------------------------------------------------------------

/// Left edge of the left eye's bounding box.
pub const LEFT_EYE_LEFT_X: f32 = 0.32;

/// Right edge of the left eye's bounding box.
pub const LEFT_EYE_RIGHT_X: f32 = 0.43;

/// Top edge of both eye bounding boxes.
pub const EYE_TOP_Y: f32 = 0.23;

/// Bottom edge of both eye bounding boxes.
pub const EYE_BOTTOM_Y: f32 = 0.50;

// The right eye is the mirror image of the left about the vertical
// centerline; its box is derived at draw time rather than stored here so the
// two stay symmetric even after pixel rounding.

// ---------------------------------------------------------------------------
// Mouth
// ---------------------------------------------------------------------------

/// X coordinate of the left mouth corner (also the path's start point).
pub const MOUTH_LEFT_X: f32 = 0.22;

/// X coordinate of the right mouth corner.
pub const MOUTH_RIGHT_X: f32 = 0.78;

/// Y coordinate shared by both mouth corners.
pub const MOUTH_CORNER_Y: f32 = 0.70;

/// X coordinate of both Bezier control points (the chord midpoint).
pub const MOUTH_CTRL_X: f32 = 0.5;

/// Control-point Y of the smile's upper curve.
pub const HAPPY_UPPER_CTRL_Y: f32 = 0.80;

/// Control-point Y of the smile's lower curve.
pub const HAPPY_LOWER_CTRL_Y: f32 = 0.90;

/// Control-point Y of the frown's upper curve.
pub const SAD_UPPER_CTRL_Y: f32 = 0.50;

/// Control-point Y of the frown's lower curve.
pub const SAD_LOWER_CTRL_Y: f32 = 0.60;

/// Number of samples per Bezier segment when building the mouth outline.
pub const MOUTH_OUTLINE_SUBDIVISIONS: usize = 16;
