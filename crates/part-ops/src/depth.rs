//! Depth placement of front-side parts.
//!
//! Front parts live between the front plane (`z = 0`) and the mid-plane
//! (`z = total / 2`). Two things stick out in front of `z = 0`: hardware, and
//! the door glass stack (glass, hairlines and seal) by at most
//! [`DOOR_STACK_PROTRUSION`]. The back side is the mirror image, so no span
//! here may cross the mid-plane.

/// Visible skin of a frame bar.
pub const SKIN: f64 = 2.0;
/// Half a glass pack; the other half belongs to the back side.
pub const GLASS_HALF: f64 = 6.0;
/// Door glass sits proud of the door panel by this much.
pub const DOOR_GLASS_PROUD: f64 = 3.0;
pub const SEAL_DEPTH: f64 = 4.0;
/// How far the door seal, which sits on the proud glass, reaches past `z = 0`.
pub const DOOR_STACK_PROTRUSION: f64 = DOOR_GLASS_PROUD + SEAL_DEPTH;
pub const LINE_DEPTH: f64 = 0.5;
pub const INDICATOR_DEPTH: f64 = 0.5;
pub const HANDLE_PROJECTION: f64 = 45.0;
pub const HINGE_PROJECTION: f64 = 10.0;

/// Depth of one product and the spans derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthProfile {
    pub total: f64,
}

impl DepthProfile {
    pub fn new(total: f64) -> Self {
        Self {
            total: total.max(2.0 * (SKIN + GLASS_HALF)),
        }
    }

    pub fn half(&self) -> f64 {
        self.total * 0.5
    }

    /// `(z, depth)` of a visible frame face.
    pub fn frame_face(&self) -> (f64, f64) {
        (0.0, SKIN)
    }

    /// `(z, depth)` of a frame bar body behind its face.
    pub fn frame_body(&self) -> (f64, f64) {
        (SKIN, self.half() - SKIN)
    }

    /// `(z, depth)` of a solid slab reaching from the front plane to the mid-plane.
    pub fn slab(&self) -> (f64, f64) {
        (0.0, self.half())
    }

    /// Front face of a window glass pack.
    pub fn window_glass_front(&self) -> f64 {
        self.half() - GLASS_HALF
    }

    /// Front face of door glass, in front of the panel.
    pub fn door_glass_front(&self) -> f64 {
        -DOOR_GLASS_PROUD
    }
}
