//! Parameterized part constructors.
//!
//! Each constructor takes explicit dimensions and a fill, appends front-side
//! parts to a [`PartSink`], and depends on nothing but its arguments.

pub mod depth;
pub mod door;
pub mod frame;
pub mod glazing;
pub mod hardware;
pub mod sink;

pub use depth::DepthProfile;
pub use door::door_panel;
pub use frame::{frame_border, mullion};
pub use glazing::{door_glass, glazing_lines, leaf_panel, seal_loop, GlassPlane};
pub use hardware::{handle, hinge, opening_indicator};
pub use sink::PartSink;
