use sash_types::{Bounds, ColorRole, Fill, Owner, PartId, PartKind, Rect, Shape};

use crate::depth::DepthProfile;
use crate::sink::PartSink;

/// Solid door leaf, a slab from the front plane to the mid-plane.
pub fn door_panel(sink: &mut PartSink, rect: Rect, depth: DepthProfile) -> PartId {
    let (z, d) = depth.slab();
    sink.push(
        PartKind::DoorPanel,
        Owner::Door,
        Shape::Rect,
        Bounds::new(rect, z, d),
        Fill::role(ColorRole::Outside),
    )
}
