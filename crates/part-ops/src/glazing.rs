use sash_types::{Bounds, ColorRole, Fill, GlassBand, NeutralTone, Owner, PartId, PartKind, Rect, Shape};

use crate::depth::{DepthProfile, GLASS_HALF, DOOR_GLASS_PROUD, LINE_DEPTH, SEAL_DEPTH};
use crate::sink::PartSink;

/// Width of a glazing hairline.
pub const HAIRLINE: f64 = 2.0;
/// Width of a seal loop.
pub const SEAL_BAND: f64 = 6.0;

/// Depth span of a glass pack; seals and lines sit on its front face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlassPlane {
    pub front: f64,
    pub depth: f64,
}

impl GlassPlane {
    pub fn window(depth: DepthProfile) -> Self {
        Self {
            front: depth.window_glass_front(),
            depth: GLASS_HALF,
        }
    }

    pub fn door(depth: DepthProfile) -> Self {
        Self {
            front: depth.door_glass_front(),
            depth: DOOR_GLASS_PROUD,
        }
    }
}

/// Glass opening of a window leaf.
pub fn leaf_panel(
    sink: &mut PartSink,
    owner: Owner,
    rect: Rect,
    opacity: f64,
    plane: GlassPlane,
) -> PartId {
    sink.push(
        PartKind::Leaf,
        owner,
        Shape::Rect,
        Bounds::new(rect, plane.front, plane.depth),
        Fill::Glass { opacity },
    )
}

/// Glass cutout of a door panel.
pub fn door_glass(
    sink: &mut PartSink,
    band: GlassBand,
    rect: Rect,
    opacity: f64,
    plane: GlassPlane,
) -> PartId {
    sink.push(
        PartKind::DoorGlass { band },
        Owner::DoorGlass { band },
        Shape::Rect,
        Bounds::new(rect, plane.front, plane.depth),
        Fill::Glass { opacity },
    )
}

/// `count` vertical hairlines evenly spaced across `glass`: one at the
/// midpoint, two at thirds, three at quarters.
pub fn glazing_lines(
    sink: &mut PartSink,
    owner: Owner,
    glass: Rect,
    count: usize,
    plane: GlassPlane,
) -> Vec<PartId> {
    let width = HAIRLINE.min(glass.width);
    (0..count)
        .map(|i| {
            let cx = glass.x + glass.width * (i + 1) as f64 / (count + 1) as f64;
            let rect = Rect::new(cx - width * 0.5, glass.y, width, glass.height);
            sink.push(
                PartKind::GlazingLine { index: i },
                owner,
                Shape::Rect,
                Bounds::new(rect, plane.front - LINE_DEPTH, LINE_DEPTH),
                Fill::Neutral {
                    tone: NeutralTone::Hairline,
                },
            )
        })
        .collect()
}

/// Rubber loop along the inside of `opening`.
pub fn seal_loop(sink: &mut PartSink, owner: Owner, opening: Rect, plane: GlassPlane) -> PartId {
    let band = SEAL_BAND.min(opening.width.min(opening.height) * 0.5);
    sink.push(
        PartKind::Seal,
        owner,
        Shape::Ring { band },
        Bounds::new(opening, plane.front - SEAL_DEPTH, SEAL_DEPTH),
        Fill::role(ColorRole::Rubber),
    )
}
