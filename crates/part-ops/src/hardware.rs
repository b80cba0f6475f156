use sash_types::{Bounds, Edge, Fill, HingeSide, NeutralTone, Owner, PartId, PartKind, Rect, Shape};

use crate::depth::{HANDLE_PROJECTION, HINGE_PROJECTION, INDICATOR_DEPTH, LINE_DEPTH};
use crate::glazing::GlassPlane;
use crate::sink::PartSink;

pub const HANDLE_WIDTH: f64 = 28.0;
pub const HANDLE_LENGTH: f64 = 140.0;
pub const HINGE_WIDTH: f64 = 14.0;
pub const HINGE_LENGTH: f64 = 70.0;
/// Indicator edge length as a fraction of the leaf's shorter side.
pub const INDICATOR_SCALE: f64 = 0.25;

fn hardware_fill() -> Fill {
    Fill::Neutral {
        tone: NeutralTone::Hardware,
    }
}

/// Fixed-size rect centred on `(cx, cy)`.
fn centred(cx: f64, cy: f64, width: f64, height: f64) -> Rect {
    Rect::new(cx - width * 0.5, cy - height * 0.5, width, height)
}

/// Directional glyph centred on `leaf`, apex pointing at the hinge edge.
pub fn opening_indicator(
    sink: &mut PartSink,
    owner: Owner,
    leaf: Rect,
    hinge: HingeSide,
    tilt: bool,
    plane: GlassPlane,
) -> PartId {
    let size = leaf.width.min(leaf.height) * INDICATOR_SCALE;
    let (cx, cy) = leaf.center();
    let apex = match hinge {
        HingeSide::Left => Edge::Left,
        HingeSide::Right => Edge::Right,
    };
    sink.push(
        PartKind::Indicator { hinge, tilt },
        owner,
        Shape::Triangle { apex },
        Bounds::new(
            centred(cx, cy, size, size),
            plane.front - LINE_DEPTH - INDICATOR_DEPTH,
            INDICATOR_DEPTH,
        ),
        Fill::Neutral {
            tone: NeutralTone::Indicator,
        },
    )
}

/// Lever handle centred on `(cx, cy)`, sticking out of the front plane.
pub fn handle(sink: &mut PartSink, owner: Owner, cx: f64, cy: f64) -> PartId {
    sink.push(
        PartKind::Handle,
        owner,
        Shape::Rect,
        Bounds::new(
            centred(cx, cy, HANDLE_WIDTH, HANDLE_LENGTH),
            -HANDLE_PROJECTION,
            HANDLE_PROJECTION,
        ),
        hardware_fill(),
    )
}

/// Hinge knuckle centred on `(cx, cy)`.
pub fn hinge(sink: &mut PartSink, owner: Owner, index: usize, cx: f64, cy: f64) -> PartId {
    sink.push(
        PartKind::Hinge { index },
        owner,
        Shape::Rect,
        Bounds::new(
            centred(cx, cy, HINGE_WIDTH, HINGE_LENGTH),
            -HINGE_PROJECTION,
            HINGE_PROJECTION,
        ),
        hardware_fill(),
    )
}
