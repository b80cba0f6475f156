use tracing::{debug, instrument};

use sash_types::{Bounds, ColorRole, Edge, Fill, Owner, PartId, PartKind, Rect, Shape};

use crate::depth::DepthProfile;
use crate::sink::PartSink;

/// Footprint of one frame bar. Top and bottom run the full width; left and
/// right fit between them.
pub fn edge_rect(outer: &Rect, thickness: f64, edge: Edge) -> Rect {
    let t = thickness.clamp(0.0, outer.width.min(outer.height) * 0.5);
    match edge {
        Edge::Top => Rect::new(outer.x, outer.y, outer.width, t),
        Edge::Bottom => Rect::new(outer.x, outer.bottom() - t, outer.width, t),
        Edge::Left => Rect::new(outer.x, outer.y + t, t, outer.height - 2.0 * t),
        Edge::Right => Rect::new(outer.right() - t, outer.y + t, t, outer.height - 2.0 * t),
    }
}

/// Rectangular frame ring as four bars.
///
/// Each bar gets a visible face in `face` and a depth-extruded body in the
/// base color. The four-segment split gives corner hardware something to
/// attach to.
#[instrument(skip(sink))]
pub fn frame_border(
    sink: &mut PartSink,
    outer: Rect,
    thickness: f64,
    depth: DepthProfile,
    face: ColorRole,
) -> Vec<PartId> {
    debug!(width = outer.width, height = outer.height, "creating frame border");
    let (face_z, face_depth) = depth.frame_face();
    let (body_z, body_depth) = depth.frame_body();
    let mut ids = Vec::with_capacity(8);

    for edge in Edge::ALL {
        let rect = edge_rect(&outer, thickness, edge);
        ids.push(sink.push(
            PartKind::FrameDepth { edge },
            Owner::Frame,
            Shape::Rect,
            Bounds::new(rect, body_z, body_depth),
            Fill::role(ColorRole::Base),
        ));
        ids.push(sink.push(
            PartKind::FrameEdge { edge },
            Owner::Frame,
            Shape::Rect,
            Bounds::new(rect, face_z, face_depth),
            Fill::role(face),
        ));
    }
    ids
}

/// Vertical bar between two leaves, `rect.width` wide.
pub fn mullion(sink: &mut PartSink, index: usize, rect: Rect, depth: DepthProfile) -> PartId {
    let (z, d) = depth.slab();
    sink.push(
        PartKind::Mullion { index },
        Owner::Frame,
        Shape::Rect,
        Bounds::new(rect, z, d),
        Fill::role(ColorRole::Outside),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_has_four_faces_and_four_bodies() {
        let mut sink = PartSink::new();
        let ids = frame_border(
            &mut sink,
            Rect::new(0.0, 0.0, 1000.0, 1200.0),
            60.0,
            DepthProfile::new(70.0),
            ColorRole::Outside,
        );
        assert_eq!(ids.len(), 8);
        let faces = sink
            .parts()
            .iter()
            .filter(|p| matches!(p.kind, PartKind::FrameEdge { .. }))
            .count();
        assert_eq!(faces, 4);
        for p in sink.parts() {
            if let PartKind::FrameDepth { .. } = p.kind {
                assert_eq!(p.fill, Fill::role(ColorRole::Base));
            }
        }
    }

    #[test]
    fn test_bars_tile_the_ring() {
        let outer = Rect::new(0.0, 0.0, 1000.0, 1200.0);
        let area: f64 = Edge::ALL
            .iter()
            .map(|e| edge_rect(&outer, 60.0, *e).area())
            .sum();
        let hole = outer.inset_uniform(60.0).area();
        assert_relative_eq!(area, outer.area() - hole, epsilon = 1e-6);
    }

    #[test]
    fn test_thickness_clamped_for_tiny_outer() {
        let outer = Rect::new(0.0, 0.0, 50.0, 80.0);
        let left = edge_rect(&outer, 60.0, Edge::Left);
        assert_eq!(left.width, 25.0);
        assert_eq!(left.height, 30.0);
        assert!(outer.contains_rect(&left, 1e-9));
    }
}
