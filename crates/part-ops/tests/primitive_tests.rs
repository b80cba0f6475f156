use approx::assert_relative_eq;

use part_ops::frame::edge_rect;
use part_ops::*;
use sash_types::*;

fn outer() -> Rect {
    Rect::new(0.0, 0.0, 1000.0, 1500.0)
}

#[test]
fn test_frame_border_tiles_the_ring() {
    let mut sink = PartSink::new();
    let ids = frame_border(&mut sink, outer(), 70.0, DepthProfile::new(76.0), ColorRole::Outside);
    assert_eq!(ids.len(), 8);

    let faces: Vec<_> = sink
        .parts()
        .iter()
        .filter(|p| matches!(p.kind, PartKind::FrameEdge { .. }))
        .collect();
    assert_eq!(faces.len(), 4);

    // Four bars cover exactly the ring area without overlapping.
    let area: f64 = faces.iter().map(|p| p.bounds.rect.area()).sum();
    assert_relative_eq!(area, 1000.0 * 1500.0 - 860.0 * 1360.0);

    let union = faces
        .iter()
        .map(|p| p.bounds.rect)
        .reduce(|a, b| a.union(&b))
        .unwrap();
    assert!(union.approx_eq(&outer(), 1e-9));
}

#[test]
fn test_frame_depth_always_base() {
    let mut sink = PartSink::new();
    frame_border(&mut sink, outer(), 60.0, DepthProfile::new(70.0), ColorRole::Inside);
    for p in sink.parts() {
        match p.kind {
            PartKind::FrameDepth { .. } => assert_eq!(p.fill, Fill::role(ColorRole::Base)),
            PartKind::FrameEdge { .. } => assert_eq!(p.fill, Fill::role(ColorRole::Inside)),
            other => panic!("unexpected part {other:?}"),
        }
        assert_eq!(p.owner, Owner::Frame);
    }
}

#[test]
fn test_depth_body_behind_face() {
    let mut sink = PartSink::new();
    let depth = DepthProfile::new(82.0);
    frame_border(&mut sink, outer(), 80.0, depth, ColorRole::Outside);
    let face = sink
        .parts()
        .iter()
        .find(|p| p.kind == PartKind::FrameEdge { edge: Edge::Left })
        .unwrap();
    let body = sink
        .parts()
        .iter()
        .find(|p| p.kind == PartKind::FrameDepth { edge: Edge::Left })
        .unwrap();
    assert_eq!(face.bounds.rect, body.bounds.rect);
    assert_relative_eq!(face.bounds.z_end(), body.bounds.z);
    assert_relative_eq!(body.bounds.z_end(), depth.half());
}

#[test]
fn test_edge_rect_thickness_capped() {
    let small = Rect::new(0.0, 0.0, 100.0, 40.0);
    let top = edge_rect(&small, 80.0, Edge::Top);
    assert_eq!(top.height, 20.0);
    let left = edge_rect(&small, 80.0, Edge::Left);
    assert_eq!(left.height, 0.0);
}

#[test]
fn test_mullion_spans_front_half() {
    let mut sink = PartSink::new();
    let depth = DepthProfile::new(76.0);
    let rect = Rect::new(470.0, 70.0, 70.0, 1360.0);
    mullion(&mut sink, 0, rect, depth);
    let p = &sink.parts()[0];
    assert_eq!(p.kind, PartKind::Mullion { index: 0 });
    assert_eq!(p.bounds.rect, rect);
    assert_eq!(p.bounds.z, 0.0);
    assert_relative_eq!(p.bounds.depth, 38.0);
    assert_eq!(p.fill, Fill::role(ColorRole::Outside));
}

#[test]
fn test_door_panel_and_glass_layers() {
    let mut sink = PartSink::new();
    let depth = DepthProfile::new(82.0);
    let panel = Rect::new(100.0, 100.0, 800.0, 1900.0);
    door_panel(&mut sink, panel, depth);
    door_glass(
        &mut sink,
        GlassBand::Upper,
        Rect::new(260.0, 420.0, 480.0, 630.0),
        0.9,
        GlassPlane::door(depth),
    );
    let parts = sink.parts();
    assert!(parts[0].z_index < parts[1].z_index);
    // Glass sits proud of the panel face.
    assert!(parts[1].bounds.z_end() <= parts[0].bounds.z);
    assert_eq!(parts[1].owner, Owner::DoorGlass { band: GlassBand::Upper });
}

#[test]
fn test_ids_are_sequential() {
    let mut sink = PartSink::new();
    let depth = DepthProfile::new(70.0);
    let plane = GlassPlane::window(depth);
    let leaf = Rect::new(60.0, 60.0, 500.0, 800.0);
    let a = leaf_panel(&mut sink, Owner::Leaf { index: 0 }, leaf, 0.9, plane);
    let lines = glazing_lines(&mut sink, Owner::Leaf { index: 0 }, leaf, 3, plane);
    let s = seal_loop(&mut sink, Owner::Leaf { index: 0 }, leaf, plane);
    assert_eq!(a, PartId(0));
    assert_eq!(lines, vec![PartId(1), PartId(2), PartId(3)]);
    assert_eq!(s, PartId(4));
    assert_eq!(sink.len(), 5);
}

#[test]
fn test_glass_stack_paint_order() {
    let mut sink = PartSink::new();
    let depth = DepthProfile::new(70.0);
    let plane = GlassPlane::window(depth);
    let leaf = Rect::new(60.0, 60.0, 500.0, 800.0);
    let owner = Owner::Leaf { index: 0 };
    leaf_panel(&mut sink, owner, leaf, 0.9, plane);
    glazing_lines(&mut sink, owner, leaf, 1, plane);
    seal_loop(&mut sink, owner, leaf, plane);
    opening_indicator(&mut sink, owner, leaf, HingeSide::Left, false, plane);
    let z: Vec<u8> = sink.parts().iter().map(|p| p.z_index).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]));
}

fn glass_stack(plane: GlassPlane) -> Vec<Part> {
    let mut sink = PartSink::new();
    let rect = Rect::new(260.0, 420.0, 480.0, 630.0);
    let owner = Owner::DoorGlass { band: GlassBand::Upper };
    door_glass(&mut sink, GlassBand::Upper, rect, 0.9, plane);
    glazing_lines(&mut sink, owner, rect, 3, plane);
    seal_loop(&mut sink, owner, rect, plane);
    sink.into_parts()
}

#[test]
fn test_only_door_glass_stack_sits_proud() {
    let depth = DepthProfile::new(82.0);

    for p in glass_stack(GlassPlane::window(depth)) {
        assert!(p.bounds.z >= 0.0, "{:?}", p.kind);
        assert!(p.bounds.z_end() <= depth.half());
    }

    let door = glass_stack(GlassPlane::door(depth));
    let front = door.iter().map(|p| p.bounds.z).fold(f64::INFINITY, f64::min);
    assert_relative_eq!(front, -part_ops::depth::DOOR_STACK_PROTRUSION);
    for p in &door {
        assert!(p.bounds.z_end() <= 0.0, "{:?}", p.kind);
    }
}
