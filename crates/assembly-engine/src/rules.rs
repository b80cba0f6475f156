//! Per-product assembly rules producing the front-side part list.

use tracing::{debug, instrument};

use catalog::{ResolvedConfiguration, ResolvedProduct};
use part_ops::{
    door_glass, door_panel, frame_border, glazing_lines, handle, hinge, leaf_panel, mullion,
    opening_indicator, seal_loop, DepthProfile, GlassPlane, PartSink,
};
use sash_types::{
    ColorRole, GlassBand, HingeSide, OpeningDirection, Owner, Part, ProfileTier, Rect, WindowType,
};

use crate::compose::compose;
use crate::layout::{layout_leaves, operable_leaf};
use crate::types::{Assembly, AssemblyConfig, Diagnostics};

/// Window hinges, as fractions of the leaf height.
pub const WINDOW_HINGE_HEIGHTS: [f64; 2] = [0.2, 0.8];
/// Window handles sit at mid-height of their leaf.
pub const WINDOW_HANDLE_HEIGHT: f64 = 0.5;

/// Door frame bars are this much wider than window bars of the same class.
pub const DOOR_FRAME_FACTOR: f64 = 1.25;
/// Vertical extent of the upper door glass, as fractions of the door height.
pub const DOOR_UPPER_BAND: (f64, f64) = (0.2, 0.5);
/// Vertical extent of the premium lower door glass.
pub const DOOR_LOWER_BAND: (f64, f64) = (0.6, 0.8);
/// Side margin of door glass, as a fraction of the panel width.
pub const DOOR_GLASS_MARGIN: f64 = 0.2;
pub const DOOR_HANDLE_HEIGHT: f64 = 0.5;
/// Distance from the lock edge of the panel to the handle centre, in mm.
pub const DOOR_HANDLE_INSET: f64 = 70.0;
pub const DOOR_HINGE_HEIGHTS: [f64; 2] = [0.15, 0.85];

/// Build the complete two-sided assembly for a resolved configuration.
///
/// Pure: identical input gives an identical part list.
#[instrument(skip_all, fields(width = resolved.width, height = resolved.height))]
pub fn assemble(resolved: &ResolvedConfiguration, config: &AssemblyConfig) -> Assembly {
    let outer = Rect::new(0.0, 0.0, resolved.width, resolved.height);
    let thickness = resolved.profile.thickness;
    let depth = DepthProfile::new(thickness.profile_depth());

    let mut sink = PartSink::new();
    match resolved.product {
        ResolvedProduct::Window {
            window_type,
            opening,
        } => build_window(&mut sink, resolved, outer, depth, window_type, opening),
        ResolvedProduct::Door => build_door(&mut sink, resolved, outer, depth),
    }

    let mut diagnostics = Diagnostics::default();
    let mut front = sink.into_parts();
    diagnostics.clamped_parts = clamp_to_outer(&mut front, &outer);
    if diagnostics.clamped_parts > 0 {
        diagnostics.warnings.push(format!(
            "{} parts clamped to the {} x {} mm outline",
            diagnostics.clamped_parts, resolved.width, resolved.height
        ));
    }

    let mut parts = compose(front, depth.total);
    let scale = config.units_per_mm;
    if scale != 1.0 {
        for p in &mut parts {
            p.bounds.rect.x *= scale;
            p.bounds.rect.y *= scale;
            p.bounds.rect.width *= scale;
            p.bounds.rect.height *= scale;
            p.bounds.z *= scale;
            p.bounds.depth *= scale;
        }
    }

    debug!(parts = parts.len(), "assembly built");

    Assembly {
        product: resolved.product,
        frame_thickness: thickness,
        palette: resolved.palette.clone(),
        footprint: Rect::new(0.0, 0.0, resolved.width * scale, resolved.height * scale),
        depth: depth.total * scale,
        parts,
        diagnostics,
    }
}

fn build_window(
    sink: &mut PartSink,
    resolved: &ResolvedConfiguration,
    outer: Rect,
    depth: DepthProfile,
    window_type: WindowType,
    opening: OpeningDirection,
) {
    let t = resolved.profile.thickness.face_width();
    let plane = GlassPlane::window(depth);
    let opacity = resolved.glazing.tier.opacity();
    let lines = resolved.glazing.tier.divider_count();

    frame_border(sink, outer, t, depth, ColorRole::Outside);

    let layout = layout_leaves(&outer, window_type, t);
    for (i, rect) in layout.mullions.iter().enumerate() {
        mullion(sink, i, *rect, depth);
    }

    let operable = operable_leaf(window_type, opening);

    for (i, leaf) in layout.leaves.iter().enumerate() {
        let owner = Owner::Leaf { index: i };
        leaf_panel(sink, owner, *leaf, opacity, plane);
        glazing_lines(sink, owner, *leaf, lines, plane);
        seal_loop(sink, owner, *leaf, plane);

        let hinge_side = match (operable, opening.hinge_side()) {
            (Some(op), Some(side)) if op == i => side,
            _ => continue,
        };
        opening_indicator(sink, owner, *leaf, hinge_side, opening.tilts(), plane);
        leaf_hardware(sink, owner, leaf, hinge_side, t);
    }
}

/// Handle on the bar at the free edge, hinges on the bar at the hinge edge.
fn leaf_hardware(sink: &mut PartSink, owner: Owner, leaf: &Rect, hinge_side: HingeSide, t: f64) {
    let bar_centre = |side: HingeSide| match side {
        HingeSide::Left => leaf.x - t * 0.5,
        HingeSide::Right => leaf.right() + t * 0.5,
    };
    handle(
        sink,
        owner,
        bar_centre(hinge_side.opposite()),
        leaf.y + leaf.height * WINDOW_HANDLE_HEIGHT,
    );
    for (i, frac) in WINDOW_HINGE_HEIGHTS.iter().enumerate() {
        hinge(sink, owner, i, bar_centre(hinge_side), leaf.y + leaf.height * frac);
    }
}

fn build_door(
    sink: &mut PartSink,
    resolved: &ResolvedConfiguration,
    outer: Rect,
    depth: DepthProfile,
) {
    let t = resolved.profile.thickness.face_width() * DOOR_FRAME_FACTOR;
    frame_border(sink, outer, t, depth, ColorRole::Outside);

    let panel = outer.inset_uniform(t);
    door_panel(sink, panel, depth);

    if !resolved.profile.glassless {
        let mut bands = vec![(GlassBand::Upper, DOOR_UPPER_BAND)];
        if resolved.profile.tier == ProfileTier::Premium {
            bands.push((GlassBand::Lower, DOOR_LOWER_BAND));
        }
        let plane = GlassPlane::door(depth);
        let opacity = resolved.glazing.tier.opacity();
        let lines = resolved.glazing.tier.divider_count();
        for (band, (top, bottom)) in bands {
            let glass = Rect::from_edges(
                panel.x + panel.width * DOOR_GLASS_MARGIN,
                outer.height * top,
                panel.right() - panel.width * DOOR_GLASS_MARGIN,
                outer.height * bottom,
            )
            .clamped_to(&panel);
            let owner = Owner::DoorGlass { band };
            door_glass(sink, band, glass, opacity, plane);
            glazing_lines(sink, owner, glass, lines, plane);
            seal_loop(sink, owner, glass, plane);
        }
    }

    handle(
        sink,
        Owner::Door,
        panel.right() - DOOR_HANDLE_INSET,
        outer.height * DOOR_HANDLE_HEIGHT,
    );
    for (i, frac) in DOOR_HINGE_HEIGHTS.iter().enumerate() {
        hinge(sink, Owner::Door, i, outer.x + t * 0.5, outer.height * frac);
    }
}

/// Slack for rounding in edge arithmetic, in mm.
const CLAMP_TOLERANCE: f64 = 1e-6;

/// Cut every footprint back to `outer`. Returns how many changed.
fn clamp_to_outer(parts: &mut [Part], outer: &Rect) -> usize {
    let mut changed = 0;
    for p in parts.iter_mut() {
        if outer.contains_rect(&p.bounds.rect, CLAMP_TOLERANCE) {
            continue;
        }
        p.bounds.rect = p.bounds.rect.clamped_to(outer);
        changed += 1;
    }
    changed
}
