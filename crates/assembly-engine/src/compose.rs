//! Dual-sided composition: derive the interior view from the exterior one.

use tracing::debug;

use sash_types::{Fill, Part, PartId, Side};

/// Append the mirrored back side to a front-side part list.
///
/// Front parts keep their order and get ids `0..n`; the back copy of part `i`
/// gets id `n + i`. Footprints are identical on both sides. Depth spans are
/// reflected about the mid-plane and `Outside` becomes `Inside`; every other
/// fill is carried over unchanged.
pub fn compose(front: Vec<Part>, total_depth: f64) -> Vec<Part> {
    let n = front.len() as u32;
    let mut parts = Vec::with_capacity(front.len() * 2);

    for (i, mut part) in front.into_iter().enumerate() {
        let i = i as u32;
        part.id = PartId(i);
        part.side = Side::Front;
        part.counterpart = Some(PartId(n + i));
        parts.push(part);
    }

    let back: Vec<Part> = parts
        .iter()
        .map(|front| Part {
            id: PartId(n + front.id.0),
            side: Side::Back,
            bounds: front.bounds.mirrored(total_depth),
            fill: mirror_fill(front.fill),
            counterpart: Some(front.id),
            ..front.clone()
        })
        .collect();
    parts.extend(back);

    debug!(front = n, total = parts.len(), "composed both sides");
    parts
}

fn mirror_fill(fill: Fill) -> Fill {
    match fill {
        Fill::Role { role } => Fill::role(role.mirrored()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sash_types::{Bounds, ColorRole, Edge, NeutralTone, Owner, PartKind, Rect, Shape};

    fn part(kind: PartKind, fill: Fill, z: f64, depth: f64) -> Part {
        Part {
            id: PartId(99),
            kind,
            owner: Owner::Frame,
            side: Side::Front,
            shape: Shape::Rect,
            bounds: Bounds::new(Rect::new(10.0, 20.0, 30.0, 40.0), z, depth),
            fill,
            z_index: kind.layer().z_index(),
            counterpart: None,
        }
    }

    fn sample() -> Vec<Part> {
        vec![
            part(
                PartKind::FrameDepth { edge: Edge::Top },
                Fill::role(ColorRole::Base),
                2.0,
                36.0,
            ),
            part(
                PartKind::FrameEdge { edge: Edge::Top },
                Fill::role(ColorRole::Outside),
                0.0,
                2.0,
            ),
            part(PartKind::Seal, Fill::role(ColorRole::Rubber), 30.0, 4.0),
            part(
                PartKind::GlazingLine { index: 0 },
                Fill::Neutral {
                    tone: NeutralTone::Hairline,
                },
                31.0,
                0.5,
            ),
        ]
    }

    #[test]
    fn test_ids_and_counterparts() {
        let parts = compose(sample(), 76.0);
        assert_eq!(parts.len(), 8);
        for (i, p) in parts.iter().enumerate() {
            assert_eq!(p.id, PartId(i as u32));
        }
        for p in &parts[..4] {
            assert_eq!(p.side, Side::Front);
            let other = &parts[p.counterpart.unwrap().0 as usize];
            assert_eq!(other.side, Side::Back);
            assert_eq!(other.counterpart, Some(p.id));
        }
    }

    #[test]
    fn test_back_side_rebinds_outside_only() {
        let parts = compose(sample(), 76.0);
        assert_eq!(parts[4].fill, Fill::role(ColorRole::Base));
        assert_eq!(parts[5].fill, Fill::role(ColorRole::Inside));
        assert_eq!(parts[6].fill, Fill::role(ColorRole::Rubber));
        assert_eq!(parts[7].fill, parts[3].fill);
    }

    #[test]
    fn test_back_side_is_congruent_and_mirrored() {
        let parts = compose(sample(), 76.0);
        for i in 0..4 {
            let (f, b) = (&parts[i], &parts[i + 4]);
            assert_eq!(f.bounds.rect, b.bounds.rect);
            assert_eq!(f.kind, b.kind);
            assert_eq!(f.z_index, b.z_index);
            assert_eq!(b.bounds.z, 76.0 - f.bounds.z_end());
        }
        // The face sits flush with the back plane.
        assert_eq!(parts[5].bounds.z_end(), 76.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(compose(Vec::new(), 70.0).is_empty());
    }
}
