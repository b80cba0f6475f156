//! Leaf placement for side-by-side window layouts.

use sash_types::{HingeSide, OpeningDirection, Rect, WindowType};

/// Per-leaf width reduction, in frame thicknesses, for each layout.
///
/// A leaf of an `n`-leaf window is `W / n - m * t` wide. The multipliers of one
/// layout always add up to the frame material crossing the width: two outer
/// bars plus `n - 1` mullions. Visual constants; do not re-derive.
const SINGLE_INSETS: [f64; 1] = [2.0];
const DOUBLE_INSETS: [f64; 2] = [1.5, 1.5];
const TRIPLE_INSETS: [f64; 3] = [1.33, 1.34, 1.33];

pub fn leaf_insets(window_type: WindowType) -> &'static [f64] {
    match window_type {
        WindowType::SingleLeaf | WindowType::Fixed => &SINGLE_INSETS,
        WindowType::DoubleLeaf => &DOUBLE_INSETS,
        WindowType::TripleLeaf => &TRIPLE_INSETS,
    }
}

/// Leaf openings and the mullions between them.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafLayout {
    pub leaves: Vec<Rect>,
    pub mullions: Vec<Rect>,
}

/// Lay leaves out left to right inside `outer`, separated by `thickness`-wide
/// mullions. Leaf sizes never go negative.
pub fn layout_leaves(outer: &Rect, window_type: WindowType, thickness: f64) -> LeafLayout {
    let insets = leaf_insets(window_type);
    let n = insets.len() as f64;
    let t = thickness.max(0.0);
    let y = outer.y + t;
    let height = (outer.height - 2.0 * t).max(0.0);

    let mut leaves = Vec::with_capacity(insets.len());
    let mut mullions = Vec::with_capacity(insets.len().saturating_sub(1));
    let mut x = outer.x + t;
    for (i, m) in insets.iter().enumerate() {
        let width = (outer.width / n - m * t).max(0.0);
        leaves.push(Rect::new(x, y, width, height));
        x += width;
        if i + 1 < insets.len() {
            mullions.push(Rect::new(x, y, t, height));
            x += t;
        }
    }
    LeafLayout { leaves, mullions }
}

/// The single leaf that may open, if any.
///
/// Left-hinged openings operate the leftmost leaf, right-hinged ones the
/// rightmost. The middle leaf of a triple window never opens.
pub fn operable_leaf(window_type: WindowType, opening: OpeningDirection) -> Option<usize> {
    let hinge = opening.hinge_side()?;
    match window_type {
        WindowType::Fixed => None,
        WindowType::SingleLeaf => Some(0),
        WindowType::DoubleLeaf | WindowType::TripleLeaf => match hinge {
            HingeSide::Left => Some(0),
            HingeSide::Right => Some(window_type.leaf_count() - 1),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn outer() -> Rect {
        Rect::new(0.0, 0.0, 1200.0, 1400.0)
    }

    #[test]
    fn test_insets_sum_to_frame_material() {
        for wt in WindowType::ALL {
            let sum: f64 = leaf_insets(wt).iter().sum();
            let bars = 2.0 + (wt.leaf_count() - 1) as f64;
            assert_relative_eq!(sum, bars, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_double_leaf_halves() {
        let l = layout_leaves(&outer(), WindowType::DoubleLeaf, 80.0);
        assert_eq!(l.leaves.len(), 2);
        assert_eq!(l.mullions.len(), 1);
        assert_relative_eq!(l.leaves[0].x, 80.0);
        assert_relative_eq!(l.leaves[0].width, 600.0 - 120.0);
        assert_relative_eq!(l.mullions[0].x, 560.0);
        assert_relative_eq!(l.mullions[0].width, 80.0);
        assert_relative_eq!(l.leaves[1].x, 640.0);
        assert_relative_eq!(l.leaves[1].right(), 1120.0);
    }

    #[test]
    fn test_triple_leaf_fills_width() {
        let l = layout_leaves(&outer(), WindowType::TripleLeaf, 60.0);
        assert_eq!(l.leaves.len(), 3);
        assert_eq!(l.mullions.len(), 2);
        assert_relative_eq!(l.leaves[2].right(), 1200.0 - 60.0, epsilon = 1e-9);
        // Leaves never overlap the mullions, so each mullion sits 0.17 t
        // inward of its third.
        assert_relative_eq!(l.mullions[0].center().0, 400.0 + 0.17 * 60.0, epsilon = 1e-9);
        assert_relative_eq!(l.mullions[1].center().0, 800.0 - 0.17 * 60.0, epsilon = 1e-9);
        assert_relative_eq!(l.mullions[0].x, l.leaves[0].right(), epsilon = 1e-9);
        assert_relative_eq!(l.leaves[1].x, l.mullions[0].right(), epsilon = 1e-9);
        assert_relative_eq!(l.mullions[1].x, l.leaves[1].right(), epsilon = 1e-9);
        assert_relative_eq!(l.leaves[2].x, l.mullions[1].right(), epsilon = 1e-9);
    }

    #[test]
    fn test_single_leaf_inset_by_frame() {
        let l = layout_leaves(&outer(), WindowType::SingleLeaf, 70.0);
        assert!(l.leaves[0].approx_eq(&outer().inset_uniform(70.0), 1e-9));
        assert!(l.mullions.is_empty());
    }

    #[test]
    fn test_degenerate_sizes_clamp_to_zero() {
        let tiny = Rect::new(0.0, 0.0, 100.0, 50.0);
        let l = layout_leaves(&tiny, WindowType::TripleLeaf, 80.0);
        for leaf in &l.leaves {
            assert!(leaf.width >= 0.0 && leaf.height >= 0.0);
        }
    }

    #[test]
    fn test_operable_leaf_rules() {
        use OpeningDirection::*;
        assert_eq!(operable_leaf(WindowType::Fixed, Left), None);
        assert_eq!(operable_leaf(WindowType::SingleLeaf, Fixed), None);
        assert_eq!(operable_leaf(WindowType::SingleLeaf, TopRight), Some(0));
        assert_eq!(operable_leaf(WindowType::DoubleLeaf, TopLeft), Some(0));
        assert_eq!(operable_leaf(WindowType::DoubleLeaf, Right), Some(1));
        assert_eq!(operable_leaf(WindowType::TripleLeaf, Right), Some(2));
        assert_eq!(operable_leaf(WindowType::TripleLeaf, Left), Some(0));
        for dir in OpeningDirection::ALL {
            assert_ne!(operable_leaf(WindowType::TripleLeaf, dir), Some(1));
        }
    }
}
