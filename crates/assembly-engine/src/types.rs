use serde::{Deserialize, Serialize};

use catalog::ResolvedProduct;
use sash_types::{FrameThickness, Palette, Part, PartId, PartKind, Rect, Rgb, Side};

/// Settings for the assembler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyConfig {
    /// Maximum number of assemblies kept by [`crate::Assembler`]. Zero disables caching.
    pub cache_capacity: usize,
    /// Output units per millimeter. All bounds are scaled by this factor.
    pub units_per_mm: f64,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 32,
            units_per_mm: 1.0,
        }
    }
}

impl AssemblyConfig {
    /// Recompute on every call.
    pub fn uncached() -> Self {
        Self {
            cache_capacity: 0,
            ..Self::default()
        }
    }

    /// Output in meters, the usual unit of a 3D scene.
    pub fn meters() -> Self {
        Self {
            units_per_mm: 0.001,
            ..Self::default()
        }
    }
}

/// Non-fatal notes from one assembly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub warnings: Vec<String>,
    /// Parts whose footprint had to be cut back to the outer rectangle.
    pub clamped_parts: usize,
}

/// The positioned, colored parts of one configuration, front side first.
///
/// Immutable once built; safe to share with a render loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    pub product: ResolvedProduct,
    pub frame_thickness: FrameThickness,
    pub palette: Palette,
    /// Outer rectangle, origin top-left.
    pub footprint: Rect,
    /// Front-to-back depth of the product.
    pub depth: f64,
    pub parts: Vec<Part>,
    pub diagnostics: Diagnostics,
}

impl Assembly {
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(id.0 as usize).filter(|p| p.id == id)
    }

    pub fn counterpart(&self, part: &Part) -> Option<&Part> {
        part.counterpart.and_then(|id| self.part(id))
    }

    pub fn parts_on(&self, side: Side) -> impl Iterator<Item = &Part> + '_ {
        self.parts.iter().filter(move |p| p.side == side)
    }

    pub fn count(&self, side: Side, pred: impl Fn(&PartKind) -> bool) -> usize {
        self.parts_on(side).filter(|p| pred(&p.kind)).count()
    }

    /// Window leaf glass panels on one side, left to right.
    pub fn leaves(&self, side: Side) -> Vec<&Part> {
        let mut leaves: Vec<&Part> = self
            .parts_on(side)
            .filter(|p| p.kind == PartKind::Leaf)
            .collect();
        leaves.sort_by_key(|p| p.leaf_index());
        leaves
    }

    /// Parts drawn on a given leaf, on one side.
    pub fn leaf_parts(&self, side: Side, index: usize) -> Vec<&Part> {
        self.parts_on(side)
            .filter(|p| p.leaf_index() == Some(index))
            .collect()
    }

    /// Union of every part footprint.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.parts
            .iter()
            .map(|p| p.bounds.rect)
            .reduce(|a, b| a.union(&b))
    }

    /// Resolved color of a part's fill, if it is bound to a color role.
    pub fn color_of(&self, part: &Part) -> Option<Rgb> {
        part.fill.color_role().map(|role| self.palette.rgb(role))
    }
}
