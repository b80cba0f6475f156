//! Pure id -> geometry parameter lookups.

use tracing::warn;

use sash_types::{
    ColorSelection, FrameThickness, GlazingTier, Palette, ProfileTier, ResolvedColor, Rgb,
};

use crate::tables::Catalog;

/// Tier used for profile ids the catalog does not know.
pub const DEFAULT_PROFILE_TIER: ProfileTier = ProfileTier::Standard;
/// Tier used for glazing ids the catalog does not know.
pub const DEFAULT_GLAZING_TIER: GlazingTier = GlazingTier::Double;

impl Catalog {
    pub fn profile_tier(&self, profile_id: &str) -> ProfileTier {
        match self.profile(profile_id) {
            Some(entry) => entry.tier,
            None => {
                warn!(profile_id, "unknown profile, falling back to standard tier");
                DEFAULT_PROFILE_TIER
            }
        }
    }

    /// Frame thickness class of a profile. Unknown profiles are thin.
    pub fn frame_thickness(&self, profile_id: &str) -> FrameThickness {
        self.profile_tier(profile_id).frame_thickness()
    }

    pub fn glazing_tier(&self, glazing_id: &str) -> GlazingTier {
        match self.glazing(glazing_id) {
            Some(entry) => entry.tier,
            None => {
                warn!(glazing_id, "unknown glazing, falling back to double glazing");
                DEFAULT_GLAZING_TIER
            }
        }
    }

    /// Glass opacity in `(0, 1]`. Unknown glazing is the most transparent tier.
    pub fn glass_opacity(&self, glazing_id: &str) -> f64 {
        self.glazing_tier(glazing_id).opacity()
    }

    /// Internal divider lines per glass panel: 1, 2 or 3.
    pub fn glazing_divider_count(&self, glazing_id: &str) -> usize {
        self.glazing_tier(glazing_id).divider_count()
    }

    /// Resolve a color id. Unknown ids take the first listed color, or white
    /// when the table is empty.
    pub fn resolve_color(&self, color_id: &str) -> ResolvedColor {
        let entry = self.color(color_id).or_else(|| {
            warn!(color_id, "unknown color, falling back to first catalog color");
            self.colors.first()
        });
        match entry {
            Some(c) => ResolvedColor {
                id: c.id.clone(),
                name: c.name.clone(),
                value: c.value,
            },
            None => ResolvedColor {
                id: "white".to_string(),
                name: "White".to_string(),
                value: Rgb::WHITE,
            },
        }
    }

    pub fn palette(&self, colors: &ColorSelection) -> Palette {
        Palette {
            base: self.resolve_color(&colors.base),
            outside: self.resolve_color(&colors.outside),
            inside: self.resolve_color(&colors.inside),
            rubber: self.resolve_color(&colors.rubber),
        }
    }
}
