use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use sash_types::{
    Configuration, DimensionLimits, FrameThickness, GlazingTier, OpeningDirection, Palette,
    ProductType, ProfileTier, WindowType,
};

use crate::tables::Catalog;

/// Product-specific options after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ResolvedProduct {
    Window {
        window_type: WindowType,
        opening: OpeningDirection,
    },
    Door,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedProfile {
    pub id: String,
    pub name: String,
    pub tier: ProfileTier,
    pub thickness: FrameThickness,
    pub glassless: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedGlazing {
    pub id: String,
    pub name: String,
    pub tier: GlazingTier,
}

/// A configuration with every id resolved and every invariant enforced.
/// This is the only input the assembly rules see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfiguration {
    pub product: ResolvedProduct,
    pub profile: ResolvedProfile,
    pub glazing: ResolvedGlazing,
    pub palette: Palette,
    pub width: f64,
    pub height: f64,
}

impl ResolvedConfiguration {
    pub fn product_type(&self) -> ProductType {
        match self.product {
            ResolvedProduct::Window { .. } => ProductType::Window,
            ResolvedProduct::Door => ProductType::Door,
        }
    }
}

/// Resolve ids, clamp dimensions and drop options that do not apply.
/// Never fails.
pub fn normalize(catalog: &Catalog, config: &Configuration) -> ResolvedConfiguration {
    let limits = DimensionLimits::for_product(config.product_type);
    let (width, height) = limits.clamp(config.width, config.height);
    if width != config.width || height != config.height {
        warn!(
            requested = ?[config.width, config.height],
            clamped = ?[width, height],
            "dimensions outside product range"
        );
    }

    let product = match config.product_type {
        ProductType::Door => ResolvedProduct::Door,
        ProductType::Window => {
            let opening = if config.window_type == WindowType::Fixed {
                if config.opening_direction != OpeningDirection::Fixed {
                    debug!(
                        requested = ?config.opening_direction,
                        "ignoring opening direction on fixed window"
                    );
                }
                OpeningDirection::Fixed
            } else {
                config.opening_direction
            };
            ResolvedProduct::Window {
                window_type: config.window_type,
                opening,
            }
        }
    };

    let tier = catalog.profile_tier(&config.profile_id);
    let profile = match catalog.profile(&config.profile_id) {
        Some(entry) => ResolvedProfile {
            id: entry.id.clone(),
            name: entry.name.clone(),
            tier,
            thickness: tier.frame_thickness(),
            glassless: entry.glassless,
        },
        None => ResolvedProfile {
            id: config.profile_id.clone(),
            name: config.profile_id.clone(),
            tier,
            thickness: tier.frame_thickness(),
            glassless: false,
        },
    };

    let glazing_tier = catalog.glazing_tier(&config.glazing_id);
    let glazing = ResolvedGlazing {
        id: config.glazing_id.clone(),
        name: catalog
            .glazing(&config.glazing_id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| config.glazing_id.clone()),
        tier: glazing_tier,
    };

    ResolvedConfiguration {
        product,
        profile,
        glazing,
        palette: catalog.palette(&config.colors),
        width,
        height,
    }
}
