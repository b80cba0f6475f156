use serde::{Deserialize, Serialize};

use sash_types::{GlazingTier, ProfileTier, Rgb};

/// A frame profile system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEntry {
    pub id: String,
    pub name: String,
    pub tier: ProfileTier,
    pub base_price: f64,
    /// Door profiles without any glass cutout.
    #[serde(default)]
    pub glassless: bool,
}

/// A glazing package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlazingEntry {
    pub id: String,
    pub name: String,
    pub tier: GlazingTier,
    pub price_modifier: f64,
}

/// A selectable surface color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    pub id: String,
    pub name: String,
    pub value: Rgb,
    pub price_modifier: f64,
}

/// The lookup tables the configurator resolves ids against. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub profiles: Vec<ProfileEntry>,
    pub glazings: Vec<GlazingEntry>,
    pub colors: Vec<ColorEntry>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            profiles: Vec::new(),
            glazings: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn profile(&self, id: &str) -> Option<&ProfileEntry> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn glazing(&self, id: &str) -> Option<&GlazingEntry> {
        self.glazings.iter().find(|g| g.id == id)
    }

    pub fn color(&self, id: &str) -> Option<&ColorEntry> {
        self.colors.iter().find(|c| c.id == id)
    }
}

fn profile(id: &str, name: &str, tier: ProfileTier, base_price: f64, glassless: bool) -> ProfileEntry {
    ProfileEntry {
        id: id.to_string(),
        name: name.to_string(),
        tier,
        base_price,
        glassless,
    }
}

fn glazing(id: &str, name: &str, tier: GlazingTier, price_modifier: f64) -> GlazingEntry {
    GlazingEntry {
        id: id.to_string(),
        name: name.to_string(),
        tier,
        price_modifier,
    }
}

fn color(id: &str, name: &str, value: Rgb, price_modifier: f64) -> ColorEntry {
    ColorEntry {
        id: id.to_string(),
        name: name.to_string(),
        value,
        price_modifier,
    }
}

impl Default for Catalog {
    /// The built-in demo catalog.
    fn default() -> Self {
        Self {
            profiles: vec![
                profile("ideal-4000", "Aluplast Ideal 4000", ProfileTier::Standard, 180.0, false),
                profile("streamline-76", "Salamander Streamline 76", ProfileTier::Mid, 210.0, false),
                profile("ideal-7000", "Aluplast Ideal 7000", ProfileTier::Mid, 225.0, false),
                profile("bluEvolution-82", "Salamander bluEvolution 82", ProfileTier::Premium, 260.0, false),
                profile("bluEvolution-92", "Salamander bluEvolution 92", ProfileTier::Premium, 290.0, false),
                profile("door-classic", "Classic Entrance Door", ProfileTier::Standard, 520.0, false),
                profile("door-solid", "Solid Entrance Door", ProfileTier::Standard, 480.0, true),
                profile("door-premium", "Premium Entrance Door", ProfileTier::Premium, 760.0, false),
            ],
            glazings: vec![
                glazing("glz-double", "Double glazing Ug 1.1", GlazingTier::Double, 1.0),
                glazing("glz-triple", "Triple glazing Ug 0.6", GlazingTier::Triple, 1.25),
                glazing("glz-quad", "Quadruple glazing Ug 0.4", GlazingTier::Quad, 1.5),
            ],
            colors: vec![
                color("white", "White", Rgb::new(0xff, 0xff, 0xff), 1.0),
                color("anthracite", "Anthracite Grey", Rgb::new(0x38, 0x3e, 0x42), 1.15),
                color("golden-oak", "Golden Oak", Rgb::new(0xa8, 0x69, 0x2e), 1.2),
                color("walnut", "Walnut", Rgb::new(0x5c, 0x3a, 0x21), 1.2),
                color("black", "Black", Rgb::new(0x1c, 0x1c, 0x1c), 1.1),
                color("grey", "Silver Grey", Rgb::new(0x8f, 0x99, 0x9f), 1.1),
            ],
        }
    }
}
