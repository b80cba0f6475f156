use serde::{Deserialize, Serialize};

/// What is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Window,
    Door,
}

/// Window layout. Only meaningful for [`ProductType::Window`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindowType {
    #[default]
    SingleLeaf,
    DoubleLeaf,
    TripleLeaf,
    Fixed,
}

impl WindowType {
    pub const ALL: [WindowType; 4] = [
        WindowType::SingleLeaf,
        WindowType::DoubleLeaf,
        WindowType::TripleLeaf,
        WindowType::Fixed,
    ];

    /// Number of leaves laid out side by side.
    pub fn leaf_count(self) -> usize {
        match self {
            WindowType::SingleLeaf | WindowType::Fixed => 1,
            WindowType::DoubleLeaf => 2,
            WindowType::TripleLeaf => 3,
        }
    }

    /// Whether any leaf of this layout can open.
    pub fn is_operable(self) -> bool {
        !matches!(self, WindowType::Fixed)
    }
}

/// Which edge of the operable leaf carries the hinges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HingeSide {
    Left,
    Right,
}

impl HingeSide {
    pub fn opposite(self) -> Self {
        match self {
            HingeSide::Left => HingeSide::Right,
            HingeSide::Right => HingeSide::Left,
        }
    }
}

/// How the operable leaf opens. `Top*` variants additionally tilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpeningDirection {
    Left,
    Right,
    TopLeft,
    TopRight,
    #[default]
    Fixed,
}

impl OpeningDirection {
    pub const ALL: [OpeningDirection; 5] = [
        OpeningDirection::Left,
        OpeningDirection::Right,
        OpeningDirection::TopLeft,
        OpeningDirection::TopRight,
        OpeningDirection::Fixed,
    ];

    /// Hinge edge, or `None` for a fixed leaf.
    pub fn hinge_side(self) -> Option<HingeSide> {
        match self {
            OpeningDirection::Left | OpeningDirection::TopLeft => Some(HingeSide::Left),
            OpeningDirection::Right | OpeningDirection::TopRight => Some(HingeSide::Right),
            OpeningDirection::Fixed => None,
        }
    }

    pub fn tilts(self) -> bool {
        matches!(self, OpeningDirection::TopLeft | OpeningDirection::TopRight)
    }
}

/// Catalog tier of a frame profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProfileTier {
    Standard,
    Mid,
    Premium,
}

impl ProfileTier {
    pub fn frame_thickness(self) -> FrameThickness {
        match self {
            ProfileTier::Standard => FrameThickness::Thin,
            ProfileTier::Mid => FrameThickness::Medium,
            ProfileTier::Premium => FrameThickness::Thick,
        }
    }
}

/// Visual frame thickness class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameThickness {
    Thin,
    Medium,
    Thick,
}

impl FrameThickness {
    /// Visible face width of a window frame bar, in millimeters.
    pub fn face_width(self) -> f64 {
        match self {
            FrameThickness::Thin => 60.0,
            FrameThickness::Medium => 70.0,
            FrameThickness::Thick => 80.0,
        }
    }

    /// Front-to-back depth of the profile, in millimeters.
    pub fn profile_depth(self) -> f64 {
        match self {
            FrameThickness::Thin => 70.0,
            FrameThickness::Medium => 76.0,
            FrameThickness::Thick => 82.0,
        }
    }
}

/// Number of glass layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlazingTier {
    Double,
    Triple,
    Quad,
}

impl GlazingTier {
    pub const ALL: [GlazingTier; 3] = [GlazingTier::Double, GlazingTier::Triple, GlazingTier::Quad];

    /// Number of internal divider lines drawn in every glass panel.
    pub fn divider_count(self) -> usize {
        match self {
            GlazingTier::Double => 1,
            GlazingTier::Triple => 2,
            GlazingTier::Quad => 3,
        }
    }

    /// Glass opacity in `(0, 1]`; more layers read as less transparent.
    pub fn opacity(self) -> f64 {
        match self {
            GlazingTier::Double => 0.9,
            GlazingTier::Triple => 0.7,
            GlazingTier::Quad => 0.6,
        }
    }
}

/// Catalog color ids picked for each role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSelection {
    pub base: String,
    pub outside: String,
    pub inside: String,
    pub rubber: String,
}

/// Allowed width/height interval for a product type, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionLimits {
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
}

impl DimensionLimits {
    pub fn for_product(product: ProductType) -> Self {
        match product {
            ProductType::Window => Self {
                min_width: 400.0,
                max_width: 2500.0,
                min_height: 400.0,
                max_height: 2500.0,
            },
            ProductType::Door => Self {
                min_width: 800.0,
                max_width: 1200.0,
                min_height: 1800.0,
                max_height: 2400.0,
            },
        }
    }

    pub fn contains(&self, width: f64, height: f64) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }

    /// Clamp into range. Non-finite values fall back to the lower bound.
    pub fn clamp(&self, width: f64, height: f64) -> (f64, f64) {
        let clamp_axis = |v: f64, lo: f64, hi: f64| if v.is_finite() { v.clamp(lo, hi) } else { lo };
        (
            clamp_axis(width, self.min_width, self.max_width),
            clamp_axis(height, self.min_height, self.max_height),
        )
    }
}

/// A user's configuration as supplied by the UI. Immutable per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub product_type: ProductType,
    /// Ignored for doors, and optional on the wire.
    #[serde(default)]
    pub window_type: WindowType,
    #[serde(default)]
    pub opening_direction: OpeningDirection,
    pub profile_id: String,
    pub glazing_id: String,
    pub colors: ColorSelection,
    /// Outer width in millimeters.
    pub width: f64,
    /// Outer height in millimeters.
    pub height: f64,
}

impl Configuration {
    /// Strict check for callers that prefer rejecting over clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = DimensionLimits::for_product(self.product_type);
        if !limits.contains(self.width, self.height) {
            return Err(ConfigError::DimensionOutOfRange {
                product: self.product_type,
                width: self.width,
                height: self.height,
            });
        }
        if self.product_type == ProductType::Window
            && self.window_type == WindowType::Fixed
            && self.opening_direction != OpeningDirection::Fixed
        {
            return Err(ConfigError::OpeningOnFixedWindow {
                direction: self.opening_direction,
            });
        }
        Ok(())
    }
}

/// Errors from strict configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{width} x {height} mm is outside the allowed range for {product:?}")]
    DimensionOutOfRange {
        product: ProductType,
        width: f64,
        height: f64,
    },

    #[error("fixed windows cannot open ({direction:?} requested)")]
    OpeningOnFixedWindow { direction: OpeningDirection },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(window_type: WindowType, opening_direction: OpeningDirection) -> Configuration {
        Configuration {
            product_type: ProductType::Window,
            window_type,
            opening_direction,
            profile_id: "ideal-4000".into(),
            glazing_id: "glz-double".into(),
            colors: ColorSelection {
                base: "white".into(),
                outside: "white".into(),
                inside: "white".into(),
                rubber: "black".into(),
            },
            width: 1000.0,
            height: 1200.0,
        }
    }

    #[test]
    fn test_leaf_counts() {
        assert_eq!(WindowType::SingleLeaf.leaf_count(), 1);
        assert_eq!(WindowType::DoubleLeaf.leaf_count(), 2);
        assert_eq!(WindowType::TripleLeaf.leaf_count(), 3);
        assert_eq!(WindowType::Fixed.leaf_count(), 1);
        assert!(!WindowType::Fixed.is_operable());
    }

    #[test]
    fn test_divider_counts_follow_tier() {
        let counts: Vec<usize> = GlazingTier::ALL.iter().map(|t| t.divider_count()).collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_opacity_decreases_with_layers() {
        assert!(GlazingTier::Double.opacity() > GlazingTier::Triple.opacity());
        assert!(GlazingTier::Triple.opacity() > GlazingTier::Quad.opacity());
        for tier in GlazingTier::ALL {
            assert!(tier.opacity() > 0.0 && tier.opacity() <= 1.0);
        }
    }

    #[test]
    fn test_thickness_ordering() {
        assert!(FrameThickness::Thin.face_width() < FrameThickness::Medium.face_width());
        assert!(FrameThickness::Medium.face_width() < FrameThickness::Thick.face_width());
        assert_eq!(ProfileTier::Premium.frame_thickness(), FrameThickness::Thick);
    }

    #[test]
    fn test_hinge_sides() {
        assert_eq!(OpeningDirection::TopLeft.hinge_side(), Some(HingeSide::Left));
        assert_eq!(OpeningDirection::Right.hinge_side(), Some(HingeSide::Right));
        assert_eq!(OpeningDirection::Fixed.hinge_side(), None);
        assert!(OpeningDirection::TopRight.tilts());
        assert!(!OpeningDirection::Left.tilts());
    }

    #[test]
    fn test_clamp_limits() {
        let door = DimensionLimits::for_product(ProductType::Door);
        assert_eq!(door.clamp(500.0, 3000.0), (800.0, 2400.0));
        assert_eq!(door.clamp(f64::NAN, 2000.0), (800.0, 2000.0));
        assert!(door.contains(900.0, 2100.0));
    }

    #[test]
    fn test_validate_rejects_opening_on_fixed() {
        let cfg = window(WindowType::Fixed, OpeningDirection::Left);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OpeningOnFixedWindow { .. })
        ));
        assert!(window(WindowType::Fixed, OpeningDirection::Fixed).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut cfg = window(WindowType::SingleLeaf, OpeningDirection::Left);
        cfg.width = 3000.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DimensionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_configuration_wire_format() {
        let cfg = window(WindowType::DoubleLeaf, OpeningDirection::TopLeft);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["productType"], "window");
        assert_eq!(json["windowType"], "double-leaf");
        assert_eq!(json["openingDirection"], "top-left");
        assert_eq!(json["colors"]["rubber"], "black");
    }

    #[test]
    fn test_door_wire_format_omits_window_fields() {
        let json = r##"{
            "productType": "door",
            "profileId": "door-classic",
            "glazingId": "glz-double",
            "colors": {"base": "white", "outside": "walnut", "inside": "white", "rubber": "black"},
            "width": 900.0,
            "height": 2100.0
        }"##;
        let cfg: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.product_type, ProductType::Door);
        assert_eq!(cfg.window_type, WindowType::SingleLeaf);
        assert_eq!(cfg.opening_direction, OpeningDirection::Fixed);
        assert_eq!(cfg.profile_id, "door-classic");
        assert!(cfg.validate().is_ok());
    }
}
