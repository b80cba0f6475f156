//! Helper functions: error type, configuration builders, part lookups.

use assembly_engine::Assembly;
use catalog::CatalogError;
use sash_types::*;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("part not found: {what}")]
    PartNotFound { what: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// ── Configuration Builder ───────────────────────────────────────────────────

/// Fluent builder over [`Configuration`], starting from a white
/// 1000 x 1200 mm single-leaf window.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Configuration,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::window(WindowType::SingleLeaf)
    }
}

impl ConfigBuilder {
    pub fn window(window_type: WindowType) -> Self {
        let opening_direction = if window_type == WindowType::Fixed {
            OpeningDirection::Fixed
        } else {
            OpeningDirection::Left
        };
        Self {
            config: Configuration {
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
            },
        }
    }

    pub fn door(profile_id: &str) -> Self {
        let mut builder = Self::window(WindowType::SingleLeaf);
        builder.config.product_type = ProductType::Door;
        builder.config.profile_id = profile_id.into();
        builder.config.width = 1000.0;
        builder.config.height = 2100.0;
        builder
    }

    pub fn opening(mut self, direction: OpeningDirection) -> Self {
        self.config.opening_direction = direction;
        self
    }

    pub fn profile(mut self, id: &str) -> Self {
        self.config.profile_id = id.into();
        self
    }

    pub fn glazing(mut self, id: &str) -> Self {
        self.config.glazing_id = id.into();
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn colors(mut self, base: &str, outside: &str, inside: &str, rubber: &str) -> Self {
        self.config.colors = ColorSelection {
            base: base.into(),
            outside: outside.into(),
            inside: inside.into(),
            rubber: rubber.into(),
        };
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

// ── Sample Configurations ───────────────────────────────────────────────────

/// One configuration per window type and door profile, with distinct
/// outside and inside colors so that side binding is observable.
pub fn sample_configurations() -> Vec<(&'static str, Configuration)> {
    let two_tone = |b: ConfigBuilder| b.colors("white", "anthracite", "golden-oak", "black");
    vec![
        ("fixed", two_tone(ConfigBuilder::window(WindowType::Fixed)).build()),
        (
            "single-right",
            two_tone(ConfigBuilder::window(WindowType::SingleLeaf))
                .opening(OpeningDirection::Right)
                .profile("streamline-76")
                .build(),
        ),
        (
            "double-left",
            two_tone(ConfigBuilder::window(WindowType::DoubleLeaf))
                .profile("bluEvolution-82")
                .glazing("glz-triple")
                .size(1200.0, 1400.0)
                .build(),
        ),
        (
            "triple-top-right",
            two_tone(ConfigBuilder::window(WindowType::TripleLeaf))
                .opening(OpeningDirection::TopRight)
                .glazing("glz-quad")
                .size(2100.0, 1500.0)
                .build(),
        ),
        ("door-classic", two_tone(ConfigBuilder::door("door-classic")).build()),
        ("door-premium", two_tone(ConfigBuilder::door("door-premium")).build()),
        ("door-solid", two_tone(ConfigBuilder::door("door-solid")).build()),
    ]
}

// ── Part Lookups ────────────────────────────────────────────────────────────

/// First part on `side` matching `pred`, or a `PartNotFound` error naming `what`.
pub fn find_part<'a>(
    assembly: &'a Assembly,
    side: Side,
    what: &str,
    pred: impl Fn(&Part) -> bool,
) -> Result<&'a Part, HarnessError> {
    assembly
        .parts_on(side)
        .find(|p| pred(p))
        .ok_or_else(|| HarnessError::PartNotFound {
            what: format!("{what} on {side:?}"),
        })
}

/// Short one-line description of a part, used in failure messages.
pub fn describe_part(part: &Part) -> String {
    let r = part.bounds.rect;
    format!(
        "#{} {} {:?} ({:.1}, {:.1}, {:.1} x {:.1}) z={:.1}+{:.1}",
        part.id.0,
        part.kind.name(),
        part.side,
        r.x,
        r.y,
        r.width,
        r.height,
        part.bounds.z,
        part.bounds.depth,
    )
}
