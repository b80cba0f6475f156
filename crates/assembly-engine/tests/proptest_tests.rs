//! Property-based tests for the assembly laws using the `proptest` crate.

use proptest::prelude::*;

use assembly_engine::{assemble, Assembly, AssemblyConfig};
use catalog::{normalize, Catalog};
use sash_types::*;

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

const PROFILES: [&str; 6] = [
    "ideal-4000",
    "streamline-76",
    "ideal-7000",
    "bluEvolution-82",
    "bluEvolution-92",
    "unknown-profile",
];
const DOOR_PROFILES: [&str; 3] = ["door-classic", "door-solid", "door-premium"];
const GLAZINGS: [&str; 4] = ["glz-double", "glz-triple", "glz-quad", "unknown-glazing"];
const COLORS: [&str; 6] = ["white", "anthracite", "golden-oak", "walnut", "black", "grey"];

fn arb_window_type() -> impl Strategy<Value = WindowType> {
    prop::sample::select(WindowType::ALL.to_vec())
}

fn arb_direction() -> impl Strategy<Value = OpeningDirection> {
    prop::sample::select(OpeningDirection::ALL.to_vec())
}

fn arb_colors() -> impl Strategy<Value = ColorSelection> {
    let c = || prop::sample::select(COLORS.to_vec());
    (c(), c(), c(), c()).prop_map(|(base, outside, inside, rubber)| ColorSelection {
        base: base.into(),
        outside: outside.into(),
        inside: inside.into(),
        rubber: rubber.into(),
    })
}

/// Arbitrary window within the documented size range.
fn arb_window() -> impl Strategy<Value = Configuration> {
    (
        arb_window_type(),
        arb_direction(),
        prop::sample::select(PROFILES.to_vec()),
        prop::sample::select(GLAZINGS.to_vec()),
        arb_colors(),
        400.0f64..=2500.0,
        400.0f64..=2500.0,
    )
        .prop_map(
            |(window_type, opening_direction, profile, glazing, colors, width, height)| {
                Configuration {
                    product_type: ProductType::Window,
                    window_type,
                    opening_direction,
                    profile_id: profile.into(),
                    glazing_id: glazing.into(),
                    colors,
                    width,
                    height,
                }
            },
        )
}

fn arb_door() -> impl Strategy<Value = Configuration> {
    (
        prop::sample::select(DOOR_PROFILES.to_vec()),
        prop::sample::select(GLAZINGS.to_vec()),
        arb_colors(),
        800.0f64..=1200.0,
        1800.0f64..=2400.0,
    )
        .prop_map(|(profile, glazing, colors, width, height)| Configuration {
            product_type: ProductType::Door,
            window_type: WindowType::SingleLeaf,
            opening_direction: OpeningDirection::Left,
            profile_id: profile.into(),
            glazing_id: glazing.into(),
            colors,
            width,
            height,
        })
}

fn arb_configuration() -> impl Strategy<Value = Configuration> {
    prop_oneof![3 => arb_window(), 1 => arb_door()]
}

fn build(config: &Configuration) -> Assembly {
    let resolved = normalize(&Catalog::default(), config);
    assemble(&resolved, &AssemblyConfig::default())
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. Bounding box equals the configured footprint
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn bounding_box_matches_footprint(config in arb_configuration()) {
        let a = build(&config);
        prop_assert!(!a.parts.is_empty());
        let bbox = a.bounding_rect().unwrap();
        prop_assert!(bbox.approx_eq(&a.footprint, TOL),
            "bbox {:?} != footprint {:?}", bbox, a.footprint);
        prop_assert_eq!(a.diagnostics.clamped_parts, 0);
        for p in &a.parts {
            prop_assert!(p.bounds.rect.width >= 0.0 && p.bounds.rect.height >= 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn assembly_is_idempotent(config in arb_configuration()) {
        prop_assert_eq!(build(&config), build(&config));
    }
}

// ---------------------------------------------------------------------------
// 3. Leaf-count law
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn leaf_and_mullion_counts(config in arb_window()) {
        let a = build(&config);
        let n = config.window_type.leaf_count();
        for side in [Side::Front, Side::Back] {
            prop_assert_eq!(a.leaves(side).len(), n);
            prop_assert_eq!(
                a.count(side, |k| matches!(k, PartKind::Mullion { .. })),
                n - 1
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Opening-indicator exclusivity
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn indicator_exclusivity(config in arb_window()) {
        let a = build(&config);
        let closed = config.window_type == WindowType::Fixed
            || config.opening_direction == OpeningDirection::Fixed;
        for side in [Side::Front, Side::Back] {
            let mut total = 0;
            for leaf in 0..config.window_type.leaf_count() {
                let indicators: Vec<_> = a
                    .leaf_parts(side, leaf)
                    .into_iter()
                    .filter(|p| matches!(p.kind, PartKind::Indicator { .. }))
                    .collect();
                prop_assert!(indicators.len() <= 1);
                let middle = config.window_type == WindowType::TripleLeaf && leaf == 1;
                if closed || middle {
                    prop_assert!(indicators.is_empty());
                }
                if let Some(ind) = indicators.first() {
                    let expected = config.opening_direction.hinge_side();
                    let is_expected_indicator = matches!(
                        ind.kind,
                        PartKind::Indicator { hinge, .. } if Some(hinge) == expected
                    );
                    prop_assert!(is_expected_indicator);
                }
                total += indicators.len();
            }
            prop_assert_eq!(total, if closed { 0 } else { 1 });
            let hardware = a.count(side, PartKind::is_hardware);
            prop_assert_eq!(hardware, if closed { 0 } else { 3 });
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Color-binding law
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn back_side_binds_inside(config in arb_configuration()) {
        let a = build(&config);
        for front in a.parts_on(Side::Front) {
            let back = a.counterpart(front).unwrap();
            prop_assert_eq!(back.side, Side::Back);
            prop_assert_eq!(back.bounds.rect, front.bounds.rect);
            prop_assert_eq!(a.counterpart(back).map(|p| p.id), Some(front.id));

            let expected = match front.fill.color_role() {
                Some(ColorRole::Outside) => Some(ColorRole::Inside),
                other => other,
            };
            prop_assert_eq!(back.fill.color_role(), expected);
            prop_assert_ne!(front.fill.color_role(), Some(ColorRole::Inside));

            if matches!(front.kind, PartKind::FrameDepth { .. }) {
                prop_assert_eq!(front.fill.color_role(), Some(ColorRole::Base));
                prop_assert_eq!(back.fill.color_role(), Some(ColorRole::Base));
            }
            if front.kind == PartKind::Seal {
                prop_assert_eq!(back.fill.color_role(), Some(ColorRole::Rubber));
            }
        }
        prop_assert_eq!(
            a.parts_on(Side::Back)
                .filter(|p| p.fill.color_role() == Some(ColorRole::Outside))
                .count(),
            0
        );
    }
}

// ---------------------------------------------------------------------------
// 6. Glazing-divider law
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn glazing_lines_per_panel(config in arb_configuration()) {
        let a = build(&config);
        let expected = Catalog::default().glazing_divider_count(&config.glazing_id);
        for side in [Side::Front, Side::Back] {
            for panel in a.parts_on(side).filter(|p| p.kind.is_glass_panel()) {
                let lines = a
                    .parts_on(side)
                    .filter(|p| {
                        p.owner == panel.owner && matches!(p.kind, PartKind::GlazingLine { .. })
                    })
                    .count();
                prop_assert_eq!(lines, expected);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 7. Depth mirroring keeps both sides inside the product
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sides_share_depth_extent(config in arb_configuration()) {
        let a = build(&config);
        for front in a.parts_on(Side::Front).filter(|p| !p.kind.is_hardware()) {
            prop_assert!(front.bounds.z_end() <= a.depth * 0.5 + TOL);
            let back = a.counterpart(front).unwrap();
            prop_assert!(back.bounds.z >= a.depth * 0.5 - TOL);
        }
    }
}
