//! Tests for verification oracles.

use assembly_engine::{Assembler, Assembly};
use sash_types::{ColorRole, Fill, PartKind, Rect, Side, WindowType};
use test_harness::helpers::sample_configurations;
use test_harness::oracle::*;
use test_harness::{ConfigBuilder, HarnessError};

fn double_leaf() -> Assembly {
    let config = ConfigBuilder::window(WindowType::DoubleLeaf)
        .colors("white", "anthracite", "white", "black")
        .glazing("glz-triple")
        .build();
    (*Assembler::default().assemble(&config)).clone()
}

// ── Passing Cases ───────────────────────────────────────────────────────

#[test]
fn all_oracles_pass_for_samples() {
    let mut assembler = Assembler::default();
    for (name, config) in sample_configurations() {
        let a = assembler.assemble(&config);
        for v in run_all(&a) {
            assert!(v.passed, "{name}: {} failed: {}", v.oracle_name, v.detail);
        }
    }
}

#[test]
fn glazing_lines_match_tier() {
    let a = double_leaf();
    let v = check_glazing_lines(&a, 2);
    assert!(v.passed, "{}", v.detail);
    assert_eq!(v.value, Some(2.0));
    assert!(!check_glazing_lines(&a, 1).passed);
}

#[test]
fn operable_hardware_reports_count() {
    let v = check_operable_hardware(&double_leaf());
    assert!(v.passed);
    assert_eq!(v.value, Some(3.0));
}

// ── Failing Cases ───────────────────────────────────────────────────────

#[test]
fn footprint_detects_shrunken_part() {
    let mut a = double_leaf();
    for p in a.parts.iter_mut() {
        if matches!(p.kind, PartKind::FrameEdge { .. } | PartKind::FrameDepth { .. }) {
            p.bounds.rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        }
    }
    let v = check_footprint(&a);
    assert!(!v.passed);
    assert!(v.detail.contains("!= outer"), "{}", v.detail);
}

#[test]
fn within_outer_detects_escape() {
    let mut a = double_leaf();
    a.parts[0].bounds.rect.x = -5.0;
    let v = check_within_outer(&a);
    assert!(!v.passed);
    assert_eq!(v.value, Some(1.0));
}

#[test]
fn side_binding_detects_outside_on_back() {
    let mut a = double_leaf();
    let back = a
        .parts
        .iter_mut()
        .find(|p| p.side == Side::Back && p.fill.color_role() == Some(ColorRole::Inside))
        .unwrap();
    back.fill = Fill::role(ColorRole::Outside);
    assert!(!check_side_binding(&a).passed);
}

#[test]
fn counterparts_detect_broken_link() {
    let mut a = double_leaf();
    let last = a.parts.len() - 1;
    a.parts[last].counterpart = None;
    assert!(!check_counterparts(&a).passed);
}

#[test]
fn depth_split_detects_crossing() {
    let mut a = double_leaf();
    let glass = a.parts.iter_mut().find(|p| p.kind == PartKind::Leaf).unwrap();
    glass.bounds.depth = a.depth;
    assert!(!check_depth_split(&a).passed);
}

#[test]
fn operable_hardware_detects_extra_indicator() {
    let mut a = double_leaf();
    let leaf = a
        .parts
        .iter()
        .position(|p| p.side == Side::Front && p.kind == PartKind::Leaf)
        .unwrap();
    a.parts[leaf].kind = PartKind::Indicator {
        hinge: sash_types::HingeSide::Left,
        tilt: false,
    };
    assert!(!check_operable_hardware(&a).passed);
}

#[test]
fn verify_returns_first_failure() {
    let mut a = double_leaf();
    a.parts[0].bounds.rect.x = -5.0;
    match verify(&a) {
        Err(HarnessError::OracleFailure { oracle, .. }) => assert_eq!(oracle, "footprint"),
        other => panic!("expected oracle failure, got {other:?}"),
    }
}
