//! Rich assertion helpers with diagnostic output.
//!
//! Every failure includes expected vs actual plus enough of the part list to
//! see what went wrong.

use assembly_engine::Assembly;
use presentation::RecordingBackend;
use sash_types::{HingeSide, Part, PartKind, Rect, Rgb, Side};

use crate::helpers::{describe_part, HarnessError};

fn fail(detail: String) -> Result<(), HarnessError> {
    Err(HarnessError::AssertionFailed { detail })
}

fn listing<'a>(parts: impl Iterator<Item = &'a Part>) -> String {
    let lines: Vec<String> = parts.map(|p| format!("  {}", describe_part(p))).collect();
    if lines.is_empty() {
        "  none".to_string()
    } else {
        lines.join("\n")
    }
}

/// Assert the number of parts on `side` matching `pred`.
pub fn assert_part_count(
    assembly: &Assembly,
    side: Side,
    pred: impl Fn(&PartKind) -> bool,
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let matching: Vec<&Part> = assembly.parts_on(side).filter(|p| pred(&p.kind)).collect();
    if matching.len() == expected {
        Ok(())
    } else {
        fail(format!(
            "[{}] expected {} parts on {:?}, got {}:\n{}",
            ctx,
            expected,
            side,
            matching.len(),
            listing(matching.into_iter()),
        ))
    }
}

/// Assert a footprint matches expected values within tolerance.
pub fn assert_rect(actual: &Rect, expected: &Rect, tol: f64, ctx: &str) -> Result<(), HarnessError> {
    if actual.approx_eq(expected, tol) {
        Ok(())
    } else {
        fail(format!(
            "[{}] expected rect ({:.3}, {:.3}, {:.3} x {:.3}), got ({:.3}, {:.3}, {:.3} x {:.3}) (tol={})",
            ctx,
            expected.x,
            expected.y,
            expected.width,
            expected.height,
            actual.x,
            actual.y,
            actual.width,
            actual.height,
            tol,
        ))
    }
}

/// Assert the union of every part footprint equals the outer rectangle.
pub fn assert_bounding_rect(assembly: &Assembly, tol: f64) -> Result<(), HarnessError> {
    match assembly.bounding_rect() {
        Some(bbox) => assert_rect(&bbox, &assembly.footprint, tol, "bounding rect"),
        None => fail("[bounding rect] assembly has no parts".into()),
    }
}

/// Assert the resolved color of a part.
pub fn assert_color(
    assembly: &Assembly,
    part: &Part,
    expected: Rgb,
    ctx: &str,
) -> Result<(), HarnessError> {
    match assembly.color_of(part) {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => fail(format!(
            "[{}] {}: expected color {}, got {} (fill {:?})",
            ctx,
            describe_part(part),
            expected.to_hex(),
            actual.to_hex(),
            part.fill,
        )),
        None => fail(format!(
            "[{}] {}: fill {:?} is not bound to a color role",
            ctx,
            describe_part(part),
            part.fill,
        )),
    }
}

/// Assert that hardware and the indicator sit on exactly one leaf, with the
/// indicator's hinge on the expected side.
pub fn assert_operable_leaf(
    assembly: &Assembly,
    leaf: usize,
    hinge: HingeSide,
) -> Result<(), HarnessError> {
    let indicators: Vec<&Part> = assembly
        .parts_on(Side::Front)
        .filter(|p| matches!(p.kind, PartKind::Indicator { .. }))
        .collect();
    let [indicator] = indicators.as_slice() else {
        return fail(format!(
            "[operable leaf] expected exactly one indicator, got {}:\n{}",
            indicators.len(),
            listing(indicators.iter().copied()),
        ));
    };
    if indicator.leaf_index() != Some(leaf) {
        return fail(format!(
            "[operable leaf] indicator on leaf {:?}, expected leaf {}",
            indicator.leaf_index(),
            leaf,
        ));
    }
    if let PartKind::Indicator { hinge: actual, .. } = indicator.kind {
        if actual != hinge {
            return fail(format!(
                "[operable leaf] indicator hinges {:?}, expected {:?}",
                actual, hinge
            ));
        }
    }
    let stray: Vec<&Part> = assembly
        .parts_on(Side::Front)
        .filter(|p| p.kind.is_hardware() && p.leaf_index() != Some(leaf))
        .collect();
    if stray.is_empty() {
        Ok(())
    } else {
        fail(format!(
            "[operable leaf] hardware off leaf {}:\n{}",
            leaf,
            listing(stray.into_iter()),
        ))
    }
}

/// Assert that no window hardware or indicator exists at all.
pub fn assert_no_operable_leaf(assembly: &Assembly) -> Result<(), HarnessError> {
    let operable: Vec<&Part> = assembly
        .parts
        .iter()
        .filter(|p| p.kind.is_hardware() || matches!(p.kind, PartKind::Indicator { .. }))
        .collect();
    if operable.is_empty() {
        Ok(())
    } else {
        fail(format!(
            "[no operable leaf] found:\n{}",
            listing(operable.into_iter())
        ))
    }
}

/// Assert a render backend holds no uploads.
pub fn assert_backend_released(backend: &RecordingBackend, ctx: &str) -> Result<(), HarnessError> {
    if backend.live_count() == 0 {
        Ok(())
    } else {
        fail(format!(
            "[{}] {} meshes still live ({} uploads, {} releases)",
            ctx,
            backend.live_count(),
            backend.uploads,
            backend.releases,
        ))
    }
}
