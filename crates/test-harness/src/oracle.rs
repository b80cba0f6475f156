//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a test collect all failures in one pass.

use assembly_engine::Assembly;
use catalog::ResolvedProduct;
use sash_types::{ColorRole, Part, PartKind, Side};

use crate::helpers::{describe_part, HarnessError};

const TOL: f64 = 1e-6;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }

    /// Turn a failed verdict into an error.
    pub fn into_result(self) -> Result<(), HarnessError> {
        if self.passed {
            Ok(())
        } else {
            Err(HarnessError::OracleFailure {
                oracle: self.oracle_name,
                detail: self.detail,
            })
        }
    }
}

fn first_offenders(parts: &[&Part]) -> String {
    parts
        .iter()
        .take(5)
        .map(|p| describe_part(p))
        .collect::<Vec<_>>()
        .join("; ")
}

// ── Geometry Oracles ────────────────────────────────────────────────────────

/// The union of every part footprint equals the outer rectangle.
pub fn check_footprint(assembly: &Assembly) -> OracleVerdict {
    let outer = assembly.footprint;
    match assembly.bounding_rect() {
        Some(bbox) if bbox.approx_eq(&outer, TOL) => OracleVerdict::pass(
            "footprint",
            format!("bounding rect is {:.1} x {:.1}", bbox.width, bbox.height),
        ),
        Some(bbox) => OracleVerdict::fail(
            "footprint",
            format!(
                "bounding rect ({:.3}, {:.3}, {:.3} x {:.3}) != outer ({:.3}, {:.3}, {:.3} x {:.3})",
                bbox.x, bbox.y, bbox.width, bbox.height, outer.x, outer.y, outer.width, outer.height,
            ),
        ),
        None => OracleVerdict::fail("footprint", "assembly has no parts".into()),
    }
}

/// Every footprint lies inside the outer rectangle.
pub fn check_within_outer(assembly: &Assembly) -> OracleVerdict {
    let outside: Vec<&Part> = assembly
        .parts
        .iter()
        .filter(|p| !assembly.footprint.contains_rect(&p.bounds.rect, TOL))
        .collect();
    if outside.is_empty() {
        OracleVerdict::pass_val(
            "within_outer",
            format!(
                "all {} parts inside; {} clamped during assembly",
                assembly.parts.len(),
                assembly.diagnostics.clamped_parts
            ),
            assembly.diagnostics.clamped_parts as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "within_outer",
            format!("{} parts outside: {}", outside.len(), first_offenders(&outside)),
            outside.len() as f64,
        )
    }
}

/// Front parts stay in the front half of the depth, back parts in the back
/// half. Hardware protrudes past the faces and is exempt.
pub fn check_depth_split(assembly: &Assembly) -> OracleVerdict {
    let half = assembly.depth / 2.0;
    let crossing: Vec<&Part> = assembly
        .parts
        .iter()
        .filter(|p| !p.kind.is_hardware())
        .filter(|p| match p.side {
            Side::Front => p.bounds.z_end() > half + TOL,
            Side::Back => p.bounds.z < half - TOL,
        })
        .collect();
    if crossing.is_empty() {
        OracleVerdict::pass("depth_split", format!("mid-plane at {:.2}", half))
    } else {
        OracleVerdict::fail(
            "depth_split",
            format!(
                "{} parts cross the mid-plane at {:.2}: {}",
                crossing.len(),
                half,
                first_offenders(&crossing)
            ),
        )
    }
}

// ── Composition Oracles ─────────────────────────────────────────────────────

/// Every part has a counterpart on the other side with the same footprint and
/// a mirrored depth span, and the link goes both ways.
pub fn check_counterparts(assembly: &Assembly) -> OracleVerdict {
    let front = assembly.parts_on(Side::Front).count();
    let back = assembly.parts_on(Side::Back).count();
    if front != back {
        return OracleVerdict::fail(
            "counterparts",
            format!("{} front parts vs {} back parts", front, back),
        );
    }

    let mut broken = Vec::new();
    for part in &assembly.parts {
        let ok = match assembly.counterpart(part) {
            Some(other) => {
                other.side == part.side.flipped()
                    && other.counterpart == Some(part.id)
                    && other.kind == part.kind
                    && other.bounds.rect.approx_eq(&part.bounds.rect, TOL)
                    && (other.bounds.z - (assembly.depth - part.bounds.z_end())).abs() < TOL
            }
            None => false,
        };
        if !ok {
            broken.push(part);
        }
    }

    if broken.is_empty() {
        OracleVerdict::pass("counterparts", format!("{} pairs linked", front))
    } else {
        OracleVerdict::fail(
            "counterparts",
            format!("{} broken links: {}", broken.len(), first_offenders(&broken)),
        )
    }
}

/// No back part binds the outside color; every other fill matches its front
/// counterpart.
pub fn check_side_binding(assembly: &Assembly) -> OracleVerdict {
    let mut wrong = Vec::new();
    for back in assembly.parts_on(Side::Back) {
        let Some(front) = assembly.counterpart(back) else {
            continue;
        };
        let expected = match front.fill.color_role() {
            Some(role) => back.fill.color_role() == Some(role.mirrored()),
            None => back.fill == front.fill,
        };
        if !expected || back.fill.color_role() == Some(ColorRole::Outside) {
            wrong.push(back);
        }
    }
    if wrong.is_empty() {
        OracleVerdict::pass("side_binding", "back side binds inside colors".into())
    } else {
        OracleVerdict::fail(
            "side_binding",
            format!("{} back parts misbound: {}", wrong.len(), first_offenders(&wrong)),
        )
    }
}

// ── Rule Oracles ────────────────────────────────────────────────────────────

/// At most one opening indicator per side. Windows carry three pieces of
/// hardware when an indicator is present and none otherwise; doors always
/// carry three and never an indicator.
pub fn check_operable_hardware(assembly: &Assembly) -> OracleVerdict {
    let indicators = assembly.count(Side::Front, |k| matches!(k, PartKind::Indicator { .. }));
    let hardware = assembly.count(Side::Front, PartKind::is_hardware);
    let expected_hw = match assembly.product {
        ResolvedProduct::Door => (indicators == 0).then_some(3),
        ResolvedProduct::Window { .. } => match indicators {
            0 => Some(0),
            1 => Some(3),
            _ => None,
        },
    };
    if expected_hw == Some(hardware) {
        OracleVerdict::pass_val(
            "operable_hardware",
            format!("{} indicator(s), {} hardware", indicators, hardware),
            hardware as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "operable_hardware",
            format!(
                "{} indicator(s) with {} hardware on {:?}",
                indicators, hardware, assembly.product
            ),
            hardware as f64,
        )
    }
}

/// Every window leaf carries `expected` glazing lines on each side.
pub fn check_glazing_lines(assembly: &Assembly, expected: usize) -> OracleVerdict {
    let mut wrong = Vec::new();
    for side in [Side::Front, Side::Back] {
        for leaf in assembly.leaves(side) {
            let Some(index) = leaf.leaf_index() else {
                continue;
            };
            let lines = assembly
                .leaf_parts(side, index)
                .iter()
                .filter(|p| matches!(p.kind, PartKind::GlazingLine { .. }))
                .count();
            if lines != expected {
                wrong.push(format!("leaf {} {:?}: {} lines", index, side, lines));
            }
        }
    }
    if wrong.is_empty() {
        OracleVerdict::pass_val(
            "glazing_lines",
            format!("{} lines per leaf", expected),
            expected as f64,
        )
    } else {
        OracleVerdict::fail("glazing_lines", format!("expected {}: {}", expected, wrong.join(", ")))
    }
}

/// Run every oracle that needs nothing but the assembly.
pub fn run_all(assembly: &Assembly) -> Vec<OracleVerdict> {
    vec![
        check_footprint(assembly),
        check_within_outer(assembly),
        check_depth_split(assembly),
        check_counterparts(assembly),
        check_side_binding(assembly),
        check_operable_hardware(assembly),
    ]
}

/// Run every oracle and fail on the first failed verdict.
pub fn verify(assembly: &Assembly) -> Result<(), HarnessError> {
    run_all(assembly)
        .into_iter()
        .try_for_each(OracleVerdict::into_result)
}
