//! Structured text reports of an assembly.
//!
//! Reports are plain text rather than JSON so that a failing test prints
//! something a person can scan. [`snapshot_json`] covers the machine-readable
//! case.

use std::collections::BTreeMap;
use std::fmt;

use assembly_engine::Assembly;
use sash_types::{ColorRole, Side};

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};

/// Part counts and verdicts for one assembly.
pub struct AssemblyReport {
    pub product: String,
    pub footprint: (f64, f64),
    pub depth: f64,
    /// Part kind name to (front, back) count.
    pub kind_counts: BTreeMap<&'static str, (usize, usize)>,
    pub palette: Vec<(ColorRole, String)>,
    pub oracle_results: Vec<OracleVerdict>,
    pub warnings: Vec<String>,
    pub clamped_parts: usize,
}

impl AssemblyReport {
    pub fn from_assembly(assembly: &Assembly) -> Self {
        let mut kind_counts: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
        for part in &assembly.parts {
            let entry = kind_counts.entry(part.kind.name()).or_default();
            match part.side {
                Side::Front => entry.0 += 1,
                Side::Back => entry.1 += 1,
            }
        }
        let palette = ColorRole::ALL
            .iter()
            .map(|&role| {
                let c = assembly.palette.get(role);
                (role, format!("{} {}", c.id, c.value.to_hex()))
            })
            .collect();

        Self {
            product: format!("{:?} / {:?}", assembly.product, assembly.frame_thickness),
            footprint: (assembly.footprint.width, assembly.footprint.height),
            depth: assembly.depth,
            kind_counts,
            palette,
            oracle_results: oracle::run_all(assembly),
            warnings: assembly.diagnostics.warnings.clone(),
            clamped_parts: assembly.diagnostics.clamped_parts,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.oracle_results.iter().all(|v| v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Assembly Report ===\n\n");
        out.push_str(&format!("Product: {}\n", self.product));
        out.push_str(&format!(
            "Footprint: {:.1} x {:.1}, depth {:.1}\n",
            self.footprint.0, self.footprint.1, self.depth
        ));

        out.push_str("\nPalette:\n");
        for (role, color) in &self.palette {
            out.push_str(&format!("  {:?}: {}\n", role, color));
        }

        let (front, back) = self
            .kind_counts
            .values()
            .fold((0, 0), |(f, b), (cf, cb)| (f + cf, b + cb));
        out.push_str(&format!("\nParts ({} front, {} back):\n", front, back));
        for (name, (f, b)) in &self.kind_counts {
            out.push_str(&format!("  {}: {} / {}\n", name, f, b));
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        if self.clamped_parts > 0 {
            out.push_str(&format!("\nClamped parts: {}\n", self.clamped_parts));
        }
        if self.warnings.is_empty() {
            out.push_str("\nWarnings: none\n");
        } else {
            out.push_str(&format!("\nWarnings ({}):\n", self.warnings.len()));
            for w in &self.warnings {
                out.push_str(&format!("  {}\n", w));
            }
        }
        out
    }
}

impl fmt::Display for AssemblyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Pretty JSON of the whole assembly, for golden-file comparisons.
pub fn snapshot_json(assembly: &Assembly) -> Result<String, HarnessError> {
    Ok(serde_json::to_string_pretty(assembly)?)
}

/// Parse a snapshot written by [`snapshot_json`].
pub fn load_snapshot(json: &str) -> Result<Assembly, HarnessError> {
    Ok(serde_json::from_str(json)?)
}
