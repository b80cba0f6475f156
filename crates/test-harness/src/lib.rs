//! Test harness for configurator development.
//!
//! Provides programmatic tools for scripting configurations, verifying the
//! assembled part list against its laws, and generating diagnostic output.
//!
//! # Key Components
//!
//! - [`ConfigBuilder`]: Fluent API for building configurations
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text assembly descriptions
//! - [`helpers`]: Error type, sample configurations, part lookups
//! - [`assertions`]: Rich assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;

pub use helpers::{ConfigBuilder, HarnessError};
pub use oracle::OracleVerdict;
pub use report::AssemblyReport;
