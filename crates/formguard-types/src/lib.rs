//! Stable DTOs and IDs used across the formguard workspace.
//!
//! This crate is intentionally boring:
//! - the per-field `ValidationResult` handed to presentation layers
//! - data types for the emitted submission report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    FieldReport, Finding, FormguardData, FormguardReport, ReportEnvelope, SCHEMA_REPORT_V1,
    ToolMeta, ValidationResult, Verdict,
};
