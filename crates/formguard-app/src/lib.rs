//! Use case orchestration for formguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It performs no IO; callers pass file contents in and write results out.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod config;
mod explain;
mod field;
mod render;
mod report;
mod submit;

pub use config::load_config;
pub use explain::{ExplainOutput, format_explain, run_explain};
pub use field::{FieldInput, FieldOutput, field_exit_code, run_field};
pub use render::{render_inline_errors, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use submit::{SubmitInput, SubmitOutput, parse_form_json, run_submit, verdict_exit_code};
