//! Stable DTOs and IDs used across the encguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted diagnostics and reports
//! - stable string IDs, codes, and monitored type tags
//! - the verbatim diagnostic messages downstream tooling matches on
//! - canonical construct-path handling

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod ids;
pub mod path;

pub use diagnostic::{Diagnostic, Severity, Verdict};
pub use path::NodePath;
