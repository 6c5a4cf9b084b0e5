//! Pure encryption-compliance evaluation (no IO).
//!
//! Input: a resource tree constructed by the host declaration system.
//! Output: error-severity diagnostics attached to offending nodes, plus a
//! pass/fail verdict. The engine never mutates the tree and never aborts a
//! traversal on a violation.

#![forbid(unsafe_code)]

pub mod exclude;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod test_support;

pub use engine::{apply, enforce};
