use crate::NodePath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Severity is intentionally small: it maps cleanly to CI signals.
/// This engine only ever emits `Error`, but the type covers the full range
/// so host systems can fold in diagnostics from other sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One policy violation, attached to exactly one resource node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule_id: String,
    pub code: String,
    pub message: String,

    /// Construct path of the offending node, derived from its parent chain.
    pub path: NodePath,
    /// The offending node's own id (the last path segment).
    pub node_id: String,

    /// Rule-specific structured payload (kept open-ended for forward
    /// compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}
