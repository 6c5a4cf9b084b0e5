use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical construct path of a node in the resource tree: the ids along
/// the parent chain from the root, joined with `/`.
///
/// Normalization rules are intentionally simple and deterministic:
/// - segments joined with forward slashes (`/`)
/// - always starts with `/`
/// - no trailing slash except for the bare root
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct NodePath(String);

impl Default for NodePath {
    fn default() -> Self {
        NodePath::root()
    }
}

impl NodePath {
    /// The path of a tree root: `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let raw = s.as_ref();
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return NodePath::root();
        }
        Self(format!("/{trimmed}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, segment: &str) -> NodePath {
        if self.0 == "/" {
            NodePath::new(segment)
        } else {
            NodePath::new(format!("{}/{}", self.0, segment))
        }
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
