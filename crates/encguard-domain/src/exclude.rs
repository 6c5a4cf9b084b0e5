use crate::model::NodeRef;

/// Identifier-based opt-out from a rule, fixed at rule construction.
///
/// Matching is purely lexical: exact string equality against the node's own
/// id or its immediate parent's id. The parent check lets one configured id
/// cover both declaration styles — a raw resource referenced by its own id,
/// and a higher-level wrapper whose child carries a synthesized id while the
/// wrapper's id is the one a user would write.
#[derive(Clone, Debug, Default)]
pub struct ExcludeList {
    ids: Vec<String>,
}

impl ExcludeList {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_excluded(&self, node: NodeRef<'_>) -> bool {
        if self.contains(node.id()) {
            return true;
        }
        node.parent().is_some_and(|parent| self.contains(parent.id()))
    }

    fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|entry| entry == id)
    }
}
