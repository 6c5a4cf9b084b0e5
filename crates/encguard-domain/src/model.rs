use encguard_types::NodePath;
use std::collections::BTreeMap;
use thiserror::Error;

/// A declared property value on a resource node.
///
/// `Token` models a deploy-time intrinsic the host could not statically
/// resolve; it never proves anything about the deployed value. Absence of a
/// property is represented by the map not containing the key — "unset" is
/// distinct from `Bool(false)`, and both are non-compliant for the checked
/// encryption properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    Bool(bool),
    Str(String),
    Token(String),
}

impl PropertyValue {
    /// True only for a statically-known boolean true. Strings and tokens
    /// never prove encryption.
    pub fn is_true(&self) -> bool {
        matches!(self, PropertyValue::Bool(true))
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("duplicate child id '{id}' under '{parent}'")]
    DuplicateChildId { parent: String, id: String },
}

/// Opaque handle into a [`ResourceTree`] arena. Only valid for the tree
/// that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct NodeData {
    id: String,
    type_tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    properties: BTreeMap<String, PropertyValue>,
}

/// Arena-owned tree of declared infrastructure resources.
///
/// The engine only ever reads through [`NodeRef`] views; construction is the
/// host's job and finishes before any rule runs. `id` and `type_tag` are
/// immutable after insertion, children keep declaration order.
#[derive(Clone, Debug)]
pub struct ResourceTree {
    nodes: Vec<NodeData>,
}

impl ResourceTree {
    pub fn new(root_id: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![NodeData {
                id: root_id.into(),
                type_tag: type_tag.into(),
                parent: None,
                children: Vec::new(),
                properties: BTreeMap::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child under `parent`. Sibling ids must be unique.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        id: impl Into<String>,
        type_tag: impl Into<String>,
        properties: BTreeMap<String, PropertyValue>,
    ) -> Result<NodeId, ModelError> {
        let id = id.into();
        let siblings = &self.nodes[parent.0].children;
        if siblings.iter().any(|&c| self.nodes[c.0].id == id) {
            return Err(ModelError::DuplicateChildId {
                parent: self.nodes[parent.0].id.clone(),
                id,
            });
        }

        let child = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            id,
            type_tag: type_tag.into(),
            parent: Some(parent),
            children: Vec::new(),
            properties,
        });
        self.nodes[parent.0].children.push(child);
        Ok(child)
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Read-only view of one node. Cheap to copy; borrows the tree.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a ResourceTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    pub fn handle(&self) -> NodeId {
        self.id
    }

    pub fn id(&self) -> &'a str {
        &self.data().id
    }

    pub fn type_tag(&self) -> &'a str {
        &self.data().type_tag
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|p| self.tree.node(p))
    }

    pub fn property(&self, name: &str) -> Option<&'a PropertyValue> {
        self.data().properties.get(name)
    }

    /// Children in declaration order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        self.data().children.iter().map(move |&c| tree.node(c))
    }

    /// Construct path: ids along the parent chain from the root, including
    /// the root's own id.
    pub fn path(&self) -> NodePath {
        let mut segments = Vec::new();
        let mut cursor = Some(*self);
        while let Some(node) = cursor {
            segments.push(node.id());
            cursor = node.parent();
        }
        segments
            .iter()
            .rev()
            .fold(NodePath::root(), |path, segment| path.join(segment))
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("path", &self.path())
            .field("type_tag", &self.type_tag())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, PropertyValue)]) -> BTreeMap<String, PropertyValue> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn rejects_duplicate_sibling_ids() {
        let mut tree = ResourceTree::new("Stack", "stack");
        let root = tree.root();
        tree.add_child(root, "Db", "database-instance", BTreeMap::new())
            .unwrap();
        let err = tree
            .add_child(root, "Db", "database-cluster", BTreeMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateChildId {
                parent: "Stack".to_string(),
                id: "Db".to_string(),
            }
        );
    }

    #[test]
    fn same_id_allowed_under_different_parents() {
        let mut tree = ResourceTree::new("Stack", "stack");
        let a = tree
            .add_child(tree.root(), "A", "wrapper", BTreeMap::new())
            .unwrap();
        let b = tree
            .add_child(tree.root(), "B", "wrapper", BTreeMap::new())
            .unwrap();
        tree.add_child(a, "Resource", "managed-filesystem", BTreeMap::new())
            .unwrap();
        tree.add_child(b, "Resource", "managed-filesystem", BTreeMap::new())
            .unwrap();
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn children_keep_declaration_order() {
        let mut tree = ResourceTree::new("Stack", "stack");
        let root = tree.root();
        for id in ["First", "Second", "Third"] {
            tree.add_child(root, id, "wrapper", BTreeMap::new()).unwrap();
        }
        let ids: Vec<&str> = tree.node(root).children().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn path_is_derived_from_parent_chain() {
        let mut tree = ResourceTree::new("Stack", "stack");
        let wrapper = tree
            .add_child(tree.root(), "Fs", "wrapper", BTreeMap::new())
            .unwrap();
        let raw = tree
            .add_child(wrapper, "Resource", "managed-filesystem", BTreeMap::new())
            .unwrap();
        assert_eq!(tree.node(raw).path().as_str(), "/Stack/Fs/Resource");
        assert_eq!(tree.node(tree.root()).path().as_str(), "/Stack");
        assert!(tree.node(tree.root()).parent().is_none());
    }

    #[test]
    fn only_bool_true_is_true() {
        assert!(PropertyValue::Bool(true).is_true());
        assert!(!PropertyValue::Bool(false).is_true());
        assert!(!PropertyValue::Str("true".to_string()).is_true());
        assert!(!PropertyValue::Token("ref-123".to_string()).is_true());
    }

    #[test]
    fn property_lookup_distinguishes_unset_from_false() {
        let mut tree = ResourceTree::new("Stack", "stack");
        let node = tree
            .add_child(
                tree.root(),
                "Fs",
                "managed-filesystem",
                props(&[("encrypted", PropertyValue::Bool(false))]),
            )
            .unwrap();
        let node = tree.node(node);
        assert_eq!(node.property("encrypted"), Some(&PropertyValue::Bool(false)));
        assert_eq!(node.property("storageEncrypted"), None);
    }
}
