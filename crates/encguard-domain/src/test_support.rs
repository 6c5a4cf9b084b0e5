use crate::model::{NodeId, PropertyValue, ResourceTree};
use crate::policy::RuleOptions;
use encguard_types::ids;
use std::collections::BTreeMap;

pub fn stack() -> ResourceTree {
    ResourceTree::new("TestStack", "stack")
}

pub fn props(entries: &[(&str, PropertyValue)]) -> BTreeMap<String, PropertyValue> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn resource(
    tree: &mut ResourceTree,
    parent: NodeId,
    id: &str,
    type_tag: &str,
    properties: BTreeMap<String, PropertyValue>,
) -> NodeId {
    tree.add_child(parent, id, type_tag, properties)
        .expect("test fixtures use unique sibling ids")
}

pub fn filesystem(
    tree: &mut ResourceTree,
    parent: NodeId,
    id: &str,
    encrypted: Option<PropertyValue>,
) -> NodeId {
    let mut properties = BTreeMap::new();
    if let Some(value) = encrypted {
        properties.insert(ids::PROP_ENCRYPTED.to_string(), value);
    }
    resource(tree, parent, id, ids::TYPE_MANAGED_FILESYSTEM, properties)
}

pub fn database_instance(
    tree: &mut ResourceTree,
    parent: NodeId,
    id: &str,
    storage_encrypted: Option<PropertyValue>,
) -> NodeId {
    let mut properties = BTreeMap::new();
    if let Some(value) = storage_encrypted {
        properties.insert(ids::PROP_STORAGE_ENCRYPTED.to_string(), value);
    }
    resource(tree, parent, id, ids::TYPE_DATABASE_INSTANCE, properties)
}

pub fn database_cluster(
    tree: &mut ResourceTree,
    parent: NodeId,
    id: &str,
    storage_encrypted: Option<PropertyValue>,
) -> NodeId {
    let mut properties = BTreeMap::new();
    if let Some(value) = storage_encrypted {
        properties.insert(ids::PROP_STORAGE_ENCRYPTED.to_string(), value);
    }
    resource(tree, parent, id, ids::TYPE_DATABASE_CLUSTER, properties)
}

/// A database instance owned by a cluster, associated through
/// `membership_prop` (`clusterIdentifier` or `sourceClusterIdentifier`).
pub fn cluster_member(
    tree: &mut ResourceTree,
    parent: NodeId,
    id: &str,
    membership_prop: &str,
    cluster_ref: &str,
    storage_encrypted: Option<PropertyValue>,
) -> NodeId {
    let mut properties = BTreeMap::new();
    properties.insert(
        membership_prop.to_string(),
        PropertyValue::Token(cluster_ref.to_string()),
    );
    if let Some(value) = storage_encrypted {
        properties.insert(ids::PROP_STORAGE_ENCRYPTED.to_string(), value);
    }
    resource(tree, parent, id, ids::TYPE_DATABASE_INSTANCE, properties)
}

pub fn options(exclude: &[&str]) -> RuleOptions {
    RuleOptions::exclude(exclude.iter().copied())
}
