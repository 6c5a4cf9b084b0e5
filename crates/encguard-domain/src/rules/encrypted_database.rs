use super::{Rule, utils};
use crate::exclude::ExcludeList;
use crate::model::{NodeRef, PropertyValue};
use crate::policy::{ConfigError, RuleOptions};
use encguard_types::{Diagnostic, Severity, ids};
use serde_json::json;

/// Enforces storage encryption on relational databases, covering both
/// single instances and clusters.
#[derive(Clone, Debug)]
pub struct EncryptedDatabase {
    exclusions: ExcludeList,
}

impl EncryptedDatabase {
    pub fn new(options: &RuleOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            exclusions: options.build_exclusions()?,
        })
    }
}

impl Rule for EncryptedDatabase {
    fn id(&self) -> &'static str {
        ids::RULE_RDS_STORAGE_ENCRYPTED
    }

    fn exclusions(&self) -> &ExcludeList {
        &self.exclusions
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        let tag = node.type_tag();
        tag == ids::TYPE_DATABASE_INSTANCE || tag == ids::TYPE_DATABASE_CLUSTER
    }

    /// An instance carrying a cluster membership property inherits its
    /// encryption state from the owning cluster. Some representations of a
    /// member expose no `storageEncrypted` at all, and the platform rejects
    /// a member value that disagrees with the cluster, so checking the
    /// cluster node is sufficient. Never evaluated, never reported.
    fn suppressed(&self, node: NodeRef<'_>) -> bool {
        node.property(ids::PROP_CLUSTER_IDENTIFIER).is_some()
            || node.property(ids::PROP_SOURCE_CLUSTER_IDENTIFIER).is_some()
    }

    fn check(&self, node: NodeRef<'_>) -> Option<Diagnostic> {
        // Works uniformly for instances and clusters.
        let encrypted = node.property(ids::PROP_STORAGE_ENCRYPTED);
        if encrypted.is_some_and(PropertyValue::is_true) {
            return None;
        }

        Some(Diagnostic {
            severity: Severity::Error,
            rule_id: self.id().to_string(),
            code: ids::CODE_UNENCRYPTED_DATABASE.to_string(),
            message: ids::MSG_UNENCRYPTED_DATABASE.to_string(),
            path: node.path(),
            node_id: node.id().to_string(),
            data: json!({
                "property": ids::PROP_STORAGE_ENCRYPTED,
                "observed": utils::observed_value(encrypted),
            }),
        })
    }
}
