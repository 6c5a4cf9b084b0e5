use super::{Rule, utils};
use crate::exclude::ExcludeList;
use crate::model::{NodeRef, PropertyValue};
use crate::policy::{ConfigError, RuleOptions};
use encguard_types::{Diagnostic, Severity, ids};
use serde_json::json;

/// Enforces encryption-at-rest on every managed filesystem in the tree.
#[derive(Clone, Debug)]
pub struct EncryptedFileSystem {
    exclusions: ExcludeList,
}

impl EncryptedFileSystem {
    pub fn new(options: &RuleOptions) -> Result<Self, ConfigError> {
        Ok(Self {
            exclusions: options.build_exclusions()?,
        })
    }
}

impl Rule for EncryptedFileSystem {
    fn id(&self) -> &'static str {
        ids::RULE_EFS_ENCRYPTED
    }

    fn exclusions(&self) -> &ExcludeList {
        &self.exclusions
    }

    fn matches(&self, node: NodeRef<'_>) -> bool {
        node.type_tag() == ids::TYPE_MANAGED_FILESYSTEM
    }

    fn check(&self, node: NodeRef<'_>) -> Option<Diagnostic> {
        let encrypted = node.property(ids::PROP_ENCRYPTED);
        // Absent, false, a string, or an unresolvable token: the filesystem
        // is not proven encrypted.
        if encrypted.is_some_and(PropertyValue::is_true) {
            return None;
        }

        Some(Diagnostic {
            severity: Severity::Error,
            rule_id: self.id().to_string(),
            code: ids::CODE_UNENCRYPTED_FILESYSTEM.to_string(),
            message: ids::MSG_UNENCRYPTED_FILESYSTEM.to_string(),
            path: node.path(),
            node_id: node.id().to_string(),
            data: json!({
                "property": ids::PROP_ENCRYPTED,
                "observed": utils::observed_value(encrypted),
            }),
        })
    }
}
