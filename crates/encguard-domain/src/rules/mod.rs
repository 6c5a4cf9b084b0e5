use crate::exclude::ExcludeList;
use crate::model::NodeRef;
use crate::policy::{ConfigError, RuleOptions};
use encguard_types::Diagnostic;

mod encrypted_database;
mod encrypted_filesystem;
mod utils;


pub use encrypted_database::EncryptedDatabase;
pub use encrypted_filesystem::EncryptedFileSystem;

/// A type-scoped compliance predicate plus exclusion configuration.
///
/// The engine owns traversal; a rule only answers questions about one node
/// at a time. Per node the engine asks, in order: `matches`, `suppressed`,
/// the exclusion list, `check`. Rules hold no state beyond their exclusion
/// list and never see the tree as a whole.
pub trait Rule: Send + Sync {
    /// Stable rule identifier (see [`encguard_types::ids`]).
    fn id(&self) -> &'static str;

    /// The exclusion list this rule was constructed with.
    fn exclusions(&self) -> &ExcludeList;

    /// Type predicate: does this rule apply to the node's kind at all?
    fn matches(&self, node: NodeRef<'_>) -> bool;

    /// Pre-check for nodes whose checked state is inherited from an owning
    /// parent resource. A suppressed node is never evaluated or reported,
    /// independent of the exclusion list.
    fn suppressed(&self, _node: NodeRef<'_>) -> bool {
        false
    }

    /// Compliance predicate. `Some` is a violation diagnostic for `node`.
    fn check(&self, node: NodeRef<'_>) -> Option<Diagnostic>;
}

/// The default rule set in application order (filesystem, then database),
/// every rule sharing the same exclusion list.
pub fn default_rules(options: &RuleOptions) -> Result<Vec<Box<dyn Rule>>, ConfigError> {
    Ok(vec![
        Box::new(EncryptedFileSystem::new(options)?),
        Box::new(EncryptedDatabase::new(options)?),
    ])
}
