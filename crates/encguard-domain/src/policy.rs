use crate::exclude::ExcludeList;
use thiserror::Error;

/// Malformed rule configuration. Surfaced at rule construction, never
/// partway through a traversal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("exclusion entry {index} is blank; resource ids are never empty")]
    BlankExclusion { index: usize },
}

/// Construction options shared by every rule.
///
/// The one recognized option is the exclusion list. Use a resource's id to
/// exclude a specific resource; an id matches either the node itself or the
/// wrapper construct that contains it.
#[derive(Clone, Debug, Default)]
pub struct RuleOptions {
    pub exclude_resources: Vec<String>,
}

impl RuleOptions {
    pub fn exclude<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude_resources: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Validates the exclusion entries and freezes them into a rule's
    /// [`ExcludeList`]. A blank id could never match a node and indicates a
    /// truncated or mis-templated configuration.
    pub fn build_exclusions(&self) -> Result<ExcludeList, ConfigError> {
        for (index, id) in self.exclude_resources.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(ConfigError::BlankExclusion { index });
            }
        }
        Ok(ExcludeList::new(self.exclude_resources.clone()))
    }
}
