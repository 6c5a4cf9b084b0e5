//! Stable identifiers for rules and diagnostic codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case
//! discriminator. Type tags and property names are the vocabulary of the
//! resource trees handed to the engine by the host declaration system.

// Rules
pub const RULE_EFS_ENCRYPTED: &str = "efs.encrypted";
pub const RULE_RDS_STORAGE_ENCRYPTED: &str = "rds.storage_encrypted";

// Codes: efs.encrypted
pub const CODE_UNENCRYPTED_FILESYSTEM: &str = "unencrypted_filesystem";

// Codes: rds.storage_encrypted
pub const CODE_UNENCRYPTED_DATABASE: &str = "unencrypted_database";

// Monitored resource type tags
pub const TYPE_MANAGED_FILESYSTEM: &str = "managed-filesystem";
pub const TYPE_DATABASE_INSTANCE: &str = "database-instance";
pub const TYPE_DATABASE_CLUSTER: &str = "database-cluster";

// Checked property names
pub const PROP_ENCRYPTED: &str = "encrypted";
pub const PROP_STORAGE_ENCRYPTED: &str = "storageEncrypted";

// Cluster-membership property names (presence suppresses the RDS rule)
pub const PROP_CLUSTER_IDENTIFIER: &str = "clusterIdentifier";
pub const PROP_SOURCE_CLUSTER_IDENTIFIER: &str = "sourceClusterIdentifier";

// Diagnostic messages. These exact strings are part of the external
// contract: tests and downstream tooling match on the literal text.
pub const MSG_UNENCRYPTED_FILESYSTEM: &str =
    "EFS FileSystem must be encrypted. Please set the 'encrypted' property to true.";
pub const MSG_UNENCRYPTED_DATABASE: &str =
    "RDS database must have storage encryption enabled. Please set the 'storageEncrypted' property to true.";
