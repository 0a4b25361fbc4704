//! Configuration for the coupons module.

use serde::{Deserialize, Serialize};

/// Storage backend used for coupons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Process-local table, discarded on shutdown.
    #[default]
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CouponsConfig {
    pub storage: StorageBackend,
}
