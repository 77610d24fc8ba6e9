use serde::{Deserialize, Serialize};

/// Verified-source record returned by the block explorer for one address.
///
/// An unverified contract still yields a record; its `source_code` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractSource {
    pub contract_name: String,
    pub compiler_version: String,
    pub source_code: String,
}

impl ContractSource {
    pub fn is_verified(&self) -> bool {
        !self.source_code.is_empty()
    }
}
