use ethers::types::Address;

use crate::analyzers::{risk_score, FlagExtractor};
use crate::explorer::ExplorerClient;
use crate::models::ScanResult;
use crate::utils::Result;

/// Scan orchestrator: fetches a contract's source and bytecode from the block
/// explorer, runs the flag extractor over both surfaces, and scores the result.
///
/// Stateless per scan; one instance can serve concurrent scans.
pub struct ContractScanner {
    explorer: ExplorerClient,
    extractor: FlagExtractor,
}

impl ContractScanner {
    pub fn new(explorer: ExplorerClient) -> Self {
        Self {
            explorer,
            extractor: FlagExtractor::new(),
        }
    }

    pub async fn scan(&self, address: Address) -> Result<ScanResult> {
        tracing::info!(address = ?address, "starting scan");

        let source = self.explorer.get_source(address).await?;
        let bytecode = self.explorer.get_bytecode(address).await?;
        let is_verified = source.is_verified();

        tracing::info!(
            verified = is_verified,
            source_len = source.source_code.len(),
            bytecode_len = bytecode.len(),
            "contract fetched"
        );

        let flags = self
            .extractor
            .extract(&source.source_code, &bytecode, is_verified);
        let score = risk_score(&flags);

        tracing::info!(flag_count = flags.len(), score, "scan complete");

        Ok(ScanResult {
            address: format!("{:?}", address),
            name: source.contract_name,
            compiler: source.compiler_version,
            is_verified,
            flags,
            score,
        })
    }
}
