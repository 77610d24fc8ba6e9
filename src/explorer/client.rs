use std::time::Duration;

use ethers::types::Address;
use reqwest::Client;
use serde::Deserialize;

use crate::models::ContractSource;
use crate::utils::{Result, ScannerError};

const DEFAULT_BASE_URL: &str = "https://api.etherscan.io/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Etherscan-compatible block-explorer API client.
///
/// Both endpoints are idempotent reads; callers may retry freely.
pub struct ExplorerClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to build HTTP client with timeout, using default");
                Client::new()
            });

        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point at a different Etherscan-compatible API (e.g. a testnet explorer).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the verified-source record for an address.
    ///
    /// An unverified contract is not an error; it comes back with an empty
    /// `source_code`.
    pub async fn get_source(&self, address: Address) -> Result<ContractSource> {
        tracing::debug!(address = ?address, "fetching verified source");

        let url = format!(
            "{}?module=contract&action=getsourcecode&address={:?}&apikey={}",
            self.base_url, address, self.api_key
        );

        let envelope: SourceEnvelope = self.http.get(&url).send().await?.json().await?;

        if envelope.status != "1" {
            return Err(ScannerError::ExplorerError(format!(
                "getsourcecode failed: {}",
                envelope.message
            )));
        }

        let record = envelope
            .result
            .into_iter()
            .next()
            .ok_or_else(|| ScannerError::ContractNotFound(format!("{:?}", address)))?;

        Ok(ContractSource {
            contract_name: record.contract_name,
            compiler_version: record.compiler_version,
            source_code: record.source_code,
        })
    }

    /// Fetch deployed bytecode as a raw `0x…` hex string.
    ///
    /// Returns `"0x"` for addresses with no code; the caller decides what an
    /// empty surface means.
    pub async fn get_bytecode(&self, address: Address) -> Result<String> {
        tracing::debug!(address = ?address, "fetching bytecode");

        let url = format!(
            "{}?module=proxy&action=eth_getCode&address={:?}&apikey={}",
            self.base_url, address, self.api_key
        );

        let envelope: CodeEnvelope = self.http.get(&url).send().await?.json().await?;

        Ok(envelope.result.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct SourceEnvelope {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Vec<SourceRecord>,
}

#[derive(Debug, Deserialize)]
struct SourceRecord {
    #[serde(rename = "SourceCode", default)]
    source_code: String,
    #[serde(rename = "ContractName", default)]
    contract_name: String,
    #[serde(rename = "CompilerVersion", default)]
    compiler_version: String,
}

#[derive(Debug, Deserialize)]
struct CodeEnvelope {
    #[serde(default)]
    result: Option<String>,
}
