pub mod analyzers;
pub mod cache;
pub mod catalog;
pub mod core;
pub mod explain;
pub mod explorer;
pub mod models;
pub mod utils;

pub use analyzers::{risk_score, FlagExtractor};
pub use catalog::PatternCatalog;
pub use crate::core::ContractScanner;
pub use explain::{Audience, Explanation, ExplanationRequester};
pub use explorer::ExplorerClient;
pub use models::{Category, ContractSource, Flag, ScanResult, Severity};
pub use utils::{Result, ScannerError};
