pub mod contract;
pub mod flag;
pub mod report;

pub use contract::ContractSource;
pub use flag::{Category, Flag, Severity};
pub use report::ScanResult;
