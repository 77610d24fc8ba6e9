pub mod scanner;

pub use scanner::ContractScanner;
