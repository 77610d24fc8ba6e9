pub mod extractor;
pub mod scorer;

pub use extractor::FlagExtractor;
pub use scorer::risk_score;
