pub mod rules;

pub use rules::{
    Matcher, PatternCatalog, Rule, Surface, STANDARD_PROLOGUE, UNVERIFIED_BYTECODE_THRESHOLD,
};
