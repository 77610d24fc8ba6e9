use crate::catalog::{PatternCatalog, STANDARD_PROLOGUE, UNVERIFIED_BYTECODE_THRESHOLD};
use crate::models::{Category, Flag, Severity};

/// Applies the pattern catalog to contract source and bytecode text.
///
/// Pure and stateless: identical inputs always yield the identical ordered
/// flag list. Safe to share across concurrent scans.
pub struct FlagExtractor {
    catalog: PatternCatalog,
}

impl FlagExtractor {
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::new(),
        }
    }

    /// Extract all flags for one scan.
    ///
    /// Ordering is deterministic: source rules in catalog order, then bytecode
    /// rules in catalog order, then the unverified-bytecode heuristic. Each
    /// rule contributes at most one flag, however many times its pattern
    /// occurs. A construct present on both surfaces yields two distinct flags;
    /// they are different evidence and are not deduplicated.
    ///
    /// Empty inputs are not an error: they simply produce no flags.
    pub fn extract(&self, source_text: &str, bytecode_text: &str, is_verified: bool) -> Vec<Flag> {
        let mut flags = Vec::new();

        for rule in self.catalog.source_rules() {
            if rule.matches(source_text) {
                flags.push(Flag::new(rule.severity, rule.category, rule.label));
            }
        }

        for rule in self.catalog.bytecode_rules() {
            if rule.matches(bytecode_text) {
                flags.push(Flag::new(rule.severity, rule.category, rule.label));
            }
        }

        if self.is_suspicious_unverified(bytecode_text, is_verified) {
            flags.push(Flag::new(
                Severity::Medium,
                Category::BytecodeCapability,
                "unverified contract with large bytecode — source may be deliberately hidden",
            ));
        }

        tracing::debug!(
            flag_count = flags.len(),
            source_len = source_text.len(),
            bytecode_len = bytecode_text.len(),
            "flag extraction complete"
        );

        flags
    }

    // Large deployed bytecode behind an unverified address, with the standard
    // solc prologue, suggests a real contract whose source is being withheld.
    fn is_suspicious_unverified(&self, bytecode_text: &str, is_verified: bool) -> bool {
        !is_verified
            && bytecode_text.len() > UNVERIFIED_BYTECODE_THRESHOLD
            && bytecode_text.starts_with(STANDARD_PROLOGUE)
    }
}

impl Default for FlagExtractor {
    fn default() -> Self {
        Self::new()
    }
}
