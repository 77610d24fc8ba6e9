use super::flag::Flag;
use serde::{Deserialize, Serialize};

/// Result envelope for one scan. Created once per invocation; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub address: String,
    pub name: String,
    pub compiler: String,
    pub is_verified: bool,
    pub flags: Vec<Flag>,
    pub score: u8,
}

impl ScanResult {
    /// Flags in the legacy plain-string shape expected by older consumers.
    pub fn legacy_flags(&self) -> Vec<String> {
        self.flags.iter().map(|f| f.as_legacy().to_string()).collect()
    }

    pub fn risk_label(&self) -> &'static str {
        match self.score {
            80..=100 => "LOW RISK",
            50..=79 => "MEDIUM RISK",
            _ => "HIGH RISK",
        }
    }
}

impl std::fmt::Display for ScanResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f, "                CONTRACT SCAN REPORT")?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;
        writeln!(f)?;
        writeln!(f, "Address:  {}", self.address)?;
        writeln!(
            f,
            "Contract: {} ({})",
            if self.name.is_empty() { "<unknown>" } else { &self.name },
            if self.is_verified { "verified" } else { "unverified" }
        )?;
        if !self.compiler.is_empty() {
            writeln!(f, "Compiler: {}", self.compiler)?;
        }
        writeln!(f)?;
        writeln!(f, "Risk Score: {}/100 ({})", self.score, self.risk_label())?;

        if self.flags.is_empty() {
            writeln!(f)?;
            writeln!(f, "✅ No known red flags found.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "═══ RED FLAGS ═══")?;
            for flag in &self.flags {
                writeln!(f, "{}", flag)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "═══════════════════════════════════════════════════════════")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Severity};

    fn sample() -> ScanResult {
        ScanResult {
            address: "0xA1077a294dDE1B09bB078844df40758a5D0f9a27".into(),
            name: "WPLS".into(),
            compiler: "v0.5.16".into(),
            is_verified: true,
            flags: vec![Flag::new(
                Severity::Medium,
                Category::Ownership,
                "onlyOwner — centralized control",
            )],
            score: 90,
        }
    }

    #[test]
    fn test_report_contains_score_and_flags() {
        let report = sample().to_string();
        assert!(report.contains("Risk Score: 90/100"));
        assert!(report.contains("onlyOwner"));
    }

    #[test]
    fn test_risk_labels() {
        let mut result = sample();
        result.score = 95;
        assert_eq!(result.risk_label(), "LOW RISK");
        result.score = 60;
        assert_eq!(result.risk_label(), "MEDIUM RISK");
        result.score = 20;
        assert_eq!(result.risk_label(), "HIGH RISK");
    }

    #[test]
    fn test_legacy_flags_are_plain_strings() {
        let result = sample();
        assert_eq!(result.legacy_flags(), vec!["onlyOwner — centralized control"]);
    }

    #[test]
    fn test_clean_report_when_no_flags() {
        let mut result = sample();
        result.flags.clear();
        result.score = 100;
        let report = result.to_string();
        assert!(report.contains("No known red flags"));
    }
}
