use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Score penalty applied per flag of this severity.
    pub fn penalty(&self) -> u32 {
        match self {
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::High => "🔴",
            Severity::Medium => "🟡",
            Severity::Low => "🔵",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Supply,
    AccessControl,
    Upgradeability,
    FeeManipulation,
    Ownership,
    BytecodeCapability,
}

/// One structured finding: a specific risky construct detected in a contract.
///
/// Immutable once created. A scan produces at most one flag per catalog rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flag {
    pub text: String,
    pub category: Category,
    pub severity: Severity,
}

impl Flag {
    pub fn new(severity: Severity, category: Category, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
            severity,
        }
    }

    /// Legacy plain-string form for consumers that predate structured flags.
    pub fn as_legacy(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity.emoji(), self.text)
    }
}
