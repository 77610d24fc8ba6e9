use crate::models::{Category, Severity};
use regex::{Regex, RegexBuilder};

/// Which contract surface a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Verified Solidity source text. Identifier matches are high-confidence.
    Source,
    /// Raw deployed bytecode as a hex string. Substring matches here are weak,
    /// corroborating evidence only; they are not opcode-decoded.
    Bytecode,
}

/// Predicate over contract text. Guaranteed not to panic on any input,
/// including truncated or binary-looking text.
pub enum Matcher {
    Contains(&'static str),
    ContainsNoCase(&'static str),
    Pattern(Regex),
    AllOf(Vec<Matcher>),
    AnyOf(Vec<Matcher>),
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Contains(needle) => text.contains(needle),
            Matcher::ContainsNoCase(needle) => {
                text.to_ascii_lowercase().contains(needle)
            }
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::AllOf(inner) => inner.iter().all(|m| m.matches(text)),
            Matcher::AnyOf(inner) => inner.iter().any(|m| m.matches(text)),
        }
    }
}

fn pattern(source: &str) -> Matcher {
    Matcher::Pattern(Regex::new(source).expect("static rule pattern"))
}

fn pattern_nocase(source: &str) -> Matcher {
    Matcher::Pattern(
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .expect("static rule pattern"),
    )
}

/// One detection rule. The catalog is fixed at construction and never mutated.
pub struct Rule {
    pub id: &'static str,
    pub surface: Surface,
    pub category: Category,
    pub severity: Severity,
    pub label: &'static str,
    matcher: Matcher,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }
}

/// Bytecode length above which an unverified contract is considered
/// suspiciously large.
pub const UNVERIFIED_BYTECODE_THRESHOLD: usize = 10_000;

/// Standard solc contract prologue (PUSH1 0x80 PUSH1 0x40).
pub const STANDARD_PROLOGUE: &str = "0x6080";

/// Fixed, versioned catalog of detection rules, partitioned by surface.
///
/// Source rules come first in output ordering, then bytecode rules, each in
/// declaration order.
pub struct PatternCatalog {
    source: Vec<Rule>,
    bytecode: Vec<Rule>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self {
            source: source_rules(),
            bytecode: bytecode_rules(),
        }
    }

    pub fn source_rules(&self) -> &[Rule] {
        &self.source
    }

    pub fn bytecode_rules(&self) -> &[Rule] {
        &self.bytecode
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn source_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "source-mint",
            surface: Surface::Source,
            category: Category::Supply,
            severity: Severity::High,
            label: "mint() present — token supply can be inflated",
            matcher: pattern(r"function\s+mint"),
        },
        Rule {
            id: "source-blacklist",
            surface: Surface::Source,
            category: Category::AccessControl,
            severity: Severity::High,
            label: "blacklist() present — owner can block specific addresses",
            matcher: Matcher::Contains("blacklist"),
        },
        Rule {
            id: "source-set-fees",
            surface: Surface::Source,
            category: Category::FeeManipulation,
            severity: Severity::Medium,
            label: "setFees() present — trading fees are adjustable after launch",
            matcher: Matcher::Contains("setFees"),
        },
        Rule {
            id: "source-tx-origin",
            surface: Surface::Source,
            category: Category::AccessControl,
            severity: Severity::High,
            label: "tx.origin used for authentication — phishing-prone",
            matcher: Matcher::Contains("tx.origin"),
        },
        Rule {
            id: "source-approve-restriction",
            surface: Surface::Source,
            category: Category::AccessControl,
            severity: Severity::High,
            label: "approve() combined with sender restrictions — hidden transfer limits",
            matcher: Matcher::AllOf(vec![
                Matcher::Contains("approve"),
                pattern(r"require\(msg\.sender\s*!="),
            ]),
        },
        Rule {
            id: "source-extreme-fee",
            surface: Surface::Source,
            category: Category::FeeManipulation,
            severity: Severity::High,
            label: "buy/sell fee above 99% — likely honeypot",
            matcher: pattern(r"(sellFee|buyFee)\s*>\s*99"),
        },
        Rule {
            id: "source-proxy",
            surface: Surface::Source,
            category: Category::Upgradeability,
            severity: Severity::Medium,
            label: "proxy/upgrade indicators — contract logic can be swapped after deployment",
            matcher: Matcher::AnyOf(vec![
                Matcher::ContainsNoCase("delegatecall"),
                Matcher::ContainsNoCase("implementation"),
                Matcher::ContainsNoCase("upgradeto"),
                Matcher::ContainsNoCase("proxyadmin"),
                pattern_nocase(r"function\s+upgrade"),
            ]),
        },
        Rule {
            id: "source-only-owner",
            surface: Surface::Source,
            category: Category::Ownership,
            severity: Severity::Medium,
            label: "onlyOwner — centralized control",
            matcher: Matcher::Contains("onlyOwner"),
        },
        Rule {
            id: "source-renounce-ownership",
            surface: Surface::Source,
            category: Category::Ownership,
            severity: Severity::Low,
            label: "renounceOwnership() present — owner can give up control",
            matcher: Matcher::Contains("renounceOwnership"),
        },
        Rule {
            id: "source-transfer-ownership",
            surface: Surface::Source,
            category: Category::Ownership,
            severity: Severity::Low,
            label: "transferOwnership() present — ownership can be reassigned",
            matcher: Matcher::Contains("transferOwnership"),
        },
        Rule {
            id: "source-owner-zero",
            surface: Surface::Source,
            category: Category::Ownership,
            severity: Severity::Low,
            label: "owner set to the zero address — ownership appears renounced",
            matcher: pattern(r"owner\s*=\s*address\(0\)"),
        },
    ]
}

// Bytecode rules match ASCII keywords against the raw hex string. Compiled
// bytecode cannot genuinely contain these outside embedded metadata, so every
// hit is a low-confidence signal and labeled as such.
fn bytecode_rules() -> Vec<Rule> {
    vec![
        Rule {
            id: "bytecode-selfdestruct",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::High,
            label: "bytecode: selfdestruct marker (low-confidence)",
            matcher: Matcher::ContainsNoCase("selfdestruct"),
        },
        Rule {
            id: "bytecode-delegatecall",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::High,
            label: "bytecode: delegatecall marker (low-confidence)",
            matcher: Matcher::ContainsNoCase("delegatecall"),
        },
        Rule {
            id: "bytecode-tx-origin",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::High,
            label: "bytecode: tx.origin marker (low-confidence)",
            matcher: Matcher::ContainsNoCase("tx.origin"),
        },
        Rule {
            id: "bytecode-mint-burn",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::Medium,
            label: "bytecode: mint/burn marker (low-confidence)",
            matcher: Matcher::AnyOf(vec![
                Matcher::ContainsNoCase("mint"),
                Matcher::ContainsNoCase("burn"),
            ]),
        },
        Rule {
            id: "bytecode-raw-call",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::Medium,
            label: "bytecode: raw external call marker (low-confidence)",
            matcher: Matcher::ContainsNoCase("call("),
        },
        Rule {
            id: "bytecode-transfer-ownership",
            surface: Surface::Bytecode,
            category: Category::BytecodeCapability,
            severity: Severity::Low,
            label: "bytecode: transferOwnership marker (low-confidence)",
            matcher: Matcher::ContainsNoCase("transferownership"),
        },
    ]
}
