//! End-to-end checks of the extraction and scoring pipeline over synthetic
//! contract text, without any network access.

use tokencheckr::{risk_score, Category, FlagExtractor, ScanResult, Severity};

const HONEYPOT_SOURCE: &str = r#"
pragma solidity ^0.8.0;

contract Trap {
    address public owner;
    mapping(address => bool) blacklist;
    uint256 sellFee = 5;

    modifier onlyOwner() { require(msg.sender == owner); _; }

    function mint(address to, uint256 amount) external onlyOwner {}

    function setFees(uint256 sell) external onlyOwner {
        sellFee = sell;
        if (sellFee > 99) { revert(); }
    }
}
"#;

#[test]
fn test_honeypot_source_scores_low() {
    let extractor = FlagExtractor::new();
    let flags = extractor.extract(HONEYPOT_SOURCE, "", true);

    // mint (HIGH), blacklist (HIGH), setFees (MEDIUM), fee>99 (HIGH),
    // onlyOwner (MEDIUM).
    assert_eq!(flags.len(), 5);
    let score = risk_score(&flags);
    assert_eq!(score, 100 - 15 - 15 - 10 - 15 - 10);
}

#[test]
fn test_clean_source_scores_100() {
    let source = r#"
contract Plain {
    function transfer(address to, uint256 amount) external returns (bool) {
        return true;
    }
}
"#;
    let extractor = FlagExtractor::new();
    let flags = extractor.extract(source, "0x6080604052", true);
    assert!(flags.is_empty());
    assert_eq!(risk_score(&flags), 100);
}

#[test]
fn test_scan_result_envelope_serializes() {
    let extractor = FlagExtractor::new();
    let flags = extractor.extract("modifier onlyOwner() { _; }", "", true);
    let score = risk_score(&flags);

    let result = ScanResult {
        address: "0xdAC17F958D2ee523a2206206994597C13D831ec7".into(),
        name: "TetherToken".into(),
        compiler: "v0.4.18".into(),
        is_verified: true,
        flags,
        score,
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["name"], "TetherToken");
    assert_eq!(value["is_verified"], true);
    assert_eq!(value["score"], 90);
    assert_eq!(value["flags"][0]["severity"], "MEDIUM");
    assert!(value["flags"][0]["text"].as_str().unwrap().contains("onlyOwner"));

    // Round-trips cleanly.
    let back: ScanResult = serde_json::from_value(value).unwrap();
    assert_eq!(back.score, result.score);
    assert_eq!(back.flags, result.flags);
}

#[test]
fn test_legacy_flag_shape() {
    let extractor = FlagExtractor::new();
    let flags = extractor.extract("function renounceOwnership() public {}", "", true);
    let result = ScanResult {
        address: "0x0".into(),
        name: String::new(),
        compiler: String::new(),
        is_verified: true,
        score: risk_score(&flags),
        flags,
    };

    let legacy = result.legacy_flags();
    assert_eq!(legacy.len(), 1);
    assert!(legacy[0].contains("renounceOwnership"));
}

#[test]
fn test_both_surfaces_contribute_independently() {
    let extractor = FlagExtractor::new();

    let source_only = extractor.extract("target.delegatecall(data)", "", true);
    let bytecode_only = extractor.extract("", "0xdelegatecall", true);
    let both = extractor.extract("target.delegatecall(data)", "0xdelegatecall", true);

    assert_eq!(source_only.len(), 1);
    assert_eq!(bytecode_only.len(), 1);
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].category, Category::Upgradeability);
    assert_eq!(both[1].category, Category::BytecodeCapability);
    assert_eq!(both[1].severity, Severity::High);
}
