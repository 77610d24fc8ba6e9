use crate::models::Flag;

/// Reduce a flag list to a 0-100 risk score.
///
/// Base 100, minus a severity-weighted penalty per flag (HIGH 15, MEDIUM 10,
/// LOW 5), clamped at 0. Integer arithmetic only; order of flags never
/// affects the result.
pub fn risk_score(flags: &[Flag]) -> u8 {
    let penalty: u32 = flags.iter().map(|f| f.severity.penalty()).sum();
    100u32.saturating_sub(penalty) as u8
}
