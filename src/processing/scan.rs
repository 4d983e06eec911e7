//! Subnet normalizer: locate CIDR tokens anywhere in free text.
//!
//! The input is not line-structured; tokens are found by shape, in
//! first-to-last order of appearance.

use crate::models::Subnet;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // 1-3 digit octets, 1-2 digit prefix
    static ref CIDR_RE: Regex =
        Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}/\d{1,2}\b").expect("Invalid Regex?");
}

/// A shaped token that failed octet or prefix validation.
#[derive(Debug, Clone)]
pub struct SkippedToken {
    pub text: String,
    pub reason: String,
}

/// Result of scanning a block of text for CIDR tokens.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Parsed subnets, in order of appearance in the text.
    pub subnets: Vec<Subnet>,
    /// Shaped tokens rejected by validation, with the parse error.
    pub skipped: Vec<SkippedToken>,
}

/// Scan free text for `a.b.c.d/n` shaped tokens.
///
/// Order of appearance is preserved; it drives the tie-break and the output
/// order downstream. Tokens that match the shape but fail validation
/// (octet > 255, prefix > 32) are collected in `skipped` rather than
/// silently dropped. Text that never matches the shape is not an error.
pub fn scan_subnets(contents: &str) -> ScanResult {
    let mut result = ScanResult::default();
    for token in CIDR_RE.find_iter(contents) {
        match Subnet::new(token.as_str()) {
            Ok(subnet) => {
                log::debug!("matched subnet token: {}", subnet.text);
                result.subnets.push(subnet);
            }
            Err(e) => {
                log::warn!("Skipping token '{}': {}", token.as_str(), e);
                result.skipped.push(SkippedToken {
                    text: token.as_str().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    log::info!(
        "# Scan found {} subnets, skipped {} tokens",
        result.subnets.len(),
        result.skipped.len()
    );
    result
}
