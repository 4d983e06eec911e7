//! Overlap verifier: independent cross-check of an address/subnet list.
//!
//! Works on the `ipnetwork` address abstraction rather than the bit strings
//! the eliminator compares, so the two passes cannot share a blind spot.

use ipnetwork::Ipv4Network;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// A pair of entries whose address ranges intersect.
///
/// Indices refer to positions in the input token list, `index_a < index_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapPair {
    pub index_a: usize,
    pub index_b: usize,
    pub net_a: Ipv4Network,
    pub net_b: Ipv4Network,
}

/// A token that parsed as neither a host address nor a network.
#[derive(Debug, Clone)]
pub struct InvalidToken {
    pub index: usize,
    pub text: String,
    pub reason: String,
}

/// Result of one overlap verification pass.
#[derive(Debug, Default)]
pub struct OverlapReport {
    /// Overlapping pairs in input order.
    pub pairs: Vec<OverlapPair>,
    /// Tokens rejected by parsing; valid tokens are still checked.
    pub invalid: Vec<InvalidToken>,
}

impl OverlapReport {
    pub fn has_overlaps(&self) -> bool {
        !self.pairs.is_empty()
    }
}

/// Parse a token first as a bare host address, then as a network with
/// prefix. Non-strict: host bits need not be zero.
fn parse_token(token: &str) -> Result<Ipv4Network, String> {
    if let Ok(addr) = token.parse::<Ipv4Addr>() {
        return Ipv4Network::new(addr, 32).map_err(|e| e.to_string());
    }
    token
        .parse::<Ipv4Network>()
        .map_err(|_| format!("{} is not a valid IP address or subnet", token))
}

/// Check every pair of tokens for overlapping address ranges.
///
/// `overlaps` is true for any nonempty intersection: equality, containment
/// or partial straddle all count, with no distinction between them at this
/// layer. Invalid tokens are collected per-token instead of aborting the
/// whole check, so partial results are always produced.
pub fn check_overlap<S: AsRef<str>>(tokens: &[S]) -> OverlapReport {
    let mut report = OverlapReport::default();

    let mut parsed: Vec<(usize, Ipv4Network)> = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref().trim();
        match parse_token(token) {
            Ok(net) => parsed.push((index, net)),
            Err(reason) => {
                log::warn!("Invalid token {}: {}", index, reason);
                report.invalid.push(InvalidToken {
                    index,
                    text: token.to_string(),
                    reason,
                });
            }
        }
    }

    for ((index_a, net_a), (index_b, net_b)) in parsed.iter().copied().tuple_combinations() {
        if net_a.overlaps(net_b) {
            log::debug!("{} overlaps {}", net_a, net_b);
            report.pairs.push(OverlapPair {
                index_a,
                index_b,
                net_a,
                net_b,
            });
        }
    }
    log::info!(
        "# Overlap check: {} pairs, {} invalid tokens",
        report.pairs.len(),
        report.invalid.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_inside_network() {
        let report = check_overlap(&["10.0.0.0/24", "10.0.0.5"]);
        assert!(report.invalid.is_empty());
        assert_eq!(report.pairs.len(), 1, "Expected exactly one overlap");
        assert_eq!(report.pairs[0].index_a, 0);
        assert_eq!(report.pairs[0].index_b, 1);
    }

    #[test]
    fn test_disjoint_hosts() {
        let report = check_overlap(&["8.8.8.8", "9.9.9.9"]);
        assert!(report.invalid.is_empty());
        assert!(!report.has_overlaps());
    }

    #[test]
    fn test_disjoint_networks() {
        let report = check_overlap(&["10.1.0.0/16", "10.2.0.0/16", "192.168.0.0/24"]);
        assert!(!report.has_overlaps());
    }

    #[test]
    fn test_self_pair_reported_once() {
        let report = check_overlap(&["10.0.0.0/24", "10.0.0.0/24"]);
        assert_eq!(report.pairs.len(), 1, "Duplicate token is one pair");
    }

    #[test]
    fn test_nested_and_equal_both_count() {
        let report = check_overlap(&["10.0.0.0/8", "10.1.0.0/16", "10.0.0.0/8"]);
        // (0,1) nested, (0,2) equal, (1,2) nested
        assert_eq!(report.pairs.len(), 3);
    }

    #[test]
    fn test_non_strict_network_token() {
        // host bits set in the prefix token are accepted
        let report = check_overlap(&["10.0.0.5/24", "10.0.0.200"]);
        assert!(report.invalid.is_empty());
        assert_eq!(report.pairs.len(), 1);
    }

    #[test]
    fn test_invalid_token_does_not_abort() {
        let report = check_overlap(&["10.0.0.0/24", "not-an-ip", "10.0.0.5"]);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].index, 1);
        assert_eq!(
            report.invalid[0].reason,
            "not-an-ip is not a valid IP address or subnet"
        );
        // the valid tokens around it are still compared
        assert_eq!(report.pairs.len(), 1);
        assert_eq!(report.pairs[0].index_a, 0);
        assert_eq!(report.pairs[0].index_b, 2);
    }

    #[test]
    fn test_blank_token_is_invalid() {
        let report = check_overlap(&["", "10.0.0.0/24"]);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].text, "");
        assert!(!report.has_overlaps());
    }
}
