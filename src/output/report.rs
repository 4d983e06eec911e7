//! Console report for elimination and overlap results.

use crate::processing::{Elimination, OverlapReport, SkippedToken};
use colored::Colorize;
use ipnetwork::Ipv4Network;

/// Print a network as the original scripts did: bare address for a host,
/// `addr/prefix` otherwise.
fn format_entry(net: &Ipv4Network) -> String {
    if net.prefix() == 32 {
        net.ip().to_string()
    } else {
        net.to_string()
    }
}

/// Print the elimination summary: skipped tokens, deleted and remaining
/// subnet masks. Deleted entries show their original token text; the
/// masked form goes to the "deleted" file only.
pub fn print_elimination(result: &Elimination, skipped: &[SkippedToken]) {
    if !skipped.is_empty() {
        println!(
            "{} {} token(s) failed validation:",
            "Skipped".on_red(),
            skipped.len()
        );
        for token in skipped {
            println!("  {} ({})", token.text, token.reason);
        }
    }

    if result.removed.is_empty() {
        println!("No subnet masks were deleted.");
    } else {
        println!("{}", "Deleted subnet masks:".red());
        for subnet in &result.removed {
            println!("{}", subnet.text);
        }
    }

    if result.kept.is_empty() {
        println!("No remaining subnet masks.");
    } else {
        println!("{}", "Remaining subnet masks:".green());
        for subnet in &result.kept {
            println!("{}", subnet.text);
        }
    }
}

/// Print the overlap verification summary.
pub fn print_overlaps(report: &OverlapReport) {
    for token in &report.invalid {
        println!("{} {}", "Invalid".on_red(), token.reason);
    }

    if report.has_overlaps() {
        println!(
            "{}",
            "There are overlapping subnets or inclusive subnets in the remaining IPs:".red()
        );
        for pair in &report.pairs {
            println!("{} and {}", format_entry(&pair.net_a), format_entry(&pair.net_b));
        }
    } else {
        println!("There are no overlapping subnets or inclusive subnets in the remaining IPs.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        let host: Ipv4Network = "8.8.8.8/32".parse().unwrap();
        assert_eq!(format_entry(&host), "8.8.8.8");

        let net: Ipv4Network = "10.0.0.0/24".parse().unwrap();
        assert_eq!(format_entry(&net), "10.0.0.0/24");
    }
}
