//! Containment eliminator: drop subnets fully contained in another.

use crate::models::Subnet;
use std::error::Error;

/// Outcome of one elimination pass, both halves in input order.
#[derive(Debug, Default)]
pub struct Elimination {
    /// Subnets no other subnet contains, original unmasked addresses.
    pub kept: Vec<Subnet>,
    /// Contained subnets, re-expressed with host bits masked off.
    pub removed: Vec<Subnet>,
}

/// Partition `subnets` into a kept set and a removed (contained) set.
///
/// Containment between two entries is detected by ordering their network
/// bit strings with a raw string comparison and testing whether the larger
/// starts with the smaller: lexicographic order places a true prefix before
/// any of its extensions, so a single `starts_with` covers containment in
/// either direction without knowing up front which operand is the larger
/// network.
///
/// The outcome is deterministic: the more specific subnet (longer bit
/// string) is the one removed, and on exact duplicates the earlier of the
/// two in input order is removed, so the last occurrence survives. The
/// inner loop stops at the first containing peer.
///
/// Pairwise O(n²) in the number of subnets; fine up to a few thousand
/// entries, beyond that an interval tree or sorted trie would be needed.
pub fn eliminate_contained(subnets: Vec<Subnet>) -> Result<Elimination, Box<dyn Error>> {
    let n = subnets.len();
    let mut contained = vec![false; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let a = subnets[i].bits.as_str();
            let b = subnets[j].bits.as_str();
            let (smaller, larger) = if a <= b { (a, b) } else { (b, a) };
            if !larger.starts_with(smaller) {
                continue;
            }
            // containment holds one way or the other; i is the subsumed one
            // when it is the more specific, or the earlier exact duplicate
            if a.len() > b.len() || (a == b && i < j) {
                log::debug!("{} contained in {}", subnets[i], subnets[j]);
                contained[i] = true;
                break;
            }
        }
    }

    let mut result = Elimination::default();
    for (i, subnet) in subnets.into_iter().enumerate() {
        if contained[i] {
            result.removed.push(subnet.masked()?);
        } else {
            result.kept.push(subnet);
        }
    }
    log::info!(
        "# Elimination kept {} subnets, removed {}",
        result.kept.len(),
        result.removed.len()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnets(tokens: &[&str]) -> Vec<Subnet> {
        tokens
            .iter()
            .map(|t| Subnet::new(t).expect("test token must parse"))
            .collect()
    }

    fn texts(list: &[Subnet]) -> Vec<&str> {
        list.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_eliminate_nested_subnet() {
        let result =
            eliminate_contained(subnets(&["10.0.0.0/8", "10.1.0.0/16", "192.168.1.0/24"]))
                .expect("Failed to eliminate subnets");
        assert_eq!(
            texts(&result.kept),
            vec!["10.0.0.0/8", "192.168.1.0/24"],
            "Expected the container and the disjoint subnet to survive"
        );
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].to_string(), "10.1.0.0/16");
    }

    #[test]
    fn test_eliminate_direction_independent() {
        // contained subnet listed first, container second
        let result = eliminate_contained(subnets(&["10.1.0.0/16", "10.0.0.0/8"]))
            .expect("Failed to eliminate subnets");
        assert_eq!(texts(&result.kept), vec!["10.0.0.0/8"]);
        assert_eq!(texts(&result.removed), vec!["10.1.0.0/16"]);
    }

    #[test]
    fn test_eliminate_exact_duplicates() {
        // earlier duplicate is removed, last occurrence survives
        let result = eliminate_contained(subnets(&["10.0.0.0/24", "10.0.0.0/24"]))
            .expect("Failed to eliminate subnets");
        assert_eq!(result.kept.len(), 1, "Exactly one duplicate must survive");
        assert_eq!(result.removed.len(), 1);

        let result = eliminate_contained(subnets(&[
            "10.0.0.0/24",
            "10.0.0.0/24",
            "10.0.0.0/24",
        ]))
        .expect("Failed to eliminate subnets");
        assert_eq!(result.kept.len(), 1);
        assert_eq!(result.removed.len(), 2);
    }

    #[test]
    fn test_eliminate_containment_closure() {
        // for any prefix-related pair exactly one side is removed
        let pairs = [
            ("10.0.0.0/8", "10.1.0.0/16"),
            ("0.0.0.0/0", "192.168.1.0/24"),
            ("172.16.0.0/12", "172.16.5.0/24"),
        ];
        for (container, contained) in pairs {
            let result = eliminate_contained(subnets(&[container, contained]))
                .expect("Failed to eliminate subnets");
            assert_eq!(
                texts(&result.kept),
                vec![container],
                "{container} must survive"
            );
            assert_eq!(
                texts(&result.removed),
                vec![contained],
                "{contained} must be removed"
            );
        }
    }

    #[test]
    fn test_eliminate_default_route_swallows_all() {
        let result = eliminate_contained(subnets(&["10.0.0.0/8", "0.0.0.0/0", "8.8.8.0/24"]))
            .expect("Failed to eliminate subnets");
        assert_eq!(texts(&result.kept), vec!["0.0.0.0/0"]);
        assert_eq!(result.removed.len(), 2);
    }

    #[test]
    fn test_eliminate_disjoint_kept_in_order() {
        let input = ["192.168.1.0/24", "10.0.0.0/8", "172.16.0.0/12"];
        let result = eliminate_contained(subnets(&input)).expect("Failed to eliminate subnets");
        assert_eq!(texts(&result.kept), input.to_vec(), "Input order preserved");
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_eliminate_removed_is_masked() {
        // host bits present in the input, cleared in the removed output
        let result = eliminate_contained(subnets(&["10.0.0.0/8", "10.1.5.9/16"]))
            .expect("Failed to eliminate subnets");
        assert_eq!(result.removed[0].to_string(), "10.1.0.0/16");
        assert_eq!(result.removed[0].text, "10.1.5.9/16");
    }

    #[test]
    fn test_eliminate_sibling_subnets_not_contained() {
        // shared byte prefix but diverging network bits
        let result = eliminate_contained(subnets(&["10.1.0.0/16", "10.2.0.0/16"]))
            .expect("Failed to eliminate subnets");
        assert_eq!(result.kept.len(), 2);
        assert!(result.removed.is_empty());
    }

    #[test]
    fn test_eliminate_empty_input() {
        let result = eliminate_contained(Vec::new()).expect("Failed to eliminate subnets");
        assert!(result.kept.is_empty());
        assert!(result.removed.is_empty());
    }
}
