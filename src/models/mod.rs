//! Domain models for subnet-mask-compare.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Subnet`] - one CIDR entry with its network bit representation

mod subnet;

// Re-export public types
pub use subnet::{cidr_to_netmask, mask_addr, network_bits, range_to_cidr, Subnet, MAX_LENGTH};
