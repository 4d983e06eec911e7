//! Subnet reduction and verification logic.
//!
//! This module contains the business logic of the crate:
//! - [`scan`] - locating CIDR tokens in free text
//! - [`eliminate`] - removing subnets fully contained in another
//! - [`verify`] - independent overlap cross-check of the survivors

mod eliminate;
mod scan;
mod verify;

// Re-export public functions and types
pub use eliminate::{eliminate_contained, Elimination};
pub use scan::{scan_subnets, ScanResult, SkippedToken};
pub use verify::{check_overlap, InvalidToken, OverlapPair, OverlapReport};
