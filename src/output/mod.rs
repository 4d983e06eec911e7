//! Flat-file input/output and console reporting.
//!
//! - [`files`] - reading token lists and writing subnet lists
//! - [`report`] - human-readable console summary with colors

mod files;
pub mod report;

pub use files::{read_range_lines, read_token_lines, write_subnet_lines};
