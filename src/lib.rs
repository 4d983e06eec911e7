// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

use processing::SkippedToken;
pub use processing::{
    check_overlap, eliminate_contained, scan_subnets, Elimination, OverlapReport, ScanResult,
};

/// Scan `input_path` for embedded CIDR tokens, drop every subnet that is
/// fully contained in another and write the kept set to `remaining_path`
/// (original addresses) and the removed set to `deleted_path` (masked
/// network addresses).
///
/// Returns the elimination result together with the tokens the scan
/// skipped, so callers can report both.
pub fn run_reduction(
    input_path: &str,
    remaining_path: &str,
    deleted_path: &str,
) -> Result<(Elimination, Vec<SkippedToken>), Box<dyn Error>> {
    log::info!("#Start run_reduction() input: {}", input_path);
    let contents = std::fs::read_to_string(input_path)
        .map_err(|e| format!("Error reading input file {input_path}: {e}"))?;

    let scan = scan_subnets(&contents);
    let result = eliminate_contained(scan.subnets)?;

    output::write_subnet_lines(remaining_path, &result.kept)?;
    output::write_subnet_lines(deleted_path, &result.removed)?;

    Ok((result, scan.skipped))
}

/// Re-check a token file (typically the "remaining" output) for residual
/// overlaps. Independent of the elimination pass: operates on the
/// `ipnetwork` abstraction, not on network bit strings.
pub fn run_overlap_check(token_path: &str) -> Result<OverlapReport, Box<dyn Error>> {
    log::info!("#Start run_overlap_check() input: {}", token_path);
    let tokens = output::read_token_lines(token_path)?;
    Ok(check_overlap(&tokens))
}

/// Summarize `startIP,endIP` range rows as CIDR entries: for each row the
/// minimal prefix spanning the range, written one `start/prefix` per line
/// to `output_path`. The start address is kept unmasked.
pub fn run_range_summary(
    range_path: &str,
    output_path: &str,
) -> Result<Vec<models::Subnet>, Box<dyn Error>> {
    log::info!("#Start run_range_summary() input: {}", range_path);
    let ranges = output::read_range_lines(range_path)?;
    let mut subnets = Vec::new();
    for (start, end) in ranges {
        let (addr, prefix) = models::range_to_cidr(start, end)?;
        subnets.push(models::Subnet::new(&format!("{addr}/{prefix}"))?);
    }
    output::write_subnet_lines(output_path, &subnets)?;
    Ok(subnets)
}
