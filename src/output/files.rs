//! Flat text files consumed and produced by the pipeline.

use crate::models::Subnet;
use std::error::Error;
use std::io::Write;
use std::net::Ipv4Addr;

/// Write subnets one `addr/prefix` per line, in the given order.
///
/// The address is whatever the [`Subnet`] carries: unmasked originals for
/// the "remaining" file, masked network addresses for the "deleted" file.
pub fn write_subnet_lines(path: &str, subnets: &[Subnet]) -> Result<(), Box<dyn Error>> {
    let mut file = std::fs::File::create(path)
        .map_err(|e| format!("Error creating output file {path}: {e}"))?;
    for subnet in subnets {
        writeln!(file, "{}", subnet)?;
    }
    log::info!("# Wrote {} lines to {}", subnets.len(), path);
    Ok(())
}

/// Read one address-or-subnet token per line, whitespace-trimmed.
///
/// Lines that are blank after trimming are dropped here; tokens that fail
/// to parse are left to the verifier to classify.
pub fn read_token_lines(path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading token file {path}: {e}"))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read `startIP,endIP` rows, one per line, whitespace-trimmed.
///
/// Blank lines are dropped; a malformed row or address is an error, as a
/// range file is expected to be machine-written rather than free text.
pub fn read_range_lines(path: &str) -> Result<Vec<(Ipv4Addr, Ipv4Addr)>, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading range file {path}: {e}"))?;
    let mut ranges = Vec::new();
    for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(format!("Invalid range row: {line}").into());
        }
        let start: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let end: Ipv4Addr = parts[1]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[1]))?;
        ranges.push((start, end));
    }
    Ok(ranges)
}
