//! CIDR subnet model and netmask utilities.
//!
//! Provides [`Subnet`] for representing one CIDR entry located in text,
//! along with netmask helpers used at output-serialization time.

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a dotted-quad netmask.
///
/// # Examples
/// ```
/// use subnet_mask_compare::models::cidr_to_netmask;
/// assert_eq!(cidr_to_netmask(24).unwrap().to_string(), "255.255.255.0");
/// ```
pub fn cidr_to_netmask(prefix: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if prefix > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - prefix;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(mask as u32))
    }
}

/// AND an address with the netmask of the given prefix length.
///
/// Idempotent: masking an already-masked address is a no-op.
pub fn mask_addr(addr: Ipv4Addr, prefix: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let netmask = cidr_to_netmask(prefix)?;
    Ok(Ipv4Addr::from(u32::from(addr) & u32::from(netmask)))
}

/// The top `prefix` bits of an address as a '0'/'1' string.
///
/// The 32-bit field is truncated, not AND-masked: bits beyond `prefix` are
/// simply absent, so host bits never take part in comparisons.
pub fn network_bits(addr: Ipv4Addr, prefix: u8) -> Result<String, Box<dyn Error>> {
    if prefix > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let full = format!("{:032b}", u32::from(addr));
        Ok(full[..prefix as usize].to_string())
    }
}

/// The minimal CIDR block spanning the range `start..=end`.
///
/// The XOR of the two addresses has a set bit at every position where they
/// differ, so the prefix covers exactly the bits above the highest
/// differing one. The range does not need to align to a block boundary;
/// the returned block is the smallest one containing both ends, with
/// `start` kept unmasked.
pub fn range_to_cidr(start: Ipv4Addr, end: Ipv4Addr) -> Result<(Ipv4Addr, u8), Box<dyn Error>> {
    if u32::from(start) > u32::from(end) {
        return Err(format!("Range start {start} is after end {end}").into());
    }
    let xor = u32::from(start) ^ u32::from(end);
    let prefix = xor.leading_zeros() as u8;
    Ok((start, prefix))
}

/// One CIDR entry located in the input text.
///
/// Immutable after parsing; downstream passes only classify and
/// re-serialize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// The parsed address, octets packed big-endian.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
    /// The top `prefix` bits of `addr` as a bit string.
    pub bits: String,
    /// Original matched token, retained for output fidelity.
    pub text: String,
}

impl Subnet {
    /// Create a new [`Subnet`] from a CIDR token (e.g., "10.0.0.0/24").
    ///
    /// Any octet outside [0, 255] or a prefix above 32 is a parse failure,
    /// never a silent default.
    pub fn new(token: &str) -> Result<Subnet, Box<dyn Error>> {
        let token = token.trim();
        let parts: Vec<&str> = token.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid address/prefix: {}", token).into());
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| format!("Invalid prefix {}", parts[1]))?;
        if prefix > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Subnet {
            addr,
            prefix,
            bits: network_bits(addr, prefix)?,
            text: token.to_string(),
        })
    }

    /// This subnet with host bits cleared, used for the "deleted" output.
    pub fn masked(&self) -> Result<Subnet, Box<dyn Error>> {
        let addr = mask_addr(self.addr, self.prefix)?;
        Ok(Subnet {
            addr,
            prefix: self.prefix,
            bits: self.bits.clone(),
            text: self.text.clone(),
        })
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
