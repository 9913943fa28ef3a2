//! IPv4 address, prefix and mask arithmetic.
//!
//! All computation runs over `u32` values in host byte order, with
//! [`std::net::Ipv4Addr`] at the boundaries for parsing and display.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Validation errors raised before any arithmetic runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed dotted-decimal text.
    #[error("Invalid IP address {0:?}. Try again. e.g.: 129.170.213.202")]
    InvalidFormat(String),

    /// Prefix outside 0-32.
    #[error("Invalid prefix {0:?}. Try again. e.g.: 24")]
    InvalidPrefix(String),
}

/// Parse dotted-decimal IPv4 text into an address.
///
/// Surrounding whitespace is trimmed; anything the standard parser does not
/// accept as `d.d.d.d` with each octet in 0-255 is [`CalcError::InvalidFormat`].
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, CalcError> {
    let text = text.trim();
    text.parse::<Ipv4Addr>()
        .map_err(|_| CalcError::InvalidFormat(text.to_string()))
}

/// Parse a CIDR prefix entered as text, e.g. `24` (not `/24`).
pub fn parse_prefix(text: &str) -> Result<u8, CalcError> {
    let text = text.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| CalcError::InvalidPrefix(text.to_string()))?;
    if !is_valid_prefix(value) {
        return Err(CalcError::InvalidPrefix(text.to_string()));
    }
    Ok(value as u8)
}

/// A prefix is valid exactly when it lies in 0-32.
pub fn is_valid_prefix(prefix: i64) -> bool {
    (0..=i64::from(MAX_LENGTH)).contains(&prefix)
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use subnet_summary::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(prefix: u8) -> Result<u32, CalcError> {
    if prefix > MAX_LENGTH {
        return Err(CalcError::InvalidPrefix(prefix.to_string()));
    }
    // a shift by 32 would overflow the u32, so /0 gets its own arm
    if prefix == 0 {
        Ok(0)
    } else {
        Ok(u32::MAX << (MAX_LENGTH - prefix))
    }
}

/// Count of set bits in the mask, e.g. 255.255.255.0 => 24.
///
/// Defined for any 32-bit input. A non-contiguous mask yields a prefix that
/// does not round-trip through [`prefix_to_mask`]; no contiguity check is
/// performed here.
pub fn mask_to_prefix(mask: u32) -> u8 {
    mask.count_ones() as u8
}

/// Address bits with all host bits cleared.
pub fn network_addr(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask)
}

/// Address bits with all network bits cleared.
pub fn host_portion(addr: Ipv4Addr, mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & !mask)
}

/// Carry a raw mask value back into dotted-decimal form.
pub fn mask_addr(mask: u32) -> Ipv4Addr {
    Ipv4Addr::from(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_to_mask() {
        assert_eq!(prefix_to_mask(0).unwrap(), 0x00000000);
        assert_eq!(prefix_to_mask(8).unwrap(), 0xFF000000);
        assert_eq!(prefix_to_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(prefix_to_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(prefix_to_mask(33).is_err());
    }

    #[test]
    fn test_mask_to_prefix_round_trip() {
        for prefix in 0..=MAX_LENGTH {
            let mask = prefix_to_mask(prefix).unwrap();
            assert_eq!(mask_to_prefix(mask), prefix, "round trip for /{prefix}");
        }
    }

    #[test]
    fn test_mask_to_prefix_noncontiguous() {
        // popcount only, the resulting prefix does not round-trip
        assert_eq!(mask_to_prefix(0xFF00FF00), 16);
        assert_eq!(mask_to_prefix(0x00000001), 1);
        assert_ne!(
            prefix_to_mask(mask_to_prefix(0xFF00FF00)).unwrap(),
            0xFF00FF00
        );
    }

    #[test]
    fn test_parse_addr() {
        assert_eq!(
            parse_addr("192.168.5.10").unwrap(),
            Ipv4Addr::new(192, 168, 5, 10)
        );
        assert_eq!(
            parse_addr("  129.170.213.202\n").unwrap(),
            Ipv4Addr::new(129, 170, 213, 202)
        );
        for bad in ["256.1.1.1", "1.1.1", "1.1.1.1.1", "abc.1.1.1", "", "1.1.1.1 x"] {
            assert_eq!(
                parse_addr(bad),
                Err(CalcError::InvalidFormat(bad.trim().to_string())),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("24").unwrap(), 24);
        assert_eq!(parse_prefix(" 8 \n").unwrap(), 8);
        assert_eq!(parse_prefix("0").unwrap(), 0);
        assert_eq!(parse_prefix("32").unwrap(), 32);
        for bad in ["-1", "33", "abc", ""] {
            assert!(parse_prefix(bad).is_err(), "expected rejection of {bad:?}");
        }
    }

    #[test]
    fn test_is_valid_prefix() {
        assert!(is_valid_prefix(0));
        assert!(is_valid_prefix(24));
        assert!(is_valid_prefix(32));
        assert!(!is_valid_prefix(-1));
        assert!(!is_valid_prefix(33));
    }

    #[test]
    fn test_network_and_host() {
        let addr = Ipv4Addr::new(192, 168, 5, 10);
        let mask = prefix_to_mask(24).unwrap();
        assert_eq!(network_addr(addr, mask), Ipv4Addr::new(192, 168, 5, 0));
        assert_eq!(host_portion(addr, mask), Ipv4Addr::new(0, 0, 0, 10));

        let addr = Ipv4Addr::new(10, 0, 0, 5);
        let mask = prefix_to_mask(8).unwrap();
        assert_eq!(network_addr(addr, mask), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(host_portion(addr, mask), Ipv4Addr::new(0, 0, 0, 5));
    }

    #[test]
    fn test_network_or_host_recombines() {
        // network | host == addr and network & host == 0, for any mask
        let addrs = [
            Ipv4Addr::new(192, 168, 5, 10),
            Ipv4Addr::new(10, 0, 0, 5),
            Ipv4Addr::new(255, 255, 255, 255),
            Ipv4Addr::new(0, 0, 0, 0),
        ];
        let masks = [0x00000000, 0xFF000000, 0xFFFFFF00, 0xFFFFFFFF, 0xFF00FF00];
        for addr in addrs {
            for mask in masks {
                let network = u32::from(network_addr(addr, mask));
                let host = u32::from(host_portion(addr, mask));
                assert_eq!(network | host, u32::from(addr));
                assert_eq!(network & host, 0);
            }
        }
    }

    #[test]
    fn test_format_round_trip() {
        for text in ["0.0.0.0", "255.255.255.255", "192.168.5.10", "129.170.213.202"] {
            assert_eq!(parse_addr(text).unwrap().to_string(), text);
        }
    }
}
