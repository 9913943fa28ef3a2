//! Terminal rendering of computed subnet details.

use crate::models::SubnetReport;
use colored::Colorize;
use itertools::Itertools;
use std::io::Write;

/// Write the labelled result block for one report.
///
/// # Arguments
/// * `out` - Destination stream
/// * `report` - The computed quantities to print
pub fn write_report<W: Write>(out: &mut W, report: &SubnetReport) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Addresses:".bold())?;
    writeln!(out, "Full IP Address:\t{}", report.address)?;
    writeln!(out, "Subnet Mask    :\t{}", report.subnet_mask)?;
    writeln!(out, "Network Address:\t{}", report.network)?;
    writeln!(out, "Host Portion   :\t{}", report.host)?;
    writeln!(out, "Prefix         :\t{}", report.prefix)?;
    Ok(())
}

/// Render a 32-bit value as four dot-separated 8-bit binary groups,
/// most significant octet first.
pub fn format_binary(bits: u32) -> String {
    bits.to_be_bytes().iter().map(|o| format!("{o:08b}")).join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prefix_to_mask;
    use std::net::Ipv4Addr;

    #[test]
    fn test_format_binary() {
        assert_eq!(
            format_binary(0xFFFFFF00),
            "11111111.11111111.11111111.00000000"
        );
        assert_eq!(
            format_binary(u32::from(Ipv4Addr::new(192, 168, 5, 10))),
            "11000000.10101000.00000101.00001010"
        );
        assert_eq!(format_binary(0), "00000000.00000000.00000000.00000000");
    }

    #[test]
    fn test_write_report_block() {
        let report = SubnetReport::new(
            Ipv4Addr::new(192, 168, 5, 10),
            prefix_to_mask(24).unwrap(),
            24,
        );
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Full IP Address:\t192.168.5.10"));
        assert!(text.contains("Subnet Mask    :\t255.255.255.0"));
        assert!(text.contains("Network Address:\t192.168.5.0"));
        assert!(text.contains("Host Portion   :\t0.0.0.10"));
        assert!(text.contains("Prefix         :\t24"));
    }
}
