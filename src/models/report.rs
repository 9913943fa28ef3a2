//! Computed subnet summary record.

use super::{host_portion, mask_addr, network_addr};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// The quantities reported for one address and mask pair.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetReport {
    /// The full IP address as acquired.
    pub address: Ipv4Addr,
    /// The subnet mask in dotted-decimal form.
    pub subnet_mask: Ipv4Addr,
    /// Address bits with host bits cleared.
    pub network: Ipv4Addr,
    /// Address bits with network bits cleared.
    pub host: Ipv4Addr,
    /// CIDR prefix length (0-32).
    pub prefix: u8,
}

impl SubnetReport {
    /// Derive the network and host portions for the given address and mask.
    pub fn new(address: Ipv4Addr, mask: u32, prefix: u8) -> SubnetReport {
        SubnetReport {
            address,
            subnet_mask: mask_addr(mask),
            network: network_addr(address, mask),
            host: host_portion(address, mask),
            prefix,
        }
    }
}

impl fmt::Display for SubnetReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}
