//! Domain models for the subnet summary.
//!
//! This module contains the core types and arithmetic used throughout the
//! application:
//! - [`parse_addr`], [`prefix_to_mask`], [`mask_to_prefix`] and friends -
//!   address parsing and prefix/mask conversion
//! - [`network_addr`] / [`host_portion`] - the network and host bit
//!   computations
//! - [`SubnetReport`] - the computed result record

mod ipv4;
mod report;

// Re-export public types and functions
pub use ipv4::{
    host_portion, is_valid_prefix, mask_addr, mask_to_prefix, network_addr, parse_addr,
    parse_prefix, prefix_to_mask, CalcError, MAX_LENGTH,
};
pub use report::SubnetReport;
