//! Acquisition of address and mask pairs.
//!
//! This module handles the two ways a request obtains its input:
//! - [`interactive`](InteractiveSource) - operator-entered address and prefix
//! - [`discovery`](DiscoveredSource) - address and mask discovered from the
//!   local interface configuration via an external script
//! - [`cli`](run) - command execution for the discovery script

mod cli;
mod discovery;
mod interactive;

// Re-export public types and functions
pub use cli::run;
pub use discovery::{read_handoff, DiscoveredSource};
pub use interactive::InteractiveSource;

use crate::models::CalcError;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors surfaced at the acquisition boundary.
///
/// Every variant aborts only the current request; the caller returns to the
/// menu without computing anything.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// Address or prefix text failed validation.
    #[error("{0}")]
    Validation(#[from] CalcError),

    /// The discovery mechanism produced no usable data.
    #[error("No usable discovery data: {0}")]
    SourceUnavailable(String),

    /// The operator input or output stream failed.
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
}

/// An address and mask with both representations normalized.
///
/// Whichever form a source provides, the other is derived before this value
/// is handed on, so mask and prefix are always both available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acquired {
    /// The full IP address.
    pub addr: Ipv4Addr,
    /// The subnet mask bits.
    pub mask: u32,
    /// CIDR prefix length.
    pub prefix: u8,
}

/// A source of validated address and mask pairs.
///
/// Each call handles one request: it blocks on its input, validates it, and
/// either yields a normalized [`Acquired`] or rejects the request. No state
/// carries over between calls.
pub trait Acquire {
    fn acquire(&mut self) -> Result<Acquired, AcquireError>;
}
