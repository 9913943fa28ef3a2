//! Automatic acquisition from the local interface configuration.
//!
//! The external discovery script writes a two-line handoff file (address,
//! then dotted-decimal subnet mask); this module runs the script, reads the
//! handoff back and re-validates both lines.

use super::{cli, Acquire, AcquireError, Acquired};
use crate::config;
use crate::models::{mask_to_prefix, parse_addr};
use std::net::Ipv4Addr;
use std::path::Path;

/// Acquires the address and mask discovered from the local interface.
pub struct DiscoveredSource {
    handoff_file: Option<String>,
}

impl DiscoveredSource {
    /// Run the configured discovery script, then read its handoff file.
    pub fn new() -> DiscoveredSource {
        DiscoveredSource { handoff_file: None }
    }

    /// Read an existing handoff file directly, skipping the script run.
    pub fn from_handoff(path: impl Into<String>) -> DiscoveredSource {
        DiscoveredSource {
            handoff_file: Some(path.into()),
        }
    }
}

impl Default for DiscoveredSource {
    fn default() -> Self {
        DiscoveredSource::new()
    }
}

impl Acquire for DiscoveredSource {
    fn acquire(&mut self) -> Result<Acquired, AcquireError> {
        log::info!("#Start DiscoveredSource::acquire()");
        let (addr, mask_dotted) = match &self.handoff_file {
            Some(file) => {
                if !Path::new(file).exists() {
                    return Err(AcquireError::SourceUnavailable(format!(
                        "handoff file does not exist: {file}"
                    )));
                }
                log::info!("Using provided handoff file: {file}");
                read_handoff(file)?
            }
            None => {
                let settings = config::settings();
                let cmd = format!("{} {}", settings.discovery_script, settings.handoff_file);
                cli::run(&cmd, settings.discovery_timeout)?;
                read_handoff(&settings.handoff_file)?
            }
        };

        let mask = u32::from(mask_dotted);
        let prefix = mask_to_prefix(mask);
        log::debug!("discovered {addr} mask {mask_dotted} => /{prefix}");
        Ok(Acquired { addr, mask, prefix })
    }
}

/// Read and validate a two-line handoff file.
///
/// # Arguments
/// * `path` - The handoff file: line 1 = IPv4 address, line 2 = subnet mask
///
/// # Returns
/// * `Ok((addr, mask))` - Both lines parsed as dotted-decimal addresses
/// * `Err(AcquireError::SourceUnavailable)` - File unreadable or a line missing
/// * `Err(AcquireError::Validation)` - A line is present but not valid IPv4
pub fn read_handoff(path: &str) -> Result<(Ipv4Addr, Ipv4Addr), AcquireError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        AcquireError::SourceUnavailable(format!("cannot read handoff file {path}: {e}"))
    })?;

    let mut lines = text.lines();
    let addr_line = lines
        .next()
        .ok_or_else(|| AcquireError::SourceUnavailable(format!("handoff file {path} is empty")))?;
    let mask_line = lines.next().ok_or_else(|| {
        AcquireError::SourceUnavailable(format!("handoff file {path} has no subnet mask line"))
    })?;

    let addr = parse_addr(addr_line)?;
    let mask = parse_addr(mask_line)?;
    Ok((addr, mask))
}
