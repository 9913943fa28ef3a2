//! Runtime settings for the discovery handoff.
//!
//! Values come from the environment (a `.env` file is loaded in `main`),
//! falling back to the defaults of the reference tooling: a `getaddr.sh`
//! script that writes `address.dat`.

use lazy_static::lazy_static;
use std::time::Duration;

const DEFAULT_SCRIPT: &str = "./getaddr.sh";
const DEFAULT_HANDOFF: &str = "address.dat";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Process-wide settings, resolved once on first use.
pub struct Settings {
    /// Command run to discover the local address and mask. The handoff
    /// filename is appended as its argument.
    pub discovery_script: String,
    /// File the discovery script writes and this program reads back.
    pub handoff_file: String,
    /// Wall-clock bound on the discovery script's runtime.
    pub discovery_timeout: Duration,
}

impl Settings {
    fn from_env() -> Settings {
        let discovery_script = std::env::var("SUBNET_SUMMARY_SCRIPT")
            .unwrap_or_else(|_| DEFAULT_SCRIPT.to_string());
        let handoff_file = std::env::var("SUBNET_SUMMARY_HANDOFF")
            .unwrap_or_else(|_| DEFAULT_HANDOFF.to_string());
        let timeout_secs = match std::env::var("SUBNET_SUMMARY_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unparsable SUBNET_SUMMARY_TIMEOUT_SECS={raw:?}");
                DEFAULT_TIMEOUT_SECS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Settings {
            discovery_script,
            handoff_file,
            discovery_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

lazy_static! {
    static ref SETTINGS: Settings = Settings::from_env();
}

/// The resolved process-wide settings.
pub fn settings() -> &'static Settings {
    &SETTINGS
}
