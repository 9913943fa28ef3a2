// cargo watch -x 'fmt' -x 'test'

pub mod acquire;
pub mod config;
pub mod menu;
pub mod models;
pub mod output;

use acquire::{Acquire, AcquireError, Acquired};
use models::SubnetReport;

/// Derive the full report from a normalized acquisition.
pub fn summarize(acquired: Acquired) -> SubnetReport {
    let report = SubnetReport::new(acquired.addr, acquired.mask, acquired.prefix);
    log::debug!(
        "address bits {}",
        output::format_binary(u32::from(acquired.addr))
    );
    log::debug!("mask bits    {}", output::format_binary(acquired.mask));
    match serde_json::to_string(&report) {
        Ok(json) => log::debug!("report: {json}"),
        Err(e) => log::warn!("could not serialize report: {e}"),
    }
    report
}

/// Acquire one request's input from the given source and compute its report.
pub fn summarize_source(source: &mut dyn Acquire) -> Result<SubnetReport, AcquireError> {
    log::info!("#Start summarize_source()");
    let acquired = source.acquire()?;
    Ok(summarize(acquired))
}
