//! Operator menu loop.
//!
//! Offers interactive entry, automatic discovery and exit. Every validation
//! failure aborts only the current request and returns here; nothing is fatal
//! except the streams themselves going away.

use crate::acquire::{AcquireError, DiscoveredSource, InteractiveSource};
use crate::models::SubnetReport;
use crate::output;
use crate::summarize_source;
use colored::Colorize;
use std::io::{BufRead, Write};

fn write_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Menu ")?;
    writeln!(out, "i - to print the IP address details with user input")?;
    writeln!(out, "a - to print the IP address details automatically")?;
    writeln!(out, "e - to exit the program")?;
    write!(out, "enter command: ")?;
    out.flush()
}

/// Run the menu until the operator exits or the input stream ends.
pub fn run_menu<R: BufRead, W: Write>(mut input: R, mut out: W) -> std::io::Result<()> {
    log::info!("#Start run_menu()");
    let mut show_menu = true;
    loop {
        if show_menu {
            write_menu(&mut out)?;
        }
        show_menu = true;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            // EOF behaves like exit
            writeln!(out, "\n.. exiting")?;
            return Ok(());
        }

        match choice.trim() {
            "" => show_menu = false,
            "i" => {
                log::debug!("menu: interactive request");
                let result = {
                    let mut source = InteractiveSource::new(&mut input, &mut out);
                    summarize_source(&mut source)
                };
                finish_request(&mut out, result)?;
            }
            "a" => {
                log::debug!("menu: automatic request");
                let result = {
                    let mut source = DiscoveredSource::new();
                    summarize_source(&mut source)
                };
                finish_request(&mut out, result)?;
            }
            "e" => {
                writeln!(out, "\n.. exiting")?;
                return Ok(());
            }
            other => {
                log::debug!("menu: rejected option {other:?}");
                writeln!(out)?;
                writeln!(out, "-----------------------------------------")?;
                writeln!(out, "{}", "| Not a valid input. Returning to menu. |".yellow())?;
                writeln!(out, "-----------------------------------------")?;
            }
        }
    }
}

/// Print the result block, or the error message for a rejected request.
///
/// Stream failures propagate; every acquisition error is recoverable and
/// leaves the loop running.
fn finish_request<W: Write>(
    out: &mut W,
    result: Result<SubnetReport, AcquireError>,
) -> std::io::Result<()> {
    match result {
        Ok(report) => output::write_report(out, &report),
        Err(AcquireError::Io(e)) => Err(e),
        Err(e) => {
            log::warn!("request rejected: {e}");
            writeln!(out, "\n {}", e.to_string().red())
        }
    }
}
