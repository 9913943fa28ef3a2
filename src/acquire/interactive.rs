//! Interactive acquisition from operator input.

use super::{Acquire, AcquireError, Acquired};
use crate::models::{parse_addr, parse_prefix, prefix_to_mask};
use std::io::{BufRead, Write};

/// Reads a host address and a CIDR prefix from the operator.
///
/// Both entries are validated before any computation; a rejected entry aborts
/// the request with no fallback to a previous or default value.
pub struct InteractiveSource<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> InteractiveSource<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> InteractiveSource<'a, R, W> {
        InteractiveSource { input, output }
    }

    fn prompt(&mut self, text: &str) -> Result<String, AcquireError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Acquire for InteractiveSource<'_, R, W> {
    fn acquire(&mut self) -> Result<Acquired, AcquireError> {
        let addr_line = self.prompt("\nEnter host address : ")?;
        let addr = parse_addr(&addr_line)?;

        let prefix_line = self.prompt("\nEnter prefix: ")?;
        let prefix = parse_prefix(&prefix_line)?;

        let mask = prefix_to_mask(prefix)?;
        log::debug!("interactive entry {addr}/{prefix}");
        Ok(Acquired { addr, mask, prefix })
    }
}
