//! Output formatting for computed subnet details.
//!
//! - [`terminal`](write_report) - the labelled result block and binary
//!   renderings for debug logging

mod terminal;

pub use terminal::{format_binary, write_report};
