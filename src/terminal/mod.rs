//! Shared terminal utilities.
//!
//! Box drawing, terminal reset, and ANSI helpers.

mod output;

pub use output::*;
