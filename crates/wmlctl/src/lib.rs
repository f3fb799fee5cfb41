//! Command implementations for the `wmlctl` binary.

pub mod cmd_outline;
pub mod cmd_text;
