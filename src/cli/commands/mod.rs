//! CLI command implementations
//!
//! Each module holds the execution logic for one command, plus the
//! interactive selection steps other commands reuse.

pub mod grant;
pub mod info;
pub mod networks;
pub mod validators;
