//! Command implementations for the whitelabel CLI

pub mod process;
