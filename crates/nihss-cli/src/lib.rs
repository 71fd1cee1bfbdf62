//! Command handlers behind the `nihss` binary.

pub mod commands;
