//! nihss-bedrock
//!
//! Generated NIHSS interpretations via the Bedrock Converse API, with the
//! deterministic narrative from `nihss-instruments` as the fallback.

pub mod augment;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
