//! nihss-core
//!
//! Pure domain types for NIHSS stroke-severity assessments: the closed item
//! set, clamped score sets, severity tiers and request coercion.
//! No AWS SDK dependency — this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
