//! nihss-instruments
//!
//! NIHSS instrument definition and the scoring engine. Pure data and pure
//! functions — no AWS dependency, no I/O, no shared mutable state.

pub mod engine;
pub mod error;
pub mod instruments;
pub mod interpretation;
pub mod scoring;

pub use engine::{classify, evaluate};
pub use interpretation::interpret;

use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each clinical assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "nihss").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "NIHSS").
    fn name(&self) -> &str;

    /// The domains and subscales this instrument measures.
    fn domains(&self) -> &[Domain];

    /// Validate a set of raw score entries against this instrument's ranges.
    ///
    /// Entries for unknown subscales are ignored. Returns one error per
    /// out-of-range entry, in input order.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} ({}) score {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        subscale.code,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::nihss::Nihss)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
