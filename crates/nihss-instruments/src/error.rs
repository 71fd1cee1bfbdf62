use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{count} score(s) out of range, first: {first}")]
    ValidationMany {
        count: usize,
        first: ValidationError,
    },
}

impl InstrumentError {
    /// Collapse the output of `Instrument::validate_scores` into a single
    /// error, or `None` when every entry was in range.
    pub fn from_validation(mut errors: Vec<ValidationError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop().map(InstrumentError::Validation),
            count => Some(InstrumentError::ValidationMany {
                count,
                first: errors.swap_remove(0),
            }),
        }
    }
}
