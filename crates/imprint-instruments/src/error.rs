use thiserror::Error;

use imprint_core::models::safety::SafetyFlag;

use crate::definition::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{} invalid answer(s) for instrument '{instrument_id}': {}", .errors.len(), first_message(.errors))]
    InvalidResponses {
        instrument_id: String,
        errors: Vec<ValidationError>,
        /// Screen result over the same raw answers, when the instrument has
        /// one. A rejected set can still carry a raised flag.
        safety_flag: Option<SafetyFlag>,
    },

    #[error("invalid scoring option for instrument '{instrument_id}': {reason}")]
    InvalidOption {
        instrument_id: String,
        reason: String,
    },

    #[error("malformed definition for instrument '{instrument_id}': {reason}")]
    MalformedDefinition {
        instrument_id: String,
        reason: String,
    },

    #[error("instrument '{instrument_id}' does not support {capability}")]
    UnsupportedCapability {
        instrument_id: String,
        capability: &'static str,
    },

    #[error(transparent)]
    Core(#[from] imprint_core::error::CoreError),
}

impl InstrumentError {
    /// The safety screen result attached to a rejected response set.
    pub fn safety_flag(&self) -> Option<&SafetyFlag> {
        match self {
            InstrumentError::InvalidResponses { safety_flag, .. } => safety_flag.as_ref(),
            _ => None,
        }
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("")
}
