//! Error taxonomy for the simulation core.
//!
//! The core never performs I/O, so everything here is a caller mistake or
//! a malformed input. Acquisition layers (catalog, events) report their
//! own I/O failures separately.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Malformed seed, zero-length sequence request, or an invalid slot
    /// catalog. The run never starts.
    InvalidArgument(String),
    /// Seed sequence shorter than the fixed draw count requires. Fatal to
    /// the run; draws are never silently truncated.
    InsufficientData { needed: usize, got: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            SimError::InsufficientData { needed, got } => {
                write!(f, "insufficient seed data: needed {} values, got {}", needed, got)
            }
        }
    }
}

impl Error for SimError {}
