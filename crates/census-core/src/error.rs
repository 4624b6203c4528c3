//! Error types for census populations.
//!
//! Membership queries never error: `remove` and `has` report a stale or
//! foreign member as `false`. The variants here cover the remaining
//! fallible paths, configuration and bounded allocation.

use std::error::Error;
use std::fmt;

/// Errors from building or growing a population.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopulationError {
    /// The recycler is empty and the slot table is at its configured bound.
    SlotsExhausted {
        /// The configured maximum number of slots.
        max_slots: u32,
    },
    /// A configuration value was rejected at construction.
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for PopulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SlotsExhausted { max_slots } => {
                write!(f, "population exhausted: all {max_slots} slots are live")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid population config: {reason}"),
        }
    }
}

impl Error for PopulationError {}
