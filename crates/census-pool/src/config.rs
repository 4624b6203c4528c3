//! Population configuration parameters.

use census_core::PopulationError;

/// Configuration for a [`Population`](crate::Population).
///
/// Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationConfig {
    /// Number of slots to reserve storage for up front.
    ///
    /// This is a capacity hint only: no slots are created until members are
    /// added. Must not exceed `max_slots` or [`Self::MAX_INITIAL_CAPACITY`].
    /// Default: 0.
    pub initial_capacity: u32,

    /// Upper bound on the number of slots the population may allocate.
    ///
    /// Once reached, new members can only reuse freed slots.
    /// Default: `u32::MAX`, the largest count `capacity()` can report.
    pub max_slots: u32,
}

impl PopulationConfig {
    /// Default reserved slot count.
    pub const DEFAULT_INITIAL_CAPACITY: u32 = 0;

    /// Default slot bound.
    pub const DEFAULT_MAX_SLOTS: u32 = u32::MAX;

    /// Largest accepted reservation hint: 16M slots, 64MB per table.
    ///
    /// Populations still grow past this on demand; the cap only bounds
    /// what is allocated up front.
    pub const MAX_INITIAL_CAPACITY: u32 = 1 << 24;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            max_slots: Self::DEFAULT_MAX_SLOTS,
        }
    }

    /// Set the number of slots to reserve storage for.
    pub fn with_initial_capacity(mut self, initial_capacity: u32) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the slot bound.
    pub fn with_max_slots(mut self, max_slots: u32) -> Self {
        self.max_slots = max_slots;
        self
    }

    /// Check the config for internal consistency.
    pub fn validate(&self) -> Result<(), PopulationError> {
        if self.max_slots == 0 {
            return Err(PopulationError::InvalidConfig {
                reason: "max_slots must be non-zero".into(),
            });
        }
        if self.initial_capacity > Self::MAX_INITIAL_CAPACITY {
            return Err(PopulationError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds the reservation limit {}",
                    self.initial_capacity,
                    Self::MAX_INITIAL_CAPACITY
                ),
            });
        }
        if self.initial_capacity > self.max_slots {
            return Err(PopulationError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds max_slots {}",
                    self.initial_capacity, self.max_slots
                ),
            });
        }
        Ok(())
    }
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
