//! The generational allocator.
//!
//! [`Population`] owns one generation counter per slot, a FIFO of freed
//! indices, and a live count. Every handle it issues is stamped with its
//! slot's current generation; removal bumps that generation, so the old
//! handle stops matching before the slot can be handed out again.

use std::collections::TryReserveError;
use std::fmt;
use std::marker::PhantomData;

use census_core::{Member, PopulationError, Recycler};
use log::{debug, trace, warn};

use crate::config::PopulationConfig;
use crate::free_queue::FreeQueue;

/// Generation assigned to a freshly appended slot.
///
/// Starting at 1 keeps `(index 0, generation 0)`, the zero member, out of
/// reach of every slot.
const FIRST_GENERATION: u32 = 1;

/// Allocates and validates generational members tagged with `T`.
///
/// Removed members become permanently invalid; their slot is reused later
/// under a higher generation. The zero member is never issued and is never
/// reported as present.
///
/// ```
/// use census_pool::Population;
///
/// enum Entity {}
///
/// let mut entities = Population::<Entity>::new();
/// let a = entities.add();
/// assert!(entities.has(a));
/// assert!(entities.remove(a));
/// assert!(!entities.remove(a));
///
/// let b = entities.add();
/// assert_eq!(b.index(), a.index());
/// assert!(b.generation() > a.generation());
/// assert!(!entities.has(a));
/// ```
///
/// Not safe for concurrent use; serialize access externally.
pub struct Population<T, R = FreeQueue> {
    /// Current generation per slot. Length is the capacity.
    gens: Vec<u32>,
    /// Indices of unoccupied slots, oldest first.
    free: R,
    /// Number of live members.
    alive: u32,
    config: PopulationConfig,
    _tag: PhantomData<fn() -> T>,
}

impl<T> Population<T> {
    /// Create an empty, unbounded population.
    pub fn new() -> Self {
        Self::from_parts(FreeQueue::new(), PopulationConfig::default())
    }

    /// Create an empty population from a validated config.
    ///
    /// Storage for `initial_capacity` slots is reserved in both the slot
    /// table and the free queue. A reservation the allocator refuses is
    /// reported as [`PopulationError::InvalidConfig`].
    pub fn with_config(config: PopulationConfig) -> Result<Self, PopulationError> {
        config.validate()?;
        debug!(
            "population configured: initial_capacity={}, max_slots={}",
            config.initial_capacity, config.max_slots
        );
        let mut free = FreeQueue::new();
        free.try_reserve(config.initial_capacity as usize)
            .map_err(|err| reserve_failed(config.initial_capacity, err))?;
        let mut pop = Self::from_parts(free, config);
        pop.reserve_slots()?;
        Ok(pop)
    }
}

impl<T, R: Recycler> Population<T, R> {
    /// Create an empty population backed by a caller-supplied recycler.
    ///
    /// The recycler must start empty: a population has no slots yet, so any
    /// index already queued would refer to nothing.
    ///
    /// # Panics
    ///
    /// The returned population panics in [`Population::add`] and
    /// [`Population::try_add`] if the recycler later pops an index it was
    /// never pushed by this population.
    pub fn with_recycler(recycler: R, config: PopulationConfig) -> Result<Self, PopulationError> {
        config.validate()?;
        if !recycler.is_empty() {
            return Err(PopulationError::InvalidConfig {
                reason: format!("recycler holds {} indices, expected none", recycler.len()),
            });
        }
        let mut pop = Self::from_parts(recycler, config);
        pop.reserve_slots()?;
        Ok(pop)
    }

    fn from_parts(free: R, config: PopulationConfig) -> Self {
        Self {
            gens: Vec::new(),
            free,
            alive: 0,
            config,
            _tag: PhantomData,
        }
    }

    fn reserve_slots(&mut self) -> Result<(), PopulationError> {
        let wanted = self.config.initial_capacity;
        self.gens
            .try_reserve(wanted as usize)
            .map_err(|err| reserve_failed(wanted, err))
    }

    /// Add a new member.
    ///
    /// Reuses the longest-free slot if there is one, otherwise appends a
    /// slot at generation 1.
    ///
    /// # Panics
    ///
    /// Panics if every slot is live and the table is at `max_slots`. Use
    /// [`Population::try_add`] for bounded populations. Also panics under
    /// the same recycler contract violation as `try_add`.
    pub fn add(&mut self) -> Member<T> {
        match self.try_add() {
            Ok(member) => member,
            Err(err) => panic!("{err}"),
        }
    }

    /// Add a new member, or report that the population is full.
    ///
    /// # Panics
    ///
    /// Panics if the recycler pops an index outside the slot table. The
    /// default [`FreeQueue`] only returns indices this population pushed;
    /// a custom [`Recycler`] must do the same.
    pub fn try_add(&mut self) -> Result<Member<T>, PopulationError> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => self.append_slot()?,
        };

        let generation = self.gens[index as usize];
        self.alive += 1;
        Ok(Member::new(index, generation))
    }

    fn append_slot(&mut self) -> Result<u32, PopulationError> {
        // The table never grows past `max_slots`, which is itself a u32.
        let index = self.gens.len() as u32;
        if index >= self.config.max_slots {
            return Err(PopulationError::SlotsExhausted {
                max_slots: self.config.max_slots,
            });
        }
        self.gens.push(FIRST_GENERATION);
        trace!("appended slot {index}");
        Ok(index)
    }

    /// Remove a member.
    ///
    /// Returns `false`, changing nothing, if the member is not live here:
    /// already removed, issued by another population, or never issued.
    ///
    /// On success the slot's generation goes up by one. The one exception
    /// is wraparound: a slot at `u32::MAX` moves to generation 1, not 0,
    /// so the zero member stays unreachable. A member issued 2^32 - 1
    /// removals earlier on that slot would then match again.
    pub fn remove(&mut self, member: Member<T>) -> bool {
        let index = member.index();
        let Some(slot) = self.gens.get_mut(index as usize) else {
            trace!("rejected remove of {member}: index out of range");
            return false;
        };
        if *slot != member.generation() {
            trace!("rejected remove of {member}: slot is at gen {slot}");
            return false;
        }

        *slot = next_generation(*slot);
        if *slot == FIRST_GENERATION {
            warn!("slot {index} generation wrapped; members from its earliest generations may alias");
        }
        self.free.push(index);
        self.alive -= 1;
        true
    }

    /// Whether a member is currently live in this population.
    pub fn has(&self, member: Member<T>) -> bool {
        self.gens
            .get(member.index() as usize)
            .is_some_and(|&generation| generation == member.generation())
    }

    /// Number of live members.
    pub fn alive(&self) -> u32 {
        self.alive
    }

    /// Number of allocated slots, live or free.
    pub fn capacity(&self) -> u32 {
        self.gens.len() as u32
    }

    /// Number of freed slots waiting for reuse.
    pub fn free_count(&self) -> u32 {
        // Every queued index names a distinct slot, so this fits in a u32.
        self.free.len() as u32
    }

    /// Current generation of a slot, or `None` if the slot does not exist.
    ///
    /// For a live slot this is the generation of its member; for a free
    /// slot it is the generation the next member there will get.
    pub fn generation_of(&self, index: u32) -> Option<u32> {
        self.gens.get(index as usize).copied()
    }

    /// The recycler holding this population's freed indices.
    pub fn recycler(&self) -> &R {
        &self.free
    }

    /// The config this population was built with.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }
}

fn reserve_failed(slots: u32, err: TryReserveError) -> PopulationError {
    PopulationError::InvalidConfig {
        reason: format!("cannot reserve storage for {slots} slots: {err}"),
    }
}

/// Bump a slot generation, skipping the reserved zero on wraparound.
///
/// Wrapping means a member issued 2^32 - 1 removals ago on this slot
/// compares equal again. That aliasing is an accepted limitation.
fn next_generation(generation: u32) -> u32 {
    match generation.wrapping_add(1) {
        0 => FIRST_GENERATION,
        next => next,
    }
}

impl<T> Default for Population<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Population<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Population")
            .field("capacity", &self.gens.len())
            .field("alive", &self.alive)
            .field("free", &self.free)
            .field("config", &self.config)
            .finish()
    }
}
