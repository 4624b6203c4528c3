//! Generational slot allocation for census handles.
//!
//! A [`Population`] issues [`Member`] handles and later validates or
//! retires them. Each slot carries a generation counter that is bumped on
//! removal, so a handle issued before its slot was recycled is rejected by
//! every query afterwards.
//!
//! # Architecture
//!
//! ```text
//! Population<T, R = FreeQueue>
//! ├── gens: Vec<u32>     (one generation per slot, starts at 1)
//! ├── free: R: Recycler  (FIFO of freed indices)
//! ├── alive: u32
//! └── PopulationConfig   (capacity hint + slot bound)
//! ```
//!
//! The population stores no payload. Pair it with a `Vec` indexed by
//! [`Member::index`] (or any other side table) to attach data to members.
//!
//! # Concurrency
//!
//! Nothing here is internally synchronized. Wrap the whole population in a
//! `Mutex` (or confine it to one thread) if it must be shared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod free_queue;
pub mod population;

// Public re-exports for the primary API surface.
pub use census_core::{Member, PopulationError, Recycler};
pub use config::PopulationConfig;
pub use free_queue::FreeQueue;
pub use population::Population;
