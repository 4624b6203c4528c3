//! Census: generational handles for objects stored in recycled slots.
//!
//! Bundles `census-core` (the `Member` handle) and `census-pool` (the
//! `Population` allocator) behind one dependency, with a [`prelude`] for
//! glob imports.
//!
//! # Quick start
//!
//! ```rust
//! use census::prelude::*;
//!
//! // Tags keep entity handles and asset handles apart at compile time.
//! enum Entity {}
//! enum Asset {}
//!
//! let mut entities = Population::<Entity>::new();
//! let mut assets = Population::<Asset>::new();
//!
//! let player = entities.add();
//! let texture = assets.add();
//! assert!(entities.has(player));
//! assert!(assets.has(texture));
//!
//! // Payload lives in a side table indexed by the member's slot.
//! let mut names = vec![String::new(); entities.capacity() as usize];
//! names[player.index() as usize] = "player".into();
//!
//! assert!(entities.remove(player));
//! let npc = entities.add();
//! assert_eq!(npc.index(), player.index());
//! assert!(!entities.has(player), "stale handle is rejected");
//!
//! // The default member is reserved and never live.
//! let unset: Member<Entity> = Member::default();
//! assert!(unset.is_zero());
//! assert!(!entities.has(unset));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`member`] | `census-core` | `Member` handle, `PopulationError`, `Recycler` trait |
//! | [`pool`] | `census-pool` | `Population`, `PopulationConfig`, `FreeQueue` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Handle type, error type, and the recycler trait (`census-core`).
pub use census_core as member;

/// The generational allocator and its FIFO recycler (`census-pool`).
///
/// Most users only need [`pool::Population`], which is also available in
/// the [`prelude`].
pub use census_pool as pool;

/// Common imports for typical census usage.
///
/// ```rust
/// use census::prelude::*;
/// ```
pub mod prelude {
    // Handles
    pub use census_core::Member;

    // Allocation
    pub use census_pool::{FreeQueue, Population, PopulationConfig};

    // Errors and seams
    pub use census_core::{PopulationError, Recycler};
}
