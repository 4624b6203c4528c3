//! Handle type, error type, and recycler trait for census populations.
//!
//! Depends on nothing else in the workspace. `census-pool` builds the
//! allocator on top of [`Member`], [`PopulationError`], and [`Recycler`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod member;
pub mod traits;

pub use error::PopulationError;
pub use member::Member;
pub use traits::Recycler;
