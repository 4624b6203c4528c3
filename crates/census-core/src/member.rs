//! Generational member handles.
//!
//! A [`Member`] packs a slot index and the slot's generation into a single
//! `u64`. The tag parameter is a zero-sized marker that keeps handles from
//! different domains (entities, assets, ...) from unifying at compile time.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Opaque identity of a member of a `Population<T>`.
///
/// The generation lives in the high 32 bits and the index in the low 32
/// bits. Handles are compared by exact equality of the packed value and
/// are deliberately not ordered.
///
/// The all-zero value ([`Member::ZERO`], also the [`Default`]) is reserved:
/// no population ever issues it, so it can stand for "no member".
///
/// ```
/// use census_core::Member;
///
/// enum Entity {}
///
/// let m = Member::<Entity>::new(3, 7);
/// assert_eq!(m.index(), 3);
/// assert_eq!(m.generation(), 7);
/// assert!(!m.is_zero());
/// assert!(Member::<Entity>::default().is_zero());
/// ```
pub struct Member<T> {
    bits: u64,
    _tag: PhantomData<fn() -> T>,
}

impl<T> Member<T> {
    /// The reserved "no member" value.
    pub const ZERO: Self = Self {
        bits: 0,
        _tag: PhantomData,
    };

    /// Pack an index and a generation into a member.
    pub const fn new(index: u32, generation: u32) -> Self {
        Self {
            bits: ((generation as u64) << 32) | index as u64,
            _tag: PhantomData,
        }
    }

    /// The slot index this member refers to.
    pub const fn index(self) -> u32 {
        self.bits as u32
    }

    /// The slot generation this member was issued with.
    pub const fn generation(self) -> u32 {
        (self.bits >> 32) as u32
    }

    /// Whether this is the reserved zero member.
    pub const fn is_zero(self) -> bool {
        self.bits == 0
    }

    /// The packed 64-bit representation.
    pub const fn to_bits(self) -> u64 {
        self.bits
    }
}

// Manual impls so the tag type needs no bounds of its own.

impl<T> Clone for Member<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Member<T> {}

impl<T> PartialEq for Member<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for Member<T> {}

impl<T> Hash for Member<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T> Default for Member<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("index", &self.index())
            .field("generation", &self.generation())
            .finish()
    }
}

impl<T> fmt::Display for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member(idx={}, gen={})", self.index(), self.generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    enum Entity {}
    enum Asset {}

    #[test]
    fn generation_occupies_high_bits() {
        let m = Member::<Entity>::new(0xDEAD_BEEF, 0x1234_5678);
        assert_eq!(m.to_bits(), 0x1234_5678_DEAD_BEEF);
        assert_eq!(m.index(), 0xDEAD_BEEF);
        assert_eq!(m.generation(), 0x1234_5678);
    }

    #[test]
    fn zero_is_default_and_reserved() {
        let m: Member<Entity> = Member::default();
        assert!(m.is_zero());
        assert_eq!(m, Member::ZERO);
        assert_eq!(m.index(), 0);
        assert_eq!(m.generation(), 0);
    }

    #[test]
    fn first_slot_first_generation_is_not_zero() {
        assert!(!Member::<Entity>::new(0, 1).is_zero());
        assert!(!Member::<Entity>::new(1, 0).is_zero());
    }

    #[test]
    fn equality_is_exact() {
        let a = Member::<Entity>::new(4, 2);
        assert_eq!(a, Member::new(4, 2));
        assert_ne!(a, Member::new(4, 3));
        assert_ne!(a, Member::new(5, 2));
    }

    #[test]
    fn hashes_by_packed_value() {
        let mut set = HashSet::new();
        set.insert(Member::<Asset>::new(1, 1));
        set.insert(Member::<Asset>::new(1, 1));
        set.insert(Member::<Asset>::new(1, 2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn tag_costs_nothing() {
        assert_eq!(std::mem::size_of::<Member<Entity>>(), 8);
        assert_eq!(std::mem::size_of::<Member<String>>(), 8);
    }

    #[test]
    fn display_and_debug() {
        let m = Member::<Entity>::new(3, 9);
        assert_eq!(m.to_string(), "Member(idx=3, gen=9)");
        assert_eq!(format!("{m:?}"), "Member { index: 3, generation: 9 }");
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fields_survive_packing(index in any::<u32>(), generation in any::<u32>()) {
                let m = Member::<Entity>::new(index, generation);
                prop_assert_eq!(m.index(), index);
                prop_assert_eq!(m.generation(), generation);
                prop_assert_eq!(m.is_zero(), index == 0 && generation == 0);
            }
        }
    }
}
