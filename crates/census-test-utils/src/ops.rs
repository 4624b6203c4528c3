//! Operation scripts for property tests.
//!
//! A script is a `Vec<PopOp>`. `Remove` and `Has` name a previously issued
//! member by position, taken modulo the number issued so far, so every
//! generated script is meaningful regardless of how many adds precede it.

use proptest::prelude::*;

/// A single allocator call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopOp {
    Add,
    /// Remove the n-th issued member (mod issued count).
    Remove(usize),
    /// Query the n-th issued member (mod issued count).
    Has(usize),
}

impl PopOp {
    /// Resolve this op's member position against `issued` handles.
    pub fn pick<M: Copy>(self, issued: &[M]) -> Option<M> {
        match self {
            PopOp::Add => None,
            PopOp::Remove(n) | PopOp::Has(n) => {
                if issued.is_empty() {
                    None
                } else {
                    Some(issued[n % issued.len()])
                }
            }
        }
    }
}

/// Scripts of up to `max_len` ops, weighted towards adds so slots get reused.
pub fn pop_ops(max_len: usize) -> impl Strategy<Value = Vec<PopOp>> {
    let op = prop_oneof![
        3 => Just(PopOp::Add),
        2 => any::<usize>().prop_map(PopOp::Remove),
        1 => any::<usize>().prop_map(PopOp::Has),
    ];
    proptest::collection::vec(op, 1..max_len)
}
