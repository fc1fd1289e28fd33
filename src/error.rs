//! The crate's one typed error.
//!
//! The per-slot protocol itself never fails (spec §7) — `CapacityError`
//! exists only for the two additive entry points that *can* fail without
//! changing the spec-mandated behavior of `construct` / `insert`:
//! [`crate::set::ConcurrentSet::insert_bounded`] /
//! [`crate::table::ConcurrentTable::insert_bounded`], and `try_construct`.

use thiserror::Error;

/// Errors from the additive, spec-optional entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// `try_construct` was asked for a capacity that is zero or not a
    /// power of two. `construct` panics on the same condition instead.
    #[error("capacity {requested} is not a nonzero power of two")]
    NotPowerOfTwo {
        /// The rejected capacity.
        requested: usize,
    },

    /// `insert_bounded` walked every slot on the key's probe chain
    /// (`capacity` distinct positions) without finding `EMPTY` or the key
    /// itself — the pathological-fill condition of spec §3.
    #[error("probe chain exhausted without finding an empty slot or a match")]
    ProbeChainExhausted,
}
