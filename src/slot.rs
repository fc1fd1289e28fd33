//! Atomic key/value cells shared by [`crate::set`] and [`crate::table`].
//!
//! This module owns the one piece of `unsafe`-free polymorphism the crate
//! needs: a `Key` (and, for the table, `Value`) trait that maps a plain
//! unsigned integer width to its matching `core::sync::atomic` cell type,
//! together with the `EMPTY` sentinel for that width.
//!
//! Nothing in this module knows about probing, hashing, or batching — it is
//! the single-slot vocabulary the rest of the crate is built from.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// A fixed-width unsigned integer usable as a slot-array key.
///
/// `EMPTY` is the sentinel meaning "slot unoccupied"; by convention (and by
/// requirement — see spec §3) it is the all-ones bit pattern, i.e. the
/// maximum representable value of `Self`. No other key may equal it.
pub trait Key: Copy + Eq + Sized + Send + Sync + Into<u64> + 'static {
    /// The atomic cell type backing one slot's key field.
    type Atomic: AtomicCell<Self>;

    /// Reserved "slot unoccupied" sentinel — the all-ones pattern.
    const EMPTY: Self;
}

/// A fixed-width unsigned integer usable as a table value.
///
/// `0` is the universal "not found" return for [`crate::table::lookup`],
/// but remains otherwise a legal stored value (spec §3).
pub trait Value: Copy + Eq + Sized + Send + Sync + 'static {
    /// The atomic cell type backing one slot's value field.
    type Atomic: AtomicCell<Self>;

    /// The "not found" / default-initialized value.
    const NOT_FOUND: Self;
}

/// Minimal sequentially-consistent atomic cell over an integer of width `T`.
///
/// Every access in `set`/`table`/`batch` goes through these three methods,
/// all pinned to `SeqCst` per spec §5 — this is the one place ordering is
/// chosen, so a port that wants to weaken it only has to touch this trait's
/// implementations.
pub trait AtomicCell<T>: Send + Sync {
    /// Create a new cell initialized to `value`.
    fn new(value: T) -> Self;
    /// Sequentially consistent load.
    fn load(&self) -> T;
    /// Sequentially consistent store.
    fn store(&self, value: T);
    /// Sequentially consistent compare-and-swap; `true` iff it succeeded.
    fn compare_exchange(&self, current: T, new: T) -> Result<T, T>;
}

impl AtomicCell<u32> for AtomicU32 {
    #[inline]
    fn new(value: u32) -> Self {
        AtomicU32::new(value)
    }
    #[inline]
    fn load(&self) -> u32 {
        AtomicU32::load(self, Ordering::SeqCst)
    }
    #[inline]
    fn store(&self, value: u32) {
        AtomicU32::store(self, value, Ordering::SeqCst)
    }
    #[inline]
    fn compare_exchange(&self, current: u32, new: u32) -> Result<u32, u32> {
        AtomicU32::compare_exchange(self, current, new, Ordering::SeqCst, Ordering::SeqCst)
    }
}

impl AtomicCell<u64> for AtomicU64 {
    #[inline]
    fn new(value: u64) -> Self {
        AtomicU64::new(value)
    }
    #[inline]
    fn load(&self) -> u64 {
        AtomicU64::load(self, Ordering::SeqCst)
    }
    #[inline]
    fn store(&self, value: u64) {
        AtomicU64::store(self, value, Ordering::SeqCst)
    }
    #[inline]
    fn compare_exchange(&self, current: u64, new: u64) -> Result<u64, u64> {
        AtomicU64::compare_exchange(self, current, new, Ordering::SeqCst, Ordering::SeqCst)
    }
}

impl Key for u32 {
    type Atomic = AtomicU32;
    const EMPTY: Self = u32::MAX;
}

impl Key for u64 {
    type Atomic = AtomicU64;
    const EMPTY: Self = u64::MAX;
}

impl Value for u32 {
    type Atomic = AtomicU32;
    const NOT_FOUND: Self = 0;
}

impl Value for u64 {
    type Atomic = AtomicU64;
    const NOT_FOUND: Self = 0;
}

/// One slot of a [`crate::set::ConcurrentSet`]: a single atomic key word.
pub struct KeySlot<K: Key> {
    key: K::Atomic,
}

impl<K: Key> KeySlot<K> {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            key: K::Atomic::new(K::EMPTY),
        }
    }

    #[inline]
    pub fn load(&self) -> K {
        self.key.load()
    }

    #[inline]
    pub fn store(&self, value: K) {
        self.key.store(value)
    }

    #[inline]
    pub fn compare_exchange(&self, current: K, new: K) -> Result<K, K> {
        self.key.compare_exchange(current, new)
    }
}

/// One slot of a [`crate::table::ConcurrentTable`]: independent atomic key
/// and value words (spec §3 — "the pair need not be a single atomic word").
pub struct TableSlot<K: Key, V: Value> {
    key: K::Atomic,
    value: V::Atomic,
}

impl<K: Key, V: Value> TableSlot<K, V> {
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            key: K::Atomic::new(K::EMPTY),
            value: V::Atomic::new(V::NOT_FOUND),
        }
    }

    #[inline]
    pub fn load_key(&self) -> K {
        self.key.load()
    }

    #[inline]
    pub fn store_key(&self, value: K) {
        self.key.store(value)
    }

    #[inline]
    pub fn compare_exchange_key(&self, current: K, new: K) -> Result<K, K> {
        self.key.compare_exchange(current, new)
    }

    #[inline]
    pub fn load_value(&self) -> V {
        self.value.load()
    }

    #[inline]
    pub fn store_value(&self, value: V) {
        self.value.store(value)
    }
}
