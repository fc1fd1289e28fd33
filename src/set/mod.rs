//! Lock-free, open-addressed, fixed-capacity concurrent set.
//!
//! ## Design
//!
//! `ConcurrentSet<K>` is a flat `Box<[KeySlot<K>]>` of power-of-two length.
//! Every operation walks the linear probe chain of spec §3 starting at
//! `hash(k) & (capacity - 1)`, using only `SeqCst` load / store /
//! compare-exchange on each slot's single atomic word.
//!
//! ## Invariants
//!
//! 1. A slot's key evolves `EMPTY -> k` and then possibly `k -> EMPTY`; it
//!    never transitions between two distinct non-empty keys.
//! 2. Delete is tombstone-free: a deleted slot becomes `EMPTY` again, which
//!    means a lookup for a *different* key whose probe chain passes through
//!    that slot may observe a false negative if it raced a delete. This is
//!    spec §4.3's documented limitation, not a bug in this port.
//! 3. Callers must keep load factor strictly below 1 (50% is recommended) —
//!    violating this spins `insert` forever on the pathological-fill
//!    condition (spec §3). Use [`ConcurrentSet::insert_bounded`] if a
//!    "give up and report" alternative is preferred.

#[cfg(test)]
mod tests;

use tracing::{trace, warn};

use crate::error::CapacityError;
use crate::hash::{advance, hash_index, is_power_of_two};
use crate::slot::KeySlot;
use crate::slot::Key;

/// A lock-free, fixed-capacity concurrent set of keys.
pub struct ConcurrentSet<K: Key> {
    slots: Box<[KeySlot<K>]>,
    capacity: usize,
}

impl<K: Key> ConcurrentSet<K> {
    /// Construct a set with all slots empty.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or not a power of two. Spec §7 leaves
    /// this case as caller-responsibility "undefined behavior" for the
    /// original C core; the idiomatic Rust equivalent of an unchecked
    /// precondition violation is a documented panic rather than silent UB
    /// (see DESIGN.md). Use [`ConcurrentSet::try_construct`] for a
    /// `Result`-returning alternative.
    pub fn construct(capacity: usize) -> Self {
        match Self::try_construct(capacity) {
            Ok(set) => set,
            Err(err) => panic!("ConcurrentSet::construct: {err}"),
        }
    }

    /// Fallible counterpart of [`ConcurrentSet::construct`].
    pub fn try_construct(capacity: usize) -> Result<Self, CapacityError> {
        if !is_power_of_two(capacity) {
            return Err(CapacityError::NotPowerOfTwo {
                requested: capacity,
            });
        }
        trace!(capacity, "constructing ConcurrentSet");
        let slots = (0..capacity)
            .map(|_| KeySlot::new_empty())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Self { slots, capacity })
    }

    /// Number of slots in the array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `key`. Idempotent: inserting an already-present key leaves
    /// the array in a state indistinguishable from the key never having
    /// been re-inserted (spec §8, property 3).
    ///
    /// Spins indefinitely if every slot on `key`'s probe chain is occupied
    /// by some other key (spec §3's pathological-fill condition; spec §7:
    /// "no bounded-probe cutoff"). See [`ConcurrentSet::insert_bounded`]
    /// for a variant that detects this instead.
    pub fn insert(&self, key: K) {
        debug_assert!(key != K::EMPTY, "key must not equal the EMPTY sentinel");
        self.probe_insert(key, None)
            .unwrap_or_else(|_| unreachable!("unbounded probe never returns Err"));
    }

    /// Like [`ConcurrentSet::insert`], but gives up and returns
    /// [`CapacityError::ProbeChainExhausted`] after `capacity` probes
    /// instead of spinning forever. Additive (spec §9) — does not change
    /// the behavior of `insert` itself.
    pub fn insert_bounded(&self, key: K) -> Result<(), CapacityError> {
        debug_assert!(key != K::EMPTY, "key must not equal the EMPTY sentinel");
        self.probe_insert(key, Some(self.capacity))
    }

    fn probe_insert(&self, key: K, probe_budget: Option<usize>) -> Result<(), CapacityError> {
        let mut slot_index = hash_index(key, self.capacity);
        let mut probes = 0usize;
        loop {
            if let Some(budget) = probe_budget {
                if probes >= budget {
                    warn!(probes, "insert_bounded: probe chain exhausted");
                    return Err(CapacityError::ProbeChainExhausted);
                }
            }
            let slot = &self.slots[slot_index];
            let current = slot.load();
            if current == K::EMPTY {
                match slot.compare_exchange(K::EMPTY, key) {
                    Ok(_) => return Ok(()),
                    Err(occupant) if occupant == key => return Ok(()),
                    Err(_) => {
                        // Another thread installed a different key here;
                        // re-examine the same slot rather than advancing.
                        // Not a new distinct slot, so it doesn't consume
                        // probe budget.
                        continue;
                    }
                }
            } else if current == key {
                return Ok(());
            }
            slot_index = advance(slot_index, self.capacity);
            probes += 1;
        }
    }

    /// Returns `true` iff `key` is present. Wait-free (bounded by the
    /// probe-chain length) in the absence of pathological fill.
    pub fn contains(&self, key: K) -> bool {
        let mut slot_index = hash_index(key, self.capacity);
        loop {
            let current = self.slots[slot_index].load();
            if current == key {
                return true;
            }
            if current == K::EMPTY {
                return false;
            }
            slot_index = advance(slot_index, self.capacity);
        }
    }

    /// Remove `key` if present. Tombstone-free (spec §4.3) — may cause a
    /// later `contains` for an unrelated key sharing this probe region to
    /// return a false negative (spec §8, scenario 4).
    pub fn delete(&self, key: K) {
        let mut slot_index = hash_index(key, self.capacity);
        loop {
            let current = self.slots[slot_index].load();
            if current == key {
                self.slots[slot_index].store(K::EMPTY);
                return;
            }
            if current == K::EMPTY {
                return;
            }
            slot_index = advance(slot_index, self.capacity);
        }
    }
}
