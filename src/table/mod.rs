//! Lock-free, open-addressed, fixed-capacity concurrent key→value table.
//!
//! Structurally identical to [`crate::set`], except each slot carries an
//! independent value atomic alongside the key atomic (spec §3, §9 — "the
//! table variant becomes a struct of two independent atomics, not a single
//! atomic 64-bit word"). That independence is what produces the
//! update-after-insert race documented below.
//!
//! ## Update-after-insert race (spec §4.2)
//!
//! Key installation and value installation are two separate atomic stores.
//! A reader that reaches the slot between them observes the new key but
//! may still read the *old* value (zero from initialization, or a prior
//! stored value after an `insert` that updates an existing key). `lookup`
//! therefore only promises to return *some* value that was present for the
//! key at or after the lookup's invocation, not necessarily the latest one.
//! Callers that need atomic (key, value) semantics must serialize updates
//! externally — this crate does not paper over that with a single wide
//! atomic, because doing so would change the observable behavior spec §9
//! asks ports to preserve.

#[cfg(test)]
mod tests;

use tracing::{trace, warn};

use crate::error::CapacityError;
use crate::hash::{advance, hash_index, is_power_of_two};
use crate::slot::{Key, TableSlot, Value};

/// A lock-free, fixed-capacity concurrent key→value table.
pub struct ConcurrentTable<K: Key, V: Value> {
    slots: Box<[TableSlot<K, V>]>,
    capacity: usize,
}

impl<K: Key, V: Value> ConcurrentTable<K, V> {
    /// Construct a table with all slots `(EMPTY, 0)`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or not a power of two — see
    /// [`crate::set::ConcurrentSet::construct`]'s doc comment for the
    /// rationale. Use [`ConcurrentTable::try_construct`] to handle this
    /// without panicking.
    pub fn construct(capacity: usize) -> Self {
        match Self::try_construct(capacity) {
            Ok(table) => table,
            Err(err) => panic!("ConcurrentTable::construct: {err}"),
        }
    }

    /// Fallible counterpart of [`ConcurrentTable::construct`].
    pub fn try_construct(capacity: usize) -> Result<Self, CapacityError> {
        if !is_power_of_two(capacity) {
            return Err(CapacityError::NotPowerOfTwo {
                requested: capacity,
            });
        }
        trace!(capacity, "constructing ConcurrentTable");
        let slots = (0..capacity)
            .map(|_| TableSlot::new_empty())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Self { slots, capacity })
    }

    /// Number of slots in the array.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `(key, value)`, or overwrite `value` if `key` is already
    /// present (spec §4.2). Spins indefinitely under pathological fill; see
    /// [`ConcurrentTable::insert_bounded`] for a bounded alternative.
    pub fn insert(&self, key: K, value: V) {
        debug_assert!(key != K::EMPTY, "key must not equal the EMPTY sentinel");
        self.probe_insert(key, value, None)
            .unwrap_or_else(|_| unreachable!("unbounded probe never returns Err"));
    }

    /// Like [`ConcurrentTable::insert`], but returns
    /// [`CapacityError::ProbeChainExhausted`] after `capacity` probes
    /// instead of spinning forever (spec §9 — additive).
    pub fn insert_bounded(&self, key: K, value: V) -> Result<(), CapacityError> {
        debug_assert!(key != K::EMPTY, "key must not equal the EMPTY sentinel");
        self.probe_insert(key, value, Some(self.capacity))
    }

    fn probe_insert(
        &self,
        key: K,
        value: V,
        probe_budget: Option<usize>,
    ) -> Result<(), CapacityError> {
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
            let current_key = slot.load_key();
            if current_key == K::EMPTY {
                match slot.compare_exchange_key(K::EMPTY, key) {
                    Ok(_) => {
                        slot.store_value(value);
                        return Ok(());
                    }
                    Err(occupant) if occupant == key => {
                        slot.store_value(value);
                        return Ok(());
                    }
                    Err(_) => {
                        // Another thread installed a different key here;
                        // re-examine the same slot rather than advancing.
                        // Not a new distinct slot, so it doesn't consume
                        // probe budget.
                        continue;
                    }
                }
            } else if current_key == key {
                slot.store_value(value);
                return Ok(());
            }
            slot_index = advance(slot_index, self.capacity);
            probes += 1;
        }
    }

    /// Look up `key`, returning its value or [`Value::NOT_FOUND`] (`0`) if
    /// absent (spec §4.4, §6). Because `0` is also a legal stored value,
    /// this cannot distinguish "absent" from "present with value 0" — use
    /// [`ConcurrentTable::try_lookup`] when that distinction matters
    /// (spec §9's value-0 open question, resolved as a strict superset).
    pub fn lookup(&self, key: K) -> V {
        self.try_lookup(key).unwrap_or(V::NOT_FOUND)
    }

    /// Look up `key`, returning `None` only when the probe chain search
    /// actually bottoms out at `EMPTY`, never merely because the stored
    /// value happens to be `0`.
    pub fn try_lookup(&self, key: K) -> Option<V> {
        let mut slot_index = hash_index(key, self.capacity);
        loop {
            let slot = &self.slots[slot_index];
            let current_key = slot.load_key();
            if current_key == key {
                return Some(slot.load_value());
            }
            if current_key == K::EMPTY {
                return None;
            }
            slot_index = advance(slot_index, self.capacity);
        }
    }

    /// Remove `key` if present, resetting its slot to `(EMPTY, 0)`.
    /// Tombstone-free — same false-negative caveat as
    /// [`crate::set::ConcurrentSet::delete`] (spec §4.3).
    pub fn delete(&self, key: K) {
        let mut slot_index = hash_index(key, self.capacity);
        loop {
            let slot = &self.slots[slot_index];
            let current_key = slot.load_key();
            if current_key == key {
                slot.store_key(K::EMPTY);
                slot.store_value(V::NOT_FOUND);
                return;
            }
            if current_key == K::EMPTY {
                return;
            }
            slot_index = advance(slot_index, self.capacity);
        }
    }
}
