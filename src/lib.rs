//! # slotbench-core
//!
//! A pair of **lock-free, open-addressed, fixed-capacity concurrent
//! associative containers** keyed by fixed-width unsigned integers: a
//! set (presence-only, [`set::ConcurrentSet`]) and a table (key → value,
//! [`table::ConcurrentTable`]). Both support concurrent insert,
//! membership/lookup, and delete from any number of threads without
//! mutual-exclusion locks, and both expose batch operations
//! ([`batch`]) that fan a bulk key stream across worker threads.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    batch (§4.5)                       │
//! │   static-partition, crossbeam::thread::scope workers  │
//! └───────────────┬────────────────────────┬──────────────┘
//!                 │                        │
//! ┌───────────────▼──────────┐ ┌───────────▼──────────────┐
//! │   set::ConcurrentSet<K>   │ │ table::ConcurrentTable<K,V>│
//! │   Box<[KeySlot<K>]>       │ │ Box<[TableSlot<K,V>]>     │
//! └───────────────┬──────────┘ └───────────┬───────────────┘
//!                 │                        │
//!                 └──────────┬─────────────┘
//!                            │
//!                   slot::{Key, Value, AtomicCell}
//!                   hash::{hash_index, next_power_of_two}
//! ```
//!
//! There is no manager, no allocator pool, no rehash controller above the
//! slot array — the probe-chain protocol in [`slot`]/[`set`]/[`table`] *is*
//! the entire engineering interest of this crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`slot`] | atomic key/value cell vocabulary (`Key`, `Value`, `AtomicCell`) |
//! | [`set`] | concurrent presence-only container |
//! | [`table`] | concurrent key→value container |
//! | [`batch`] | parallel, statically-partitioned bulk operations over both |
//! | [`hash`] | Knuth multiplicative hash, `next_power_of_two` |
//! | [`keygen`] | uniform, duplicate-prone key generator (tests, benches, CLI) |
//! | [`error`] | `CapacityError` — the one typed error in the crate |
//!
//! ## Key Properties
//!
//! - **Lock-free**: every operation is a bounded sequence of `SeqCst`
//!   atomic loads/stores/CAS on individual slots — no locks, no hazard
//!   pointers, no epoch reclamation.
//! - **Fixed capacity**: arrays never resize or rehash; capacity must be a
//!   power of two and the caller must keep load factor strictly below 1.
//! - **Tombstone-free delete**: a documented limitation — deleting a key
//!   can cause an unrelated key sharing its probe region to appear absent
//!   until the array is rebuilt (see [`set::ConcurrentSet::delete`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use slotbench_core::set::ConcurrentSet;
//! use slotbench_core::hash::next_power_of_two;
//!
//! let capacity = next_power_of_two(1000);
//! let set: ConcurrentSet<u32> = ConcurrentSet::construct(capacity);
//!
//! set.insert(42);
//! assert!(set.contains(42));
//! set.delete(42);
//! assert!(!set.contains(42));
//! ```

#![allow(dead_code)]

pub mod batch;
pub mod error;
pub mod hash;
pub mod keygen;
pub mod set;
pub mod slot;
pub mod table;
