use crate::set::ConcurrentSet;

use super::init_tracing;

#[test]
fn minimum_capacity_of_one() {
    init_tracing();
    let set: ConcurrentSet<u32> = ConcurrentSet::construct(1);
    set.insert(0);
    assert!(set.contains(0));
}

#[test]
fn key_near_empty_sentinel_is_handled() {
    init_tracing();
    let set: ConcurrentSet<u32> = ConcurrentSet::construct(16);
    set.insert(u32::MAX - 1);
    assert!(set.contains(u32::MAX - 1));
}

#[test]
fn wrap_around_probe_chain() {
    // Force a probe chain that wraps past the end of the array back to
    // index 0.
    init_tracing();
    let capacity = 8usize;
    let set: ConcurrentSet<u32> = ConcurrentSet::construct(capacity);
    for k in 0..capacity as u32 {
        set.insert(k);
    }
    for k in 0..capacity as u32 {
        assert!(set.contains(k));
    }
}

#[test]
fn reinsert_after_delete_succeeds() {
    init_tracing();
    let set: ConcurrentSet<u32> = ConcurrentSet::construct(16);
    set.insert(3);
    set.delete(3);
    assert!(!set.contains(3));
    set.insert(3);
    assert!(set.contains(3));
}

#[test]
fn u64_key_width_round_trips() {
    init_tracing();
    let set: ConcurrentSet<u64> = ConcurrentSet::construct(32);
    let big = 1u64 << 40;
    set.insert(big);
    assert!(set.contains(big));
    assert!(!set.contains(big + 1));
}
