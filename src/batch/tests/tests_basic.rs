use crate::batch;
use crate::set::ConcurrentSet;
use crate::table::ConcurrentTable;

use super::init_tracing;

#[test]
fn set_insert_batch_then_contains_batch() {
    init_tracing();
    let capacity = 1024usize;
    let set = ConcurrentSet::<u32>::construct(capacity);
    let keys: Vec<u32> = (0..500).collect();

    batch::insert_batch(&set, &keys, Some(4));
    let results = batch::contains_batch(&set, &keys, Some(4));

    assert!(results.iter().all(|&present| present));
    assert_eq!(results.len(), keys.len());
}

#[test]
fn set_delete_batch_removes_all_operands() {
    init_tracing();
    let capacity = 1024usize;
    let set = ConcurrentSet::<u32>::construct(capacity);
    let keys: Vec<u32> = (0..400).collect();
    batch::insert_batch(&set, &keys, Some(4));

    batch::delete_batch(&set, &keys, Some(4));

    let results = batch::contains_batch(&set, &keys, Some(4));
    assert!(results.iter().all(|&present| !present));
}

#[test]
fn table_insert_batch_then_lookup_batch() {
    init_tracing();
    let capacity = 1024usize;
    let table = ConcurrentTable::<u32, u32>::construct(capacity);
    let pairs: Vec<(u32, u32)> = (0..500).map(|k| (k, k * 7 + 1)).collect();

    batch::insert_batch_table(&table, &pairs, Some(4));

    let keys: Vec<u32> = pairs.iter().map(|&(k, _)| k).collect();
    let results = batch::lookup_batch(&table, &keys, Some(4));

    for (i, &(key, value)) in pairs.iter().enumerate() {
        assert_eq!(results[i], value, "mismatch for key {key}");
    }
}

#[test]
fn table_delete_batch_resets_values() {
    init_tracing();
    let capacity = 512usize;
    let table = ConcurrentTable::<u32, u32>::construct(capacity);
    let pairs: Vec<(u32, u32)> = (0..200).map(|k| (k, k + 1)).collect();
    batch::insert_batch_table(&table, &pairs, Some(4));

    let keys: Vec<u32> = pairs.iter().map(|&(k, _)| k).collect();
    batch::delete_batch_table(&table, &keys, Some(4));

    let results = batch::lookup_batch(&table, &keys, Some(4));
    assert!(results.iter().all(|&v| v == 0));
}

#[test]
fn batch_result_order_matches_operand_order() {
    init_tracing();
    let capacity = 256usize;
    let table = ConcurrentTable::<u32, u32>::construct(capacity);
    let keys: Vec<u32> = vec![3, 1, 4, 1, 5, 9, 2, 6];
    for (i, &k) in keys.iter().enumerate() {
        table.insert(k, i as u32);
    }
    // Last write per duplicate key wins in the serial setup above; batch
    // lookup must still report results in operand order.
    let results = batch::lookup_batch(&table, &keys, Some(3));
    assert_eq!(results.len(), keys.len());
    for (i, &k) in keys.iter().enumerate() {
        assert_eq!(results[i], table.lookup(k), "index {i} key {k}");
    }
}

#[test]
fn empty_operand_slice_is_a_no_op() {
    init_tracing();
    let set = ConcurrentSet::<u32>::construct(16);
    let empty: Vec<u32> = Vec::new();
    batch::insert_batch(&set, &empty, Some(4));
    let results = batch::contains_batch(&set, &empty, Some(4));
    assert!(results.is_empty());
}

#[test]
fn threads_none_falls_back_to_available_parallelism() {
    init_tracing();
    let set = ConcurrentSet::<u32>::construct(256);
    let keys: Vec<u32> = (0..100).collect();
    batch::insert_batch(&set, &keys, None);
    let results = batch::contains_batch(&set, &keys, None);
    assert!(results.iter().all(|&present| present));
}
