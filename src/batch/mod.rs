//! Bulk key/value-stream operations, fanned out across worker threads.
//!
//! `BatchDriver`-style entry points divide an operand slice into
//! contiguous, equal-sized chunks — one per worker — and apply the
//! matching single-operand operation from [`crate::set`] / [`crate::table`]
//! within each chunk (spec §4.5). Workers run as
//! `crossbeam::thread::scope` scoped threads, so operand/result slices are
//! borrowed rather than copied and no `'static` bound leaks into the API.
//!
//! No ordering is guaranteed between distinct operands — only the
//! single-operand protocol's linearizability (spec §5). If a batch mixes
//! `insert(k)` and `delete(k)` for the same `k` at different indices, the
//! final state of `k` is unspecified, exactly as in the source.

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::set::ConcurrentSet;
use crate::slot::{Key, Value};
use crate::table::ConcurrentTable;

/// Resolve an explicit thread count, falling back to the host's available
/// parallelism when `None` (ambient convenience — not a semantic change,
/// callers may always pass `Some(1)` to get the fully serial baseline the
/// benchmark harness compares against).
fn resolve_thread_count(threads: Option<usize>) -> usize {
    threads
        .filter(|&t| t > 0)
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, |n| n.get()))
}

/// Split `len` items into `worker_count` contiguous, near-equal ranges.
///
/// Static scheduling (spec §4.5, §9): every worker's chunk size differs by
/// at most one item, and chunks are assigned up front rather than stolen
/// dynamically.
fn static_chunks(len: usize, worker_count: usize) -> Vec<(usize, usize)> {
    if len == 0 || worker_count == 0 {
        return Vec::new();
    }
    let worker_count = worker_count.min(len.max(1));
    let base = len / worker_count;
    let remainder = len % worker_count;
    let mut ranges = Vec::with_capacity(worker_count);
    let mut start = 0;
    for i in 0..worker_count {
        let size = base + usize::from(i < remainder);
        if size == 0 {
            break;
        }
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Insert every key in `keys` into `set`, in parallel.
pub fn insert_batch<K: Key>(set: &ConcurrentSet<K>, keys: &[K], threads: Option<usize>) {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = keys.len(), worker_count, "set insert_batch");
    crossbeam::thread::scope(|scope| {
        for (start, end) in static_chunks(keys.len(), worker_count) {
            let chunk = &keys[start..end];
            scope.spawn(move |_| {
                for &key in chunk {
                    set.insert(key);
                }
            });
        }
    })
    .expect("batch worker panicked");
}

/// Check membership of every key in `keys` against `set`, in parallel.
/// `result[i]` corresponds to `keys[i]` (spec §4.5).
pub fn contains_batch<K: Key>(
    set: &ConcurrentSet<K>,
    keys: &[K],
    threads: Option<usize>,
) -> Vec<bool> {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = keys.len(), worker_count, "set contains_batch");
    let mut results = vec![false; keys.len()];
    crossbeam::thread::scope(|scope| {
        for (chunk_keys, chunk_results) in chunks_with_output(keys, &mut results, worker_count) {
            scope.spawn(move |_| {
                for (key, slot) in chunk_keys.iter().zip(chunk_results.iter_mut()) {
                    *slot = set.contains(*key);
                }
            });
        }
    })
    .expect("batch worker panicked");
    results
}

/// Delete every key in `keys` from `set`, in parallel.
pub fn delete_batch<K: Key>(set: &ConcurrentSet<K>, keys: &[K], threads: Option<usize>) {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = keys.len(), worker_count, "set delete_batch");
    crossbeam::thread::scope(|scope| {
        for (start, end) in static_chunks(keys.len(), worker_count) {
            let chunk = &keys[start..end];
            scope.spawn(move |_| {
                for &key in chunk {
                    set.delete(key);
                }
            });
        }
    })
    .expect("batch worker panicked");
}

/// Insert every `(key, value)` pair in `pairs` into `table`, in parallel.
pub fn insert_batch_table<K: Key, V: Value>(
    table: &ConcurrentTable<K, V>,
    pairs: &[(K, V)],
    threads: Option<usize>,
) {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = pairs.len(), worker_count, "table insert_batch");
    crossbeam::thread::scope(|scope| {
        for (start, end) in static_chunks(pairs.len(), worker_count) {
            let chunk = &pairs[start..end];
            scope.spawn(move |_| {
                for &(key, value) in chunk {
                    table.insert(key, value);
                }
            });
        }
    })
    .expect("batch worker panicked");
}

/// Look up every key in `keys` against `table`, in parallel. `result[i]`
/// corresponds to `keys[i]` (spec §4.5); absent keys yield
/// [`Value::NOT_FOUND`], matching single-operand `lookup`.
pub fn lookup_batch<K: Key, V: Value>(
    table: &ConcurrentTable<K, V>,
    keys: &[K],
    threads: Option<usize>,
) -> Vec<V> {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = keys.len(), worker_count, "table lookup_batch");
    let mut results = vec![V::NOT_FOUND; keys.len()];
    crossbeam::thread::scope(|scope| {
        for (chunk_keys, chunk_results) in chunks_with_output(keys, &mut results, worker_count) {
            scope.spawn(move |_| {
                for (key, slot) in chunk_keys.iter().zip(chunk_results.iter_mut()) {
                    *slot = table.lookup(*key);
                }
            });
        }
    })
    .expect("batch worker panicked");
    results
}

/// Delete every key in `keys` from `table`, in parallel.
pub fn delete_batch_table<K: Key, V: Value>(
    table: &ConcurrentTable<K, V>,
    keys: &[K],
    threads: Option<usize>,
) {
    let worker_count = resolve_thread_count(threads);
    debug!(operands = keys.len(), worker_count, "table delete_batch");
    crossbeam::thread::scope(|scope| {
        for (start, end) in static_chunks(keys.len(), worker_count) {
            let chunk = &keys[start..end];
            scope.spawn(move |_| {
                for &key in chunk {
                    table.delete(key);
                }
            });
        }
    })
    .expect("batch worker panicked");
}

/// Zip an input slice and its matching mutable output slice into aligned
/// `(input_chunk, output_chunk)` pairs under the same static partition.
fn chunks_with_output<'a, I, O>(
    input: &'a [I],
    output: &'a mut [O],
    worker_count: usize,
) -> Vec<(&'a [I], &'a mut [O])> {
    let ranges = static_chunks(input.len(), worker_count);
    let mut remaining_in = input;
    let mut remaining_out = output;
    let mut pairs = Vec::with_capacity(ranges.len());
    let mut consumed = 0;
    for (start, end) in ranges {
        let len = end - start;
        debug_assert_eq!(start, consumed);
        let (in_chunk, in_rest) = remaining_in.split_at(len);
        let (out_chunk, out_rest) = remaining_out.split_at_mut(len);
        remaining_in = in_rest;
        remaining_out = out_rest;
        consumed += len;
        pairs.push((in_chunk, out_chunk));
    }
    pairs
}
