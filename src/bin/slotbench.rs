//! Benchmark harness CLI.
//!
//! Mirrors the original OpenMP benchmark's shape (spec §6): generate a
//! duplicate-heavy key stream, time a parallel batch run against a serial
//! baseline for insert / lookup / delete, and print a speedup summary.
//!
//! This binary is an external collaborator of the core (spec §1) — it
//! contains no part of the probe-chain protocol itself, only timing,
//! argument parsing, and the serial baseline loops.

use std::time::Instant;

use clap::Parser;
use rand::Rng;

use slotbench_core::batch;
use slotbench_core::hash::next_power_of_two;
use slotbench_core::keygen::generate_keys;
use slotbench_core::set::ConcurrentSet;
use slotbench_core::table::ConcurrentTable;

/// Which container variant to benchmark.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Variant {
    Set,
    Table,
}

/// Benchmark the lock-free concurrent set / table against a serial baseline.
#[derive(Parser, Debug)]
#[command(name = "slotbench", version, about)]
struct Args {
    /// Number of operands to generate and apply.
    #[arg(default_value_t = 10_000_000)]
    num_operands: usize,

    /// Number of worker threads for the parallel batch runs.
    #[arg(default_value_t = 4)]
    num_threads: usize,

    /// Which container to benchmark.
    #[arg(long, value_enum, default_value_t = Variant::Set)]
    variant: Variant,

    /// Array capacity is `next_power_of_two(num_operands * capacity_factor)`.
    #[arg(long, default_value_t = 2)]
    capacity_factor: usize,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if args.num_threads == 0 {
        eprintln!("num_threads must be >= 1");
        std::process::exit(1);
    }

    let capacity = next_power_of_two(args.num_operands.saturating_mul(args.capacity_factor).max(2));

    println!("Benchmarking Lock-Free Concurrent {:?} (crossbeam scoped threads)", args.variant);
    println!("Number of Operands: {}\n", args.num_operands);
    println!("Number of Threads: {}\n", args.num_threads);
    println!("Array Capacity: {capacity}\n");

    match args.variant {
        Variant::Set => run_set(&args, capacity),
        Variant::Table => run_table(&args, capacity),
    }
}

fn run_set(args: &Args, capacity: usize) {
    let mut rng = rand::rng();
    let keys: Vec<u32> = generate_keys(&mut rng, args.num_operands, capacity);

    println!("Initializing sets...");
    let parallel = ConcurrentSet::<u32>::construct(capacity);
    let serial = ConcurrentSet::<u32>::construct(capacity);
    println!("Initialization complete.\n");

    let parallel_insert = time(|| batch::insert_batch(&parallel, &keys, Some(args.num_threads)));
    println!("Parallel Insert Time: {parallel_insert:.6} seconds");
    let serial_insert = time(|| {
        for &k in &keys {
            serial.insert(k);
        }
    });
    println!("Serial Insert Time: {serial_insert:.6} seconds\n");

    let mut parallel_results = Vec::new();
    let parallel_lookup = time(|| {
        parallel_results = batch::contains_batch(&parallel, &keys, Some(args.num_threads));
    });
    println!("Parallel Lookup Time: {parallel_lookup:.6} seconds");
    let mut serial_results = vec![false; keys.len()];
    let serial_lookup = time(|| {
        for (i, &k) in keys.iter().enumerate() {
            serial_results[i] = serial.contains(k);
        }
    });
    println!("Serial Lookup Time: {serial_lookup:.6} seconds\n");
    debug_assert_eq!(parallel_results.len(), serial_results.len());

    let parallel_delete = time(|| batch::delete_batch(&parallel, &keys, Some(args.num_threads)));
    println!("Parallel Delete Time: {parallel_delete:.6} seconds");
    let serial_delete = time(|| {
        for &k in &keys {
            serial.delete(k);
        }
    });
    println!("Serial Delete Time: {serial_delete:.6} seconds\n");

    print_summary(parallel_insert, serial_insert, parallel_lookup, serial_lookup, parallel_delete, serial_delete);
}

fn run_table(args: &Args, capacity: usize) {
    let mut rng = rand::rng();
    let keys: Vec<u32> = generate_keys(&mut rng, args.num_operands, capacity);
    let pairs: Vec<(u32, u32)> = keys.iter().map(|&k| (k, rng.random())).collect();

    println!("Initializing tables...");
    let parallel = ConcurrentTable::<u32, u32>::construct(capacity);
    let serial = ConcurrentTable::<u32, u32>::construct(capacity);
    println!("Initialization complete.\n");

    let parallel_insert = time(|| batch::insert_batch_table(&parallel, &pairs, Some(args.num_threads)));
    println!("Parallel Insert Time: {parallel_insert:.6} seconds");
    let serial_insert = time(|| {
        for &(k, v) in &pairs {
            serial.insert(k, v);
        }
    });
    println!("Serial Insert Time: {serial_insert:.6} seconds\n");

    let mut parallel_results = Vec::new();
    let parallel_lookup = time(|| {
        parallel_results = batch::lookup_batch(&parallel, &keys, Some(args.num_threads));
    });
    println!("Parallel Lookup Time: {parallel_lookup:.6} seconds");
    let mut serial_results = vec![0u32; keys.len()];
    let serial_lookup = time(|| {
        for (i, &k) in keys.iter().enumerate() {
            serial_results[i] = serial.lookup(k);
        }
    });
    println!("Serial Lookup Time: {serial_lookup:.6} seconds\n");
    debug_assert_eq!(parallel_results.len(), serial_results.len());

    let parallel_delete = time(|| batch::delete_batch_table(&parallel, &keys, Some(args.num_threads)));
    println!("Parallel Delete Time: {parallel_delete:.6} seconds");
    let serial_delete = time(|| {
        for &k in &keys {
            serial.delete(k);
        }
    });
    println!("Serial Delete Time: {serial_delete:.6} seconds\n");

    print_summary(parallel_insert, serial_insert, parallel_lookup, serial_lookup, parallel_delete, serial_delete);
}

fn time(f: impl FnOnce()) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64()
}

fn print_summary(
    parallel_insert: f64,
    serial_insert: f64,
    parallel_lookup: f64,
    serial_lookup: f64,
    parallel_delete: f64,
    serial_delete: f64,
) {
    println!("Performance Summary:");
    println!("---------------------");
    println!(
        "Insert - Parallel: {parallel_insert:.6} s | Serial: {serial_insert:.6} s | Speedup: {:.2}x",
        serial_insert / parallel_insert
    );
    println!(
        "Lookup - Parallel: {parallel_lookup:.6} s | Serial: {serial_lookup:.6} s | Speedup: {:.2}x",
        serial_lookup / parallel_lookup
    );
    println!(
        "Delete - Parallel: {parallel_delete:.6} s | Serial: {serial_delete:.6} s | Speedup: {:.2}x",
        serial_delete / parallel_delete
    );
}
