use clap::{Parser, ValueEnum};
use lodestone::search::{
    binary_search, binary_search_between, exponential_search, interpolation_search,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::hint::black_box;
use tracing::{debug, warn};

/// Search a sorted list of integers from the command line
#[derive(Parser, Debug)]
#[command(name = "lodestone")]
#[command(about = "Binary, exponential and interpolation search over sorted data", long_about = None)]
struct Args {
    /// Sorted values to search through (comma-separated list, e.g., "1,2,3,4,5")
    #[arg(short, long, value_delimiter = ',', required_unless_present = "bench")]
    values: Vec<i64>,

    /// Value to look for
    #[arg(short, long, required_unless_present = "bench")]
    target: Option<i64>,

    /// Which algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Left bound of the search window (bounded search only)
    #[arg(long)]
    left: Option<usize>,

    /// Right bound of the search window (bounded search only)
    #[arg(long)]
    right: Option<usize>,

    /// Print the outcome as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Benchmark mode: generate this many sorted values and time every algorithm
    #[arg(long)]
    bench: Option<usize>,

    /// Number of lookups per algorithm in benchmark mode
    #[arg(long, default_value_t = 1_000_000)]
    bench_queries: usize,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Algorithm {
    Binary,
    Bounded,
    Exponential,
    Interpolation,
    All,
}

impl Algorithm {
    fn selects(self, candidate: Algorithm) -> bool {
        self == Algorithm::All || self == candidate
    }
}

#[derive(Serialize)]
struct LookupReport {
    algorithm: &'static str,
    target: i64,
    found: bool,
    index: Option<usize>,
}

impl LookupReport {
    fn new(algorithm: &'static str, target: i64, index: Option<usize>) -> Self {
        LookupReport {
            algorithm,
            target,
            found: index.is_some(),
            index,
        }
    }
}

fn run_lookup(args: &Args) {
    let values = &args.values;
    let target = args.target.expect("clap enforces target outside bench mode");

    if !values.is_sorted() {
        // the algorithms stay well-behaved but the answer is unspecified.
        warn!("input values are not sorted; results are unreliable");
    }

    let mut reports = Vec::new();

    if args.algorithm.selects(Algorithm::Binary) {
        reports.push(LookupReport::new(
            "binary",
            target,
            binary_search(values, &target),
        ));
    }

    if args.algorithm.selects(Algorithm::Bounded) {
        let left = args.left.unwrap_or(0);
        let right = args.right.unwrap_or(values.len().saturating_sub(1));
        debug!(left, right, "bounded window");

        match binary_search_between(values, &target, left, right) {
            Ok(index) => reports.push(LookupReport::new("bounded", target, index)),
            Err(err) => {
                eprintln!("invalid search window: {err}");
                std::process::exit(2);
            }
        }
    }

    if args.algorithm.selects(Algorithm::Exponential) {
        reports.push(LookupReport::new(
            "exponential",
            target,
            exponential_search(values, &target),
        ));
    }

    if args.algorithm.selects(Algorithm::Interpolation) {
        reports.push(LookupReport::new(
            "interpolation",
            target,
            interpolation_search(values, &target),
        ));
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("report serialization cannot fail")
        );
    } else {
        for report in &reports {
            match report.index {
                Some(index) => {
                    println!("{:>14}: found {} at index {}", report.algorithm, target, index)
                }
                None => println!("{:>14}: {} not found", report.algorithm, target),
            }
        }
    }
}

fn run_bench(num_values: usize, num_queries: usize) {
    println!("Generating {num_values} sorted values...");

    // cumulative positive increments: sorted by construction and close enough
    // to uniform for interpolation search to shine.
    let mut rng = StdRng::seed_from_u64(42);
    let mut next = 0i64;
    let values: Vec<i64> = (0..num_values)
        .map(|_| {
            next += rng.random_range(1..8);
            next
        })
        .collect();

    let targets: Vec<i64> = (0..num_queries)
        .map(|_| values[rng.random_range(0..values.len())])
        .collect();

    let jobs: [(&str, fn(&[i64], &i64) -> Option<usize>); 3] = [
        ("binary_search", binary_search::<i64>),
        ("exponential_search", exponential_search::<i64>),
        ("interpolation_search", interpolation_search::<i64>),
    ];

    for (name, search) in jobs {
        let start_time = std::time::Instant::now();

        let mut checksum = 0usize;
        for target in &targets {
            if let Some(index) = black_box(search(&values, target)) {
                checksum = checksum.wrapping_add(index);
            }
        }

        let elapsed = start_time.elapsed();
        let qps = num_queries as f64 / elapsed.as_secs_f64();
        println!(
            "{:>22}: {} lookups in {:.3}s ({:.0} lookups/s, checksum {})",
            name,
            num_queries,
            elapsed.as_secs_f64(),
            qps,
            checksum
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match args.bench {
        Some(num_values) if num_values > 0 => run_bench(num_values, args.bench_queries),
        Some(_) => eprintln!("benchmark mode needs at least one value"),
        None => run_lookup(&args),
    }
}
