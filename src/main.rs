use clap::Parser;
use hashhunt::{
    HashKind, HuntError, ParallelConfig, Prefix, SearchOutcome, SearchRequest, Termination,
    run_search,
};
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "hashhunt")]
#[command(about = "hashhunt - find data whose hash digest starts with a given hex prefix")]
#[command(version)]
#[command(after_help = "Example: hashhunt -a 2 -p 6517 -t 4")]
struct Args {
    /// Hash prefix to match (hex digits)
    #[arg(short, long, required_unless_present = "list")]
    prefix: Option<String>,
    /// Hash algorithm, by id or name (see --list)
    #[arg(short, long, default_value = "2")]
    algorithm: String,
    /// Number of threads to spawn
    #[arg(short, long, default_value = "1")]
    threads: usize,
    /// Spawn one thread per CPU core (overrides --threads)
    #[arg(short = 'j', long)]
    all_cores: bool,
    /// Give up after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
    /// Base random seed for reproducible searches
    #[arg(long)]
    seed: Option<u64>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// List the available hash algorithms and exit
    #[arg(long)]
    list: bool,
}

/// Options for one hunt, resolved from the command line
struct HuntOptions {
    request: SearchRequest,
    parallel: ParallelConfig,
    verbose: bool,
}

fn resolve_options(args: &Args) -> Result<HuntOptions, HuntError> {
    let hash_kind: HashKind = args.algorithm.parse()?;
    let prefix = Prefix::parse(args.prefix.as_deref().unwrap_or_default())?;
    let threads = if args.all_cores {
        num_cpus::get()
    } else {
        args.threads
    };

    let request = SearchRequest::new(prefix, hash_kind, threads)?;
    let parallel = ParallelConfig::default()
        .with_timeout_option(args.timeout.map(Duration::from_secs))
        .with_seed_option(args.seed);

    Ok(HuntOptions {
        request,
        parallel,
        verbose: args.verbose,
    })
}

fn print_algorithms() {
    println!("Available hash algorithms:");
    for kind in HashKind::all() {
        println!(
            "  {:>2}: {:<10} ({} bits)",
            kind.id(),
            kind.name(),
            kind.digest_len() * 8
        );
    }
}

fn hunt(options: &HuntOptions) -> Result<SearchOutcome, HuntError> {
    let request = &options.request;
    println!("Hunting prefix: {}", request.prefix());
    println!(
        "Algorithm: {}, workers: {}",
        request.hash_kind(),
        request.worker_count()
    );
    if let Some(seed) = options.parallel.base_seed {
        println!("Base seed: {}", seed);
    }
    if let Some(timeout) = options.parallel.timeout {
        println!("Timeout: {:?}", timeout);
    }
    println!();

    run_search(request, &options.parallel)
}

fn print_outcome(outcome: &SearchOutcome, options: &HuntOptions) {
    match &outcome.found {
        Some(found) => {
            println!("{}: {}", found.hash_name(), found.digest_hex);
            println!("From data block (hex encoded): {}", found.candidate.to_hex());
            println!();
        }
        None => match outcome.termination {
            Termination::TimedOut => println!("No match before deadline.\n"),
            _ => println!("Search stopped without a match.\n"),
        },
    }
    println!("Processed {} total hashes.", outcome.total_ops);
    print_search_statistics(outcome, options);
}

/// Print search statistics
fn print_search_statistics(outcome: &SearchOutcome, options: &HuntOptions) {
    println!("\nSearch Statistics:");
    println!("  Result: {}", outcome.termination);
    println!("  Elapsed time: {:?}", outcome.elapsed);
    println!("  Hash rate: {:.0} hashes/s", outcome.hash_rate());
    println!(
        "  Expected hashes per match: {:.0}",
        options.request.prefix().expected_attempts()
    );
    if let Some(found) = &outcome.found {
        println!("  Winning worker: {}", found.worker_id);
    }
    if options.verbose {
        let mut per_worker = outcome.worker_ops.clone();
        per_worker.sort_unstable();
        for (worker_id, ops) in per_worker {
            println!("  Worker {}: {} hashes", worker_id, ops);
        }
    }
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    println!("hashhunt v{}", env!("CARGO_PKG_VERSION"));

    if args.list {
        print_algorithms();
        return;
    }

    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}. Use -h for help.", e);
            std::process::exit(1);
        }
    };

    match hunt(&options) {
        Ok(outcome) => print_outcome(&outcome, &options),
        Err(e) if e.is_configuration() => {
            eprintln!("Error: {}. Use -h for help.", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error during search: {}", e);
            std::process::exit(1);
        }
    }
}
