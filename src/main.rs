use std::io::{self, BufWriter};
use std::time::Instant;

use fixedset::io::{process_queries, read_input, write_answers};
use fixedset::FixedSetConfig;
use log::info;

const VERSION: &str = env!("CARGO_PKG_VERSION");

struct Args {
    seed: Option<u64>,
    parallel: bool,
    config: Option<String>,
    help: bool,
    version: bool,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        seed: None,
        parallel: false,
        config: None,
        help: false,
        version: false,
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-V" | "--version" => args.version = true,
            "-h" | "--help" => args.help = true,
            "-p" | "--parallel" => args.parallel = true,
            "-s" | "--seed" => {
                i += 1;
                match argv.get(i).map(|s| s.parse::<u64>()) {
                    Some(Ok(seed)) => args.seed = Some(seed),
                    _ => {
                        eprintln!("Error: --seed requires an unsigned integer");
                        std::process::exit(1);
                    }
                }
            }
            "-c" | "--config" => {
                i += 1;
                if i >= argv.len() {
                    eprintln!("Error: --config requires a path");
                    std::process::exit(1);
                }
                args.config = Some(argv[i].clone());
            }
            s => {
                eprintln!("Error: unknown option: {}", s);
                std::process::exit(1);
            }
        }
        i += 1;
    }
    args
}

fn print_help() {
    println!(
        "Usage: fixedset [options] < input\n\
         \n\
         Reads a key block and a query block from stdin, each a count followed by\n\
         that many integers, and prints Yes or No for every query.\n\
         \n\
         Options:\n\
         \x20 -s, --seed <n>       Seed the hash draws for a reproducible build\n\
         \x20 -p, --parallel       Build second-level tables in parallel\n\
         \x20 -c, --config <path>  Load a JSON configuration file\n\
         \x20 -V, --version        Show version\n\
         \x20 -h, --help           Show this help\n\
         \n\
         Set RUST_LOG=debug to trace rejected hash draws."
    );
}

fn run(args: &Args) -> fixedset::Result<()> {
    let mut config = match &args.config {
        Some(path) => FixedSetConfig::from_file(path)?,
        None => FixedSetConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.parallel {
        config = config.with_parallel(true);
    }
    info!("{}", config.stats());

    let (keys, queries) = read_input(io::stdin().lock())?;
    let start = Instant::now();
    let answers = process_queries(&keys, &queries, &config)?;
    info!(
        "answered {} queries over {} keys in {:?}",
        queries.len(),
        keys.len(),
        start.elapsed()
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_answers(&mut out, &answers)
}

fn main() {
    env_logger::init();
    let args = parse_args();

    if args.version {
        println!("fixedset {}", VERSION);
        return;
    }
    if args.help {
        print_help();
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
