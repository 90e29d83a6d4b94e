//! Command-line entry point.
//!
//! The only command is `perft`, which enumerates the move tree of a FEN
//! position to a fixed depth and prints the counters. `--trace` switches
//! to a JSON dump of every visited position and its legal moves, used to
//! diff the move generator against another engine.

use std::env;
use std::process;
use std::time::Instant;

use chess_rules::perft::{perft, perft_parallel, trace_positions};

const USAGE: &str = "\
usage: chess_rules perft <fen> [depth] [options]

options:
    --parallel      partition the root's moves across all CPU cores
    --threads <n>   partition the root's moves across n worker threads
    --trace         dump every visited position and its moves as JSON

depth defaults to 3.";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("perft") => run_perft(&args[1..]),
        _ => {
            eprintln!("{USAGE}");
            process::exit(2);
        }
    }
}

fn run_perft(args: &[String]) {
    let mut fen: Option<&str> = None;
    let mut depth: i64 = 3;
    let mut threads: Option<usize> = None;
    let mut trace = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--trace" => trace = true,
            "--parallel" => threads = Some(num_cpus::get()),
            "--threads" => {
                let value = iter.next().unwrap_or_else(|| fail("--threads needs a value"));
                threads = Some(parse_or_fail(value, "--threads"));
            }
            other if fen.is_none() => fen = Some(other),
            other => depth = parse_or_fail(other, "depth"),
        }
    }

    let fen = fen.unwrap_or_else(|| fail(USAGE));

    if trace {
        let traces = trace_positions(fen, depth).unwrap_or_else(|err| fail(&err.to_string()));
        let json = serde_json::to_string_pretty(&traces).expect("trace serialization failed");
        println!("{json}");
        return;
    }

    chess_rules::initialize();
    let start = Instant::now();
    let results = match threads {
        Some(workers) => perft_parallel(fen, depth, workers),
        None => perft(fen, depth),
    };
    let elapsed = start.elapsed();

    let results = results.unwrap_or_else(|err| fail(&err.to_string()));
    println!("perft of depth {depth} on position `{fen}`");
    println!("{results}");
    println!();
    println!("time elapsed: {elapsed:?}");
}

fn parse_or_fail<T: std::str::FromStr>(value: &str, what: &str) -> T {
    value
        .parse()
        .unwrap_or_else(|_| fail(&format!("invalid value `{value}` for {what}")))
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}
