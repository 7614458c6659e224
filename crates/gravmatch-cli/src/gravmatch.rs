//! Surface-gravity coincidence search CLI
//!
//! Usage: gravmatch [--accuracy <N>] [--operators <LIST>] [--file <PATH>]
//!
//! Example:
//!   gravmatch
//!   gravmatch --accuracy 2
//!   gravmatch --operators "/,*" --file bodies.txt
//!
//! Sweeps every ordered pair of bodies in the table (the embedded
//! Wikipedia table by default) and prints the results whose value lands
//! near a whole number, best match last.

use gravmatch_search::app::searcher::search_combinations;
use gravmatch_search::constants::{DEFAULT_ACCURACY, SOLAR_SYSTEM_TABLE};
use gravmatch_search::domain::body::parse_bodies;
use gravmatch_search::domain::operator::Operator;
use gravmatch_search::infra::report::write_report;
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--accuracy <N>] [--operators <LIST>] [--file <PATH>]",
        program
    );
    eprintln!(
        "  --accuracy <N>     decimal places of near-integer tolerance (default {})",
        DEFAULT_ACCURACY
    );
    eprintln!("  --operators <LIST> comma-separated operator symbols (default +,-,/,*,**)");
    eprintln!("  --file <PATH>      read the body table from a file instead of the embedded one");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut accuracy: u32 = DEFAULT_ACCURACY;
    let mut operators: Vec<Operator> = Operator::ALL.to_vec();
    let mut table_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--accuracy" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--accuracy requires a value");
                    usage(&args[0]);
                };
                accuracy = match value.parse() {
                    Ok(v) => v,
                    Err(_) => {
                        eprintln!("Error: Invalid accuracy value '{}'", value);
                        process::exit(1);
                    }
                };
            }
            "--operators" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--operators requires a value");
                    usage(&args[0]);
                };
                // An unknown symbol is fatal before any computation starts
                let parsed: Result<Vec<Operator>, _> = value
                    .split(',')
                    .map(|symbol| symbol.trim().parse())
                    .collect();
                operators = match parsed {
                    Ok(ops) => ops,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                };
                if operators.is_empty() {
                    eprintln!("Error: --operators list is empty");
                    process::exit(1);
                }
            }
            "--file" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    eprintln!("--file requires a value");
                    usage(&args[0]);
                };
                table_file = Some(PathBuf::from(value));
            }
            other => {
                eprintln!("Unknown option: {}", other);
                usage(&args[0]);
            }
        }
        i += 1;
    }

    let raw_table = match &table_file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => SOLAR_SYSTEM_TABLE.to_string(),
    };

    let bodies = match parse_bodies(&raw_table) {
        Ok(bodies) => bodies,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let results = search_combinations(&bodies, accuracy, &operators);

    // Best match last, closest to the reader's eye
    let mut display = results;
    display.reverse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &display, accuracy).and_then(|()| out.flush()) {
        eprintln!("Error writing report: {}", e);
        process::exit(1);
    }
}
