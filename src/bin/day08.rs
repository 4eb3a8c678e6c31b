use std::io;
use std::io::prelude::*;

use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use segdecode::{count_unique_lengths, decode_lines, BatchReport, Observation, Strategy};

fn part1(observations: &[Observation]) {
    println!("Day 8 part 1: {}", count_unique_lengths(observations));
}

fn part2(lines: &[String], strategy: Strategy) -> BatchReport {
    let report = decode_lines(lines, strategy);
    println!("Day 8 part 2: {}", report.sum());
    report
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

fn run() -> Result<(), String> {
    init_tracing();

    let strategy: Strategy = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Strategy::default(),
    };
    event!(Level::INFO, "decoding with strategy {}", strategy);

    let lines: Vec<String> = io::BufReader::new(io::stdin())
        .lines()
        .collect::<Result<Vec<String>, io::Error>>()
        .map_err(|e| format!("failed to read input: {}", e))?;

    // Lines which don't parse are reported by part 2.
    let observations: Vec<Observation> = lines
        .iter()
        .filter_map(|line| line.parse::<Observation>().ok())
        .collect();
    part1(&observations);
    let report = part2(&lines, strategy);

    for (index, e) in report.failures.iter() {
        eprintln!("line {}: {}", index + 1, e);
    }
    if report.is_complete() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} observations could not be decoded",
            report.failures.len(),
            report.failures.len() + report.values.len()
        ))
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
