use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use clock_core::{
    CellResolver, ClockError, ClockState, ClockTime, ErrorCode, LetterGrid, PhrasingKind,
    TimeEncoder, WordTable,
};
use clock_runtime::{time_source::clock_time_of, SystemClock, TimeSource};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(name = "wordclock-tools", about = "Inspect the word clock without a window")]
struct Cli {
    #[arg(long, global = true)]
    phrasing: Option<PhrasingKind>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the clock face as text.
    Show {
        #[arg(long, value_parser = parse_time)]
        time: Option<ClockTime>,
    },
    /// Print the lit phrase-words.
    Words {
        #[arg(long, value_parser = parse_time)]
        time: Option<ClockTime>,
        #[arg(long)]
        json: bool,
    },
    /// Verify the grid, word table and phrasing tables.
    Check,
}

fn parse_time(raw: &str) -> Result<ClockTime, String> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|err| format!("expected HH:MM, got '{raw}': {err}"))?;
    clock_time_of(&time).map_err(|err| err.to_string())
}

fn time_or_now(time: Option<ClockTime>) -> Result<ClockTime> {
    match time {
        Some(time) => Ok(time),
        None => SystemClock.now().context("failed to read the system clock"),
    }
}

fn check(kind: PhrasingKind) -> Result<String> {
    let grid = LetterGrid::standard()?;
    let table = WordTable::standard(&grid)?;
    let placements = table.len();
    let resolver = CellResolver::new(table);
    let encoder = TimeEncoder::new(kind);

    let verified = resolver
        .verify_covers(encoder.phrasing())
        .with_context(|| format!("{kind} phrasing references unplaced words"))?;

    for time in ClockTime::all_day() {
        resolver
            .resolve(&encoder.encode_time(time).words)
            .with_context(|| format!("{kind} phrasing fails at {time}"))?;
    }

    Ok(format!(
        "{kind}: {placements} placements on a {}x{} grid, {verified} words verified, 1440 minutes resolved",
        grid.columns(),
        grid.rows()
    ))
}

/// Broken built-in tables exit with 2, rejected times with 3.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ClockError>() {
        Some(clock) if clock.is_data_error() => 2,
        Some(clock) if clock.code() == ErrorCode::OutOfRange => 3,
        _ => 1,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let kind = cli.phrasing.unwrap_or_default();

    match cli.command {
        Command::Show { time } => {
            let mut clock = ClockState::new(kind)?;
            let state = clock.tick_time(time_or_now(time)?)?;
            println!("{} ({})", state.time, clock.phrasing());
            println!("{}", render::render_face(clock.grid(), &state));
        }
        Command::Words { time, json } => {
            let mut clock = ClockState::new(kind)?;
            let state = clock.tick_time(time_or_now(time)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&*state)?);
            } else {
                let words: Vec<&str> = state.words.iter().map(|word| word.key()).collect();
                println!("{} {} (+{})", state.time, words.join(" "), state.corners);
            }
        }
        Command::Check => match cli.phrasing {
            Some(kind) => println!("{}", check(kind)?),
            None => {
                for kind in [PhrasingKind::Standard, PhrasingKind::Regional] {
                    println!("{}", check(kind)?);
                }
            }
        },
    }

    Ok(())
}
