//! Elementary cellular automaton runner.
//!
//! Reads an automaton description from a file or standard input and prints
//! one line per generation.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

mod config;

use config::{Config, DisplayConfig, LogConfig};

#[derive(Parser)]
#[command(name = "eca", about = "Run an elementary cellular automaton")]
struct Args {
    /// Path to the automaton description (default: standard input).
    input: Option<PathBuf>,

    /// Character for live cells.
    #[arg(long, default_value_t = eca::automaton::LIVE_CHAR)]
    live: char,

    /// Character for dead cells.
    #[arg(long, default_value_t = eca::automaton::DEAD_CHAR)]
    dead: char,

    /// Log more (repeat for even more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
impl Args {
    fn config(&self) -> Config {
        Config {
            display: DisplayConfig {
                live_char: self.live,
                dead_char: self.dead,
            },
            log: LogConfig::from_verbosity(self.verbose),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.config();

    SimpleLogger::new()
        .with_level(config.log.level)
        .init()
        .context("Failed to initialize logger")?;

    let src = read_input(args.input.as_ref())?;

    let generations = match eca::parse(&src).and_then(eca::run) {
        Ok(generations) => generations,
        Err(e) => {
            eprintln!("{}", e.with_source(&src));
            process::exit(1);
        }
    };

    info!("Printing {} generations", generations.len());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for generation in generations {
        let line = generation.render(config.display.live_char, config.display.dead_char);
        writeln!(out, "{}", line).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}

/// Reads the whole input, keeping line breaks so that error positions match
/// the source.
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut src = String::new();
            io::stdin()
                .read_to_string(&mut src)
                .context("Failed to read standard input")?;
            Ok(src)
        }
    }
}
