use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use fretlab::api::{self, ChordReport};
use fretlab::note::PositionSpec;
use fretlab::tuning::{TuningTable, STANDARD};
use fretlab::FretError;

#[derive(Parser)]
#[command(name = "fretlab", about = "Name chords from fretboard positions")]
#[command(version)]
struct Cli {
    /// Extra tuning definitions (YAML) merged into the built-in table
    #[arg(long, global = true)]
    tunings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Name the chord formed by a set of positions
    Name {
        /// Positions as string:fret, optionally spelled (e.g. 1:3 2:2 3:1b)
        #[arg(required = true)]
        positions: Vec<PositionSpec>,

        /// Root position; defaults to the first position
        #[arg(long)]
        root: Option<PositionSpec>,

        /// Tuning id
        #[arg(long, default_value = STANDARD)]
        tuning: String,

        /// Prefer flat spellings
        #[arg(long)]
        flats: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available tunings
    Tunings,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FretError> {
    let tunings = load_tunings(cli.tunings.as_deref())?;

    match cli.command {
        Command::Name {
            positions,
            root,
            tuning,
            flats,
            json,
        } => {
            let report = api::analyze(&tunings, &tuning, &positions, root, flats)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Command::Tunings => {
            for tuning in tunings.iter() {
                println!(
                    "{:<12} {} ({} strings: {:?})",
                    tuning.id(),
                    tuning.display_name(),
                    tuning.string_count(),
                    tuning.open_strings()
                );
            }
        }
    }

    Ok(())
}

fn load_tunings(path: Option<&Path>) -> Result<TuningTable, FretError> {
    let mut tunings = TuningTable::default();
    if let Some(path) = path {
        let yaml = fs::read_to_string(path).map_err(|e| {
            FretError::ConfigError(format!("reading '{}': {}", path.display(), e))
        })?;
        tunings.extend_from_yaml(&yaml)?;
    }
    Ok(tunings)
}

fn print_report(report: &ChordReport) {
    match &report.name {
        Some(name) => {
            println!("{}", name);
            if let Some(generic) = &report.generic_name {
                println!("shape: {}", generic);
            }
        }
        None => println!("(no chord)"),
    }

    for (note, label) in report.notes.iter().zip(&report.labels) {
        let marker = if note.is_root { "*" } else { " " };
        println!(
            "{} {:>5}  {:<3}{:>2}  {}",
            marker,
            note.position.to_string(),
            note.display_name(false),
            note.octave,
            label.text
        );
    }
}
