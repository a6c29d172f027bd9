//! Parameter editor CLI.
//!
//! Provides the `paramedit` binary, a host for editing sessions. It supplies
//! a dataset (a JSON file, or the built-in sample), optionally applies a
//! script of editor events, and prints the resulting records as JSON.
//!
//! The dataset path comes from `--dataset`, falling back to the
//! `PARAMEDIT_DATASET` environment variable, then to the built-in sample.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use paramedit_core::Dataset;
use paramedit_store::{EditorError, EditorEvent, ParamEditor};

/// Parameter editor.
#[derive(Parser)]
#[command(name = "paramedit", about = "Reconcile and edit typed parameters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the records reconciled from a dataset.
    Show {
        /// Path to the dataset JSON file.
        #[arg(short, long)]
        dataset: Option<PathBuf>,
    },
    /// Apply a script of editor events and print the resulting records.
    Apply {
        /// Path to the dataset JSON file.
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Path to a JSON array of events.
        #[arg(short, long)]
        events: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Show { dataset } => run_show(dataset),
        Commands::Apply { dataset, events } => run_apply(dataset, &events),
    };
    process::exit(exit_code);
}

/// Execute the show subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O or parse error.
fn run_show(dataset: Option<PathBuf>) -> i32 {
    let editor = match open_editor(dataset) {
        Ok(editor) => editor,
        Err(code) => return code,
    };
    print_records(&editor)
}

/// Execute the apply subcommand.
///
/// Returns exit code: 0 = success, 1 = event rejected,
/// 3 = I/O or parse error.
fn run_apply(dataset: Option<PathBuf>, events_path: &Path) -> i32 {
    let mut editor = match open_editor(dataset) {
        Ok(editor) => editor,
        Err(code) => return code,
    };

    let events: Vec<EditorEvent> = match read_file(events_path)
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(events) => events,
        Err(msg) => {
            eprintln!(
                "Error: failed to read events '{}': {}",
                events_path.display(),
                msg
            );
            return 3;
        }
    };

    for (index, event) in events.into_iter().enumerate() {
        match editor.apply(event) {
            Ok(()) => {}
            Err(EditorError::Draft(e)) => {
                eprintln!("Error: event {} rejected: {}", index, e);
                return 1;
            }
            Err(e) => {
                eprintln!("Error: event {} failed: {}", index, e);
                return 3;
            }
        }
    }

    print_records(&editor)
}

/// Opens an editor over the dataset at `path`, the env fallback, or the
/// built-in sample. On failure, returns the exit code to use.
fn open_editor(path: Option<PathBuf>) -> Result<ParamEditor, i32> {
    let path = path.or_else(|| std::env::var_os("PARAMEDIT_DATASET").map(PathBuf::from));

    let dataset = match path {
        Some(path) => {
            let loaded = read_file(&path)
                .and_then(|text| Dataset::from_json(&text).map_err(|e| e.to_string()));
            match loaded {
                Ok(dataset) => dataset,
                Err(msg) => {
                    eprintln!("Error: failed to load dataset '{}': {}", path.display(), msg);
                    return Err(3);
                }
            }
        }
        None => {
            tracing::info!("no dataset given, using built-in sample");
            Dataset::sample()
        }
    };

    Ok(ParamEditor::from_dataset(&dataset))
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| e.to_string())
}

/// Print the current records as JSON to stdout for machine-readable output.
fn print_records(editor: &ParamEditor) -> i32 {
    match editor.dump() {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            3
        }
    }
}
