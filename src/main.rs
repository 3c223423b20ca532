mod export;
mod import;
mod store;

use clap::Parser;

use std::fs;
use std::path::PathBuf;
use std::process;

use crate::export::Export;
use crate::import::Importer;
use crate::store::PassStore;

/// Import a Bitwarden JSON export into a pass password store.
///
/// Creates one entry per login or secure note, under
/// `folder/domain/name` (logins) or `folder/notes/name` (notes).
#[derive(Parser)]
#[command(name = "bw2pass", version)]
struct Cli {
    /// Path to the Bitwarden export file
    export_file: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(), // --help / --version
        Err(_) => {
            println!("Usage: bw2pass <bitwarden_export.json>");
            process::exit(1);
        }
    };

    let data = match fs::read(&cli.export_file) {
        Ok(data) => data,
        Err(err) => {
            println!("Error reading file: {}", err);
            process::exit(1);
        }
    };
    let export: Export = match serde_json::from_slice(&data) {
        Ok(export) => export,
        Err(err) => {
            println!("Error parsing JSON: {}", err);
            process::exit(1);
        }
    };

    // insert failures are reported per entry and never flip the exit code
    let store = PassStore::default();
    Importer::new(&store, &export.folders).run(&export.items);
}
