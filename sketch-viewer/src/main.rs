//! Standalone binary for the sketch interactive viewer.
//! Usage:
//!   sketchv <path> [--config <file>]

mod viewer;

use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("sketchv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for sketch construction scenes")
        .arg(
            Arg::new("path")
                .help("Path to the sketch file to open")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let loader = match matches.get_one::<String>("config") {
        Some(config_path) => sketch_config::Loader::new().with_file(config_path),
        None => sketch_config::Loader::new(),
    };
    let config = loader.build().unwrap_or_else(|err| {
        eprintln!("Configuration error: {err}");
        std::process::exit(1);
    });

    if let Err(err) = viewer::viewer::run_viewer(PathBuf::from(path), config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
