use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("sketchv")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "sketchv", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "sketchv", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "sketchv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
