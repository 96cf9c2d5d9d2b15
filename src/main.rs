// src/main.rs - drillbook entry point

use clap::Parser;

use drillbook::cli::run::execute;
use drillbook::cli::{error_hint, Cli};
use drillbook::infra::config::Config;
use drillbook::infra::logger;
use drillbook::io::input::{read_source, Input};

fn main() {
    // Initialize logging (respects DRILLBOOK_LOG / RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run() {
        eprintln!("error: {e}");
        if let Some(hint) = error_hint(&e) {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    let format = cli.format.unwrap_or(config.output.format);

    let raw = if cli.command.needs_input() {
        read_source(cli.input.as_deref())?
    } else {
        String::new()
    };
    let mut input = Input::new(&raw, cli.counted || config.input.counted);

    let output = execute(&cli.command, &mut input, &config)?;
    println!("{}", output.render(format)?);
    Ok(())
}
