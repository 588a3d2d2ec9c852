//! Masthead CLI - Command-line interface for the Masthead publication graph.

use clap::Parser;
use masthead_cli::{logging, repl, script, Cli, Command, Config, Formatter};
use masthead_store::MemoryStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> masthead_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit config path must load; the default one falls back quietly
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    logging::init(&config.settings.log_level, cli.verbose);

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Each run owns a fresh store, and with it a fresh registry
    let mut store = MemoryStore::new();

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut store, &config, &formatter)?;
        }
        Some(Command::Run(args)) => {
            let stdout = std::io::stdout();
            script::run_file(&mut store, &args.script, &formatter, &mut stdout.lock())?;
        }
    }

    Ok(())
}
