//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{self, ReplCommand, HELP};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use masthead_domain::PublicationStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

/// Run the interactive REPL over `store`.
pub fn run_repl<S: PublicationStore>(store: &mut S, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Masthead REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // History is best-effort: a missing home directory only disables it
    let history_path = Config::history_path().ok();
    if let Some(path) = &history_path {
        if editor.load_history(path).is_err() {
            debug!(path = %path.display(), "No REPL history loaded");
        }
    }
    info!("REPL session started");

    loop {
        match editor.readline("masthead> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match commands::parse_line(line) {
                    Ok(None) => {}
                    Ok(Some(ReplCommand::Exit)) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(Some(ReplCommand::Help)) => {
                        println!("{}", HELP);
                    }
                    Ok(Some(ReplCommand::Action(action))) => {
                        match commands::execute(store, action, formatter) {
                            Ok(output) if output.is_empty() => {}
                            Ok(output) => println!("{}", output),
                            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    if let Some(path) = &history_path {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        editor.save_history(path).ok();
    }
    info!("REPL session ended");

    Ok(())
}
