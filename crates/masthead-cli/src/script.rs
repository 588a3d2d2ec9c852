//! Script mode: run REPL commands from a file.

use crate::commands::{self, ReplCommand, HELP};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use masthead_domain::PublicationStore;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Run the script at `path`, writing command output to `out`.
pub fn run_file<S, W, P>(store: &mut S, path: P, formatter: &Formatter, out: &mut W) -> Result<usize>
where
    S: PublicationStore,
    W: Write,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    debug!(script = %path.as_ref().display(), "Running script");
    run_script(store, BufReader::new(file), formatter, out)
}

/// Execute each line of `reader` in order.
///
/// Blank lines and `#` comments are skipped and `exit` stops early. The
/// first failing line aborts the run; commands before it stay applied.
/// Returns the number of commands executed.
pub fn run_script<S, R, W>(store: &mut S, reader: R, formatter: &Formatter, out: &mut W) -> Result<usize>
where
    S: PublicationStore,
    R: BufRead,
    W: Write,
{
    let mut executed = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let at_line = |source: CliError| {
            warn!(line = idx + 1, error = %source, "Script line failed");
            CliError::Script {
                line: idx + 1,
                source: Box::new(source),
            }
        };

        let action = match commands::parse_line(&line).map_err(at_line)? {
            None => continue,
            Some(ReplCommand::Exit) => break,
            Some(ReplCommand::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Some(ReplCommand::Action(action)) => action,
        };

        let output = commands::execute(store, action, formatter).map_err(at_line)?;
        if !output.is_empty() {
            writeln!(out, "{}", output)?;
        }
        executed += 1;
    }

    Ok(executed)
}
