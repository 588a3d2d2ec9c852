//! Command parsing and execution.
//!
//! The REPL and the script runner share one line grammar: a command word
//! followed by whitespace-separated arguments, where the last argument of a
//! command swallows the rest of the line (so titles and categories may
//! contain spaces). Any argument may be wrapped in double quotes, which is
//! the only way to give a leading argument that contains spaces:
//!
//! ```text
//! magazine "New Yorker" Culture
//! move-author "#1 tips for spring" Carry
//! ```

pub mod create;
pub mod query;
pub mod refs;
pub mod update;

use crate::error::{CliError, Result};
use crate::output::Formatter;
use masthead_domain::PublicationStore;

pub use self::create::{execute_article, execute_author, execute_magazine};
pub use self::query::execute_query;
pub use self::update::{execute_move, execute_recategorize, execute_rename};

/// A parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Leave the REPL or stop the script
    Exit,
    /// Print the command reference
    Help,
    /// Operate on the store
    Action(Action),
}

/// An operation on the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `author <name...>`
    Author { name: String },
    /// `magazine <name> <category...>`
    Magazine { name: String, category: String },
    /// `article <author> <magazine> <title...>`
    Article {
        author: String,
        magazine: String,
        title: String,
    },
    /// `rename <magazine> <name>`
    Rename { magazine: String, name: String },
    /// `recategorize <magazine> <category...>`
    Recategorize { magazine: String, category: String },
    /// `move-author <article> <author>`
    MoveAuthor { article: String, author: String },
    /// `move-magazine <article> <magazine>`
    MoveMagazine { article: String, magazine: String },
    /// A read-only query
    Query(Query),
}

/// A read-only query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `authors`
    Authors,
    /// `magazines`
    Magazines,
    /// `articles`
    Articles,
    /// `written-by <author>`
    WrittenBy(String),
    /// `published-in <magazine>`
    PublishedIn(String),
    /// `magazines-of <author>`
    MagazinesOf(String),
    /// `topics <author>`
    Topics(String),
    /// `contributors <magazine>`
    Contributors(String),
    /// `titles <magazine>`
    Titles(String),
    /// `regulars <magazine>`
    Regulars(String),
    /// `top`
    Top,
}

/// Command reference shown by `help`.
pub const HELP: &str = "\
Entity references: #N (creation order), a full UUID, or an exact name.
Quote arguments that contain spaces: magazine \"New Yorker\" Culture

  author <name...>                        Create an author
  magazine <name> <category...>           Create a magazine
  article <author> <magazine> <title...>  Write an article
  rename <magazine> <name>                Rename a magazine
  recategorize <magazine> <category...>   Change a magazine's category
  move-author <article> <author>          Move an article to another author
  move-magazine <article> <magazine>      Move an article to another magazine

  authors | magazines | articles          List entities
  written-by <author>                     Articles by an author
  published-in <magazine>                 Articles in a magazine
  magazines-of <author>                   Magazines an author wrote for
  topics <author>                         Categories an author wrote in
  contributors <magazine>                 Authors of a magazine
  titles <magazine>                       Article titles of a magazine
  regulars <magazine>                     Authors with more than 2 articles
  top                                     Magazine with the most articles

  help | exit";

/// Parse one input line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "exit" | "quit" | "q" => ReplCommand::Exit,
        "help" | "?" => ReplCommand::Help,
        "author" => ReplCommand::Action(Action::Author {
            name: remainder(rest, "author <name...>")?,
        }),
        "magazine" => {
            let [name, category] = args(rest, "magazine <name> <category...>")?;
            ReplCommand::Action(Action::Magazine { name, category })
        }
        "article" => {
            let [author, magazine, title] = args(rest, "article <author> <magazine> <title...>")?;
            ReplCommand::Action(Action::Article {
                author,
                magazine,
                title,
            })
        }
        "rename" => {
            let [magazine, name] = args(rest, "rename <magazine> <name>")?;
            ReplCommand::Action(Action::Rename { magazine, name })
        }
        "recategorize" => {
            let [magazine, category] = args(rest, "recategorize <magazine> <category...>")?;
            ReplCommand::Action(Action::Recategorize { magazine, category })
        }
        "move-author" => {
            let [article, author] = args(rest, "move-author <article> <author>")?;
            ReplCommand::Action(Action::MoveAuthor { article, author })
        }
        "move-magazine" => {
            let [article, magazine] = args(rest, "move-magazine <article> <magazine>")?;
            ReplCommand::Action(Action::MoveMagazine { article, magazine })
        }
        "authors" => ReplCommand::Action(Action::Query(Query::Authors)),
        "magazines" => ReplCommand::Action(Action::Query(Query::Magazines)),
        "articles" => ReplCommand::Action(Action::Query(Query::Articles)),
        "top" => ReplCommand::Action(Action::Query(Query::Top)),
        "written-by" => target_query(Query::WrittenBy, rest, "written-by <author>")?,
        "published-in" => target_query(Query::PublishedIn, rest, "published-in <magazine>")?,
        "magazines-of" => target_query(Query::MagazinesOf, rest, "magazines-of <author>")?,
        "topics" => target_query(Query::Topics, rest, "topics <author>")?,
        "contributors" => target_query(Query::Contributors, rest, "contributors <magazine>")?,
        "titles" => target_query(Query::Titles, rest, "titles <magazine>")?,
        "regulars" => target_query(Query::Regulars, rest, "regulars <magazine>")?,
        _ => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                word
            )))
        }
    };

    Ok(Some(command))
}

/// Run one action against the store and render its output.
pub fn execute<S: PublicationStore>(
    store: &mut S,
    action: Action,
    formatter: &Formatter,
) -> Result<String> {
    match action {
        Action::Author { name } => execute_author(store, &name, formatter),
        Action::Magazine { name, category } => execute_magazine(store, &name, &category, formatter),
        Action::Article {
            author,
            magazine,
            title,
        } => execute_article(store, &author, &magazine, &title, formatter),
        Action::Rename { magazine, name } => execute_rename(store, &magazine, &name, formatter),
        Action::Recategorize { magazine, category } => {
            execute_recategorize(store, &magazine, &category, formatter)
        }
        Action::MoveAuthor { article, author } => {
            execute_move(store, &article, update::Target::Author(&author), formatter)
        }
        Action::MoveMagazine { article, magazine } => {
            execute_move(store, &article, update::Target::Magazine(&magazine), formatter)
        }
        Action::Query(query) => execute_query(store, &query, formatter),
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

fn remainder(rest: &str, usage: &str) -> Result<String> {
    let rest = unquote(rest);
    if rest.is_empty() {
        return Err(usage_error(usage));
    }
    Ok(rest.to_string())
}

/// Split `rest` into `N` arguments, the last one taking the remainder.
fn args<const N: usize>(rest: &str, usage: &str) -> Result<[String; N]> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    let mut rest = rest;

    for (idx, slot) in out.iter_mut().enumerate() {
        if idx + 1 == N {
            *slot = remainder(rest, usage)?;
        } else {
            if rest.is_empty() {
                return Err(usage_error(usage));
            }
            let (arg, tail) = split_arg(rest, usage)?;
            *slot = arg.to_string();
            rest = tail;
        }
    }

    Ok(out)
}

/// Take one argument off the front of `rest`, honouring double quotes.
fn split_arg<'a>(rest: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    let Some(quoted) = rest.strip_prefix('"') else {
        return Ok(split_word(rest));
    };

    // The closing quote must end the argument
    let closed = quoted.split_once('"').filter(|(arg, tail)| {
        !arg.is_empty() && (tail.is_empty() || tail.starts_with(char::is_whitespace))
    });

    match closed {
        Some((arg, tail)) => Ok((arg, tail.trim_start())),
        None => Err(CliError::InvalidInput(format!(
            "Unbalanced quotes. Usage: {}",
            usage
        ))),
    }
}

/// Strip one pair of surrounding double quotes.
fn unquote(arg: &str) -> &str {
    arg.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(arg)
}

fn target_query(make: fn(String) -> Query, rest: &str, usage: &str) -> Result<ReplCommand> {
    let [target] = args(rest, usage)?;
    Ok(ReplCommand::Action(Action::Query(make(target))))
}

fn usage_error(usage: &str) -> CliError {
    CliError::InvalidInput(format!("Usage: {}", usage))
}
