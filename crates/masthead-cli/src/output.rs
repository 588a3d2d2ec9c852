//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use masthead_domain::{Article, Author, Magazine, PublicationStore};
use std::fmt::Display;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of authors.
    pub fn format_authors<S: PublicationStore>(&self, store: &S, authors: &[&Author]) -> Result<String> {
        let all = store.authors();
        let position = |author: &Author| all.iter().position(|a| a.id() == author.id()).map_or(0, |p| p + 1);

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = authors
                    .iter()
                    .map(|a| {
                        serde_json::json!({
                            "id": a.id().to_string(),
                            "name": a.name(),
                            "articles": a.articles().len(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(quiet(authors.iter().map(|a| a.id()))),
            OutputFormat::Table => {
                if authors.is_empty() {
                    return Ok(self.colorize("No authors found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "ID", "Name", "Articles"]);
                for &author in authors {
                    builder.push_record([
                        format!("#{}", position(author)),
                        short_id(author.id()),
                        author.name().to_string(),
                        author.articles().len().to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a list of magazines.
    pub fn format_magazines<S: PublicationStore>(
        &self,
        store: &S,
        magazines: &[&Magazine],
    ) -> Result<String> {
        let all = store.magazines();
        let position =
            |magazine: &Magazine| all.iter().position(|m| m.id() == magazine.id()).map_or(0, |p| p + 1);

        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = magazines
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id().to_string(),
                            "name": m.name(),
                            "category": m.category(),
                            "articles": m.articles().len(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(quiet(magazines.iter().map(|m| m.id()))),
            OutputFormat::Table => {
                if magazines.is_empty() {
                    return Ok(self.colorize("No magazines found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "ID", "Name", "Category", "Articles"]);
                for &magazine in magazines {
                    builder.push_record([
                        format!("#{}", position(magazine)),
                        short_id(magazine.id()),
                        magazine.name().to_string(),
                        magazine.category().to_string(),
                        magazine.articles().len().to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a list of articles, with author and magazine names.
    pub fn format_articles<S: PublicationStore>(
        &self,
        store: &S,
        articles: &[&Article],
    ) -> Result<String> {
        let all = store.articles();
        let position =
            |article: &Article| all.iter().position(|a| a.id() == article.id()).map_or(0, |p| p + 1);

        match self.format {
            OutputFormat::Json => {
                let json = articles
                    .iter()
                    .map(|a| -> Result<serde_json::Value> {
                        Ok(serde_json::json!({
                            "id": a.id().to_string(),
                            "title": a.title(),
                            "author": store.author(a.author())?.name(),
                            "magazine": store.magazine(a.magazine())?.name(),
                        }))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(quiet(articles.iter().map(|a| a.id()))),
            OutputFormat::Table => {
                if articles.is_empty() {
                    return Ok(self.colorize("No articles found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "ID", "Title", "Author", "Magazine"]);
                for &article in articles {
                    builder.push_record([
                        format!("#{}", position(article)),
                        short_id(article.id()),
                        article.title().to_string(),
                        store.author(article.author())?.name().to_string(),
                        store.magazine(article.magazine())?.name().to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a list of plain values, keeping "absent" distinct from "empty".
    pub fn format_values(&self, heading: &str, values: Option<&[&str]>) -> Result<String> {
        match (self.format, values) {
            (OutputFormat::Json, values) => Ok(serde_json::to_string_pretty(&values)?),
            (OutputFormat::Quiet, None) => Ok(String::new()),
            (OutputFormat::Quiet, Some(values)) => Ok(values.join("\n")),
            (OutputFormat::Table, None) => Ok(self.info(&format!("No {}.", heading.to_lowercase()))),
            (OutputFormat::Table, Some(values)) => {
                let mut builder = Builder::default();
                builder.push_record([heading]);
                for value in values {
                    builder.push_record([*value]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a creation result.
    pub fn created(&self, kind: &str, id: impl Display, label: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "created": kind,
                "id": id.to_string(),
                "label": label,
            }))?),
            OutputFormat::Quiet => Ok(id.to_string()),
            OutputFormat::Table => Ok(self.success(&format!("Created {} '{}' ({})", kind, label, id))),
        }
    }

    /// Format the result of a mutation that creates nothing.
    pub fn updated(&self, message: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "status": "ok",
                "message": message,
            }))?),
            OutputFormat::Quiet => Ok(String::new()),
            OutputFormat::Table => Ok(self.success(message)),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Truncate an id for readability
fn short_id(id: impl Display) -> String {
    id.to_string().chars().take(8).collect()
}

fn quiet<T: Display>(ids: impl Iterator<Item = T>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join("\n")
}
