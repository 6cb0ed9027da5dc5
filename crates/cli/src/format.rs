//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default on TTY): terse one-liners, e.g. `Borrowed "1984" (id 2)`
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare values for scripting, no message text

use biblio_core::Error;

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Terse message lines for people
    Human,
    /// Pretty-printed JSON
    Json,
    /// Bare values for scripts
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": err.to_string()
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Raw => format!("{}", err),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Listings(rows) => {
            if rows.is_empty() {
                return "(no books available)".to_string();
            }
            let mut lines = Vec::with_capacity(rows.len() + 1);
            lines.push(format!("Available books ({}):", rows.len()));
            for row in rows {
                lines.push(format!("  {}. {}", row.id, row.title));
            }
            lines.join("\n")
        }
        Output::Added(record) => format!(
            "Added \"{}\" by {} (id {})",
            record.title(),
            record.author(),
            record.id()
        ),
        Output::Removed(id) => format!("Removed book {}", id),
        Output::Borrowed { id, title } => format!("Borrowed \"{}\" (id {})", title, id),
        Output::Returned { id, title } => format!("Returned \"{}\" (id {})", title, id),
    }
}

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Listings(rows) => serde_json::json!({ "available": rows }),
        Output::Added(record) => serde_json::json!({ "added": record }),
        Output::Removed(id) => serde_json::json!({ "removed": id }),
        Output::Borrowed { id, title } => {
            serde_json::json!({ "borrowed": { "id": id, "title": title } })
        }
        Output::Returned { id, title } => {
            serde_json::json!({ "returned": { "id": id, "title": title } })
        }
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Listings(rows) => rows
            .iter()
            .map(|row| format!("{}\t{}", row.id, row.title))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Added(record) => record.id().to_string(),
        Output::Removed(id) => id.to_string(),
        Output::Borrowed { title, .. } | Output::Returned { title, .. } => title.clone(),
    }
}
