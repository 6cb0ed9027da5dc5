//! ArgMatches → command translation and role gating.
//!
//! Role checks happen here, before anything reaches the catalog: a command
//! outside the active role's subset is rejected with a user-facing message.

use clap::ArgMatches;

use biblio_core::{BookId, CatalogOp, Role};

/// A catalog command requested by the session user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// List available books
    List,
    /// Borrow a book by id
    Borrow {
        /// Target book id
        id: BookId,
    },
    /// Return a borrowed book by id
    Return {
        /// Target book id
        id: BookId,
    },
    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
    },
    /// Remove a book by id
    Remove {
        /// Target book id
        id: BookId,
    },
}

impl CliCommand {
    /// The catalog operation this command maps to.
    pub fn op(&self) -> CatalogOp {
        match self {
            CliCommand::List => CatalogOp::List,
            CliCommand::Borrow { .. } => CatalogOp::Borrow,
            CliCommand::Return { .. } => CatalogOp::Return,
            CliCommand::Add { .. } => CatalogOp::Add,
            CliCommand::Remove { .. } => CatalogOp::Remove,
        }
    }

    /// The verb as typed at the prompt.
    pub fn verb(&self) -> &'static str {
        verb_for(self.op())
    }
}

/// The prompt verb for a catalog operation.
pub fn verb_for(op: CatalogOp) -> &'static str {
    match op {
        CatalogOp::List => "list",
        CatalogOp::Borrow => "borrow",
        CatalogOp::Return => "return",
        CatalogOp::Add => "add",
        CatalogOp::Remove => "remove",
    }
}

/// REPL meta-commands, handled outside the clap tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    /// Leave the REPL
    Quit,
    /// Clear the screen
    Clear,
    /// Show help, optionally for one command
    Help {
        /// Command to show help for
        command: Option<String>,
    },
    /// Show the session user and role
    WhoAmI,
}

/// Check whether a REPL line is a meta-command.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "clear" => Some(MetaCommand::Clear),
        "whoami" => Some(MetaCommand::WhoAmI),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(String::from),
        }),
        _ => None,
    }
}

/// Translate parsed matches into a command, enforcing the role's subset.
pub fn matches_to_command(matches: &ArgMatches, role: Role) -> Result<CliCommand, String> {
    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| "missing command".to_string())?;

    let cmd = match name {
        "list" => CliCommand::List,
        "borrow" => CliCommand::Borrow {
            id: required_id(sub)?,
        },
        "return" => CliCommand::Return {
            id: required_id(sub)?,
        },
        "add" => CliCommand::Add {
            title: required_string(sub, "title")?,
            author: required_string(sub, "author")?,
        },
        "remove" => CliCommand::Remove {
            id: required_id(sub)?,
        },
        other => return Err(format!("unknown command: {}", other)),
    };

    if !role.permits(cmd.op()) {
        return Err(format!(
            "'{}' is not available to {}s",
            cmd.verb(),
            role
        ));
    }

    Ok(cmd)
}

fn required_id(matches: &ArgMatches) -> Result<BookId, String> {
    matches
        .get_one::<u64>("id")
        .map(|raw| BookId::new(*raw))
        .ok_or_else(|| "missing book id".to_string())
}

fn required_string(matches: &ArgMatches, arg: &str) -> Result<String, String> {
    matches
        .get_one::<String>(arg)
        .cloned()
        .ok_or_else(|| format!("missing {}", arg))
}
