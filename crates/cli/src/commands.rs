//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, Command};

/// Build the complete CLI command tree.
///
/// This is shared between shell mode and REPL mode.
pub fn build_cli() -> Command {
    Command::new("biblio")
        .about("Console front desk for the Biblio library catalog")
        .subcommand_required(false)
        .arg(
            Arg::new("name")
                .long("name")
                .help("Session user name (default: guest)")
                .global(true),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .help("Session role: reader or librarian (default: reader)")
                .global(true),
        )
        .arg(
            Arg::new("empty")
                .long("empty")
                .help("Start from an empty catalog instead of the default shelf")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(clap::ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (bare values, no message text)")
                .action(clap::ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_list())
        .subcommand(build_borrow())
        .subcommand(build_return())
        .subcommand(build_add())
        .subcommand(build_remove())
}

/// Build a command tree for REPL mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_list())
        .subcommand(build_borrow())
        .subcommand(build_return())
        .subcommand(build_add())
        .subcommand(build_remove())
}

fn build_list() -> Command {
    Command::new("list").about("List available books")
}

fn build_borrow() -> Command {
    Command::new("borrow").about("Borrow a book").arg(
        Arg::new("id")
            .value_name("ID")
            .required(true)
            .value_parser(clap::value_parser!(u64))
            .help("Book id to borrow"),
    )
}

fn build_return() -> Command {
    Command::new("return").about("Return a borrowed book").arg(
        Arg::new("id")
            .value_name("ID")
            .required(true)
            .value_parser(clap::value_parser!(u64))
            .help("Book id to return"),
    )
}

fn build_add() -> Command {
    Command::new("add")
        .about("Add a book to the catalog")
        .arg(
            Arg::new("title")
                .value_name("TITLE")
                .required(true)
                .help("Book title (quote multi-word titles)"),
        )
        .arg(
            Arg::new("author")
                .value_name("AUTHOR")
                .required(true)
                .help("Author name (quote multi-word names)"),
        )
}

fn build_remove() -> Command {
    Command::new("remove").about("Remove a book from the catalog").arg(
        Arg::new("id")
            .value_name("ID")
            .required(true)
            .value_parser(clap::value_parser!(u64))
            .help("Book id to remove"),
    )
}
