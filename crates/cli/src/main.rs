//! Biblio CLI — console front desk for the library catalog.
//!
//! Three modes:
//! - **Shell mode**: `biblio [flags] COMMAND` — single command, exit
//! - **REPL mode**: `biblio [flags]` — interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "borrow 2" | biblio` — line-by-line from stdin
//!
//! The role flag gates the command subset: readers list/borrow/return,
//! librarians list/add/remove.

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;
use std::str::FromStr;

use biblio_catalog::Catalog;
use biblio_core::Role;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_command;
use state::SessionState;

fn main() {
    // Operation events from the catalog go to stderr, filtered by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = build_cli();
    let matches = cli.get_matches();

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    // Session identity
    let role = match matches.get_one::<String>("role") {
        Some(raw) => match Role::from_str(raw) {
            Ok(role) => role,
            Err(e) => {
                eprintln!("(error) {}", e);
                process::exit(1);
            }
        },
        None => Role::Reader,
    };
    let name = matches
        .get_one::<String>("name")
        .cloned()
        .unwrap_or_else(|| "guest".to_string());

    // A fresh catalog every run: the default shelf, or empty on request
    let catalog = if matches.get_flag("empty") {
        Catalog::new()
    } else {
        Catalog::seeded()
    };
    let state = SessionState::new(catalog, name, role);

    // Dispatch mode
    if matches.subcommand().is_some() {
        // Shell mode: parse, execute, format, exit
        let exit_code = run_shell_mode(&matches, &state, output_mode);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        // REPL mode
        repl::run_repl(&state, output_mode);
    } else {
        // Pipe mode
        let exit_code = repl::run_pipe(&state, output_mode);
        process::exit(exit_code);
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &SessionState, mode: OutputMode) -> i32 {
    match matches_to_command(matches, state.role()) {
        Ok(cmd) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                0
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                1
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
