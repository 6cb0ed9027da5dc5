//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use biblio_core::{CatalogOp, Role};

use crate::commands::build_repl_cmd;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_command, verb_for, MetaCommand};
use crate::state::SessionState;

/// Run the interactive REPL.
pub fn run_repl(state: &SessionState, mode: OutputMode) {
    print_greeting(state);

    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let helper = BiblioHelper::new(state.role());
    let mut rl: Editor<BiblioHelper, _> = Editor::with_config(config).unwrap();
    rl.set_helper(Some(helper));

    // Load history
    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                // Check meta-commands first
                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Clear => {
                            // ANSI clear screen
                            print!("\x1B[2J\x1B[1;1H");
                        }
                        MetaCommand::WhoAmI => {
                            println!("{} ({})", state.name(), state.role());
                        }
                        MetaCommand::Help { command } => {
                            print_help(state.role(), command.as_deref());
                        }
                    }
                    continue;
                }

                // Tokenize with shlex (respects quotes)
                let tokens = match shlex::split(trimmed) {
                    Some(t) => t,
                    None => {
                        eprintln!("(error) Invalid quoting");
                        continue;
                    }
                };

                if tokens.is_empty() {
                    continue;
                }

                // Parse via clap
                let cmd = build_repl_cmd();
                let matches = match cmd.try_get_matches_from(tokens) {
                    Ok(m) => m,
                    Err(e) => {
                        // clap error — show help text
                        eprintln!("{}", e);
                        continue;
                    }
                };

                execute_action(&matches, state, mode);
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    // Save history
    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    println!("Have a good day!");
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens = match shlex::split(trimmed) {
            Some(t) => t,
            None => {
                eprintln!("(error) Invalid quoting: {}", trimmed);
                exit_code = 1;
                continue;
            }
        };

        if tokens.is_empty() {
            continue;
        }

        let cmd = build_repl_cmd();
        let matches = match cmd.try_get_matches_from(tokens) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                exit_code = 1;
                continue;
            }
        };

        if !execute_action(&matches, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Execute a parsed command. Returns true on success, false on error.
fn execute_action(matches: &clap::ArgMatches, state: &SessionState, mode: OutputMode) -> bool {
    match matches_to_command(matches, state.role()) {
        Ok(cmd) => match state.execute(cmd) {
            Ok(output) => {
                let formatted = format_output(&output, mode);
                if !formatted.is_empty() {
                    println!("{}", formatted);
                }
                true
            }
            Err(e) => {
                eprintln!("{}", format_error(&e, mode));
                false
            }
        },
        Err(e) => {
            eprintln!("(error) {}", e);
            false
        }
    }
}

fn print_greeting(state: &SessionState) {
    println!("Welcome to the library, {}!", state.name());
    println!(
        "Signed in as {}. Type 'help' for commands, 'quit' to leave.",
        state.role()
    );
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.biblio_history", h))
}

fn print_help(role: Role, command: Option<&str>) {
    if let Some(cmd) = command {
        // Show help for a specific command
        let cli = build_repl_cmd();
        match cli.try_get_matches_from(vec![cmd, "--help"]) {
            Ok(_) => {}
            Err(e) => println!("{}", e),
        }
    } else {
        println!("Commands available to {}s:", role);
        for op in role.operations() {
            match op {
                CatalogOp::List => println!("  list                  List available books"),
                CatalogOp::Borrow => println!("  borrow <ID>           Borrow a book"),
                CatalogOp::Return => println!("  return <ID>           Return a borrowed book"),
                CatalogOp::Add => println!("  add <TITLE> <AUTHOR>  Add a book to the catalog"),
                CatalogOp::Remove => println!("  remove <ID>           Remove a book from the catalog"),
            }
        }
        println!();
        println!("Meta-commands:");
        println!("  help [command]   Show help");
        println!("  whoami           Show session user and role");
        println!("  clear            Clear screen");
        println!("  quit / exit      Leave the front desk");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Meta-commands offered alongside the role's catalog verbs.
const META_COMMANDS: &[&str] = &["help", "whoami", "quit", "exit", "clear"];

struct BiblioHelper {
    commands: Vec<&'static str>,
}

impl BiblioHelper {
    fn new(role: Role) -> Self {
        let mut commands: Vec<&'static str> =
            role.operations().iter().map(|op| verb_for(*op)).collect();
        commands.extend_from_slice(META_COMMANDS);
        Self { commands }
    }
}

impl Helper for BiblioHelper {}
impl Validator for BiblioHelper {}
impl Highlighter for BiblioHelper {}
impl Hinter for BiblioHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for BiblioHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(' ');

        // Only the command word completes; ids and titles are free-form
        if parts.is_empty() || (parts.len() == 1 && !trailing_space) {
            let prefix = parts.first().copied().unwrap_or("");
            let start = pos - prefix.len();
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((start, candidates))
        } else {
            Ok((pos, vec![]))
        }
    }
}
