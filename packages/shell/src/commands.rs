//! Command parsing and execution.
//!
//! Commands:
//! - `help` - List the commands
//! - `cd <dir>` - Enter a directory, or `cd ..` to go up
//! - `ls` - List the current directory
//! - `cat <file>` - Print a file
//! - `clear` - Clear the terminal

use crate::session::Session;
use crate::tree::{Node, Tree};

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Text to show the user.
    Output(String),
    /// A diagnostic about a command that could not run.
    Diagnostic(String),
    /// Clear the terminal.
    Clear,
    /// Nothing to show.
    Silent,
}

const HELP: &[(&str, &str)] = &[
    ("cd", "enter a directory"),
    ("ls", "display a directory's current options"),
    ("clear", "clear the terminal"),
    ("cat", "read a file"),
];

/// The `help` listing, one command per line.
pub fn format_help() -> String {
    HELP.iter()
        .map(|(cmd, desc)| format!("{} - {}", cmd, desc))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Execute a submitted line against the session and tree.
pub fn execute(line: &str, session: &mut Session, tree: &Tree) -> CommandResult {
    let mut parts = line.trim().split(' ');
    let cmd = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    match cmd {
        "help" => CommandResult::Output(format_help()),
        "cd" => cmd_cd(&args, session, tree),
        "ls" => cmd_ls(session, tree),
        "cat" => cmd_cat(&args, session, tree),
        "clear" => CommandResult::Clear,
        _ => CommandResult::Diagnostic(format!("Command not found: {}", line)),
    }
}

fn current_entries<'a>(
    session: &Session,
    tree: &'a Tree,
) -> Option<&'a std::collections::BTreeMap<String, Node>> {
    tree.resolve(session.current_path())?.entries()
}

fn cmd_cd(args: &[&str], session: &mut Session, tree: &Tree) -> CommandResult {
    let Some(&name) = args.first() else {
        return CommandResult::Diagnostic("No directory given.".to_string());
    };

    if name == ".." {
        return match session.leave() {
            Some(_) => CommandResult::Silent,
            None => CommandResult::Diagnostic("Already at root directory!".to_string()),
        };
    }

    let Some(entries) = current_entries(session, tree) else {
        return CommandResult::Diagnostic(format!("Invalid directory: {}", name));
    };

    match entries.get(name) {
        Some(node) if node.is_directory() => {
            session.enter(name);
            CommandResult::Silent
        }
        _ => CommandResult::Diagnostic(format!(
            "Directory not found or not a directory: {}",
            name
        )),
    }
}

fn cmd_ls(session: &Session, tree: &Tree) -> CommandResult {
    match current_entries(session, tree) {
        Some(entries) => CommandResult::Output(
            entries.keys().map(String::as_str).collect::<Vec<_>>().join("\r\n"),
        ),
        None => CommandResult::Diagnostic("Cannot list contents: invalid directory.".to_string()),
    }
}

fn cmd_cat(args: &[&str], session: &Session, tree: &Tree) -> CommandResult {
    let Some(&name) = args.first() else {
        return CommandResult::Diagnostic("No file selected.".to_string());
    };

    match current_entries(session, tree).and_then(|entries| entries.get(name)) {
        Some(Node::File(content)) => CommandResult::Output(content.clone()),
        Some(Node::Directory(_)) => CommandResult::Diagnostic(format!("{} is not a file.", name)),
        None => CommandResult::Diagnostic(format!("File not found: {}", name)),
    }
}
