use crate::constraints::ConstraintSet;
use crate::session::{AssistantInterface, UserAction};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

const GRID_COLUMNS: usize = 5;

/// Wordle Assistant: filter a five-letter word list by what you know so far
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word list (JSON array, or one word per line)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Known letters by position, e.g. _RA_E
    #[arg(short = 'k', long = "known")]
    pub known: Option<String>,

    /// Letters in the word, position unknown
    #[arg(short = 'p', long = "present")]
    pub present: Option<String>,

    /// Letters not in the word
    #[arg(short = 'x', long = "exclude")]
    pub excluded: Option<String>,

    /// Line-based prompt instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// True when the constraints were given on the command line.
    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        self.known.is_some() || self.present.is_some() || self.excluded.is_some()
    }

    /// Command-line constraints as session actions, in field order.
    #[must_use]
    pub fn actions(&self) -> Vec<UserAction> {
        let mut actions = Vec::new();
        if let Some(known) = &self.known {
            actions.push(UserAction::SetPattern(known.clone()));
        }
        if let Some(present) = &self.present {
            actions.push(UserAction::SetPresent(present.clone()));
        }
        if let Some(excluded) = &self.excluded {
            actions.push(UserAction::SetExcluded(excluded.clone()));
        }
        actions
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Words laid out five per row.
#[must_use]
pub fn format_grid(candidates: &[String]) -> Vec<String> {
    candidates
        .chunks(GRID_COLUMNS)
        .map(|row| row.join("  "))
        .collect()
}

pub fn display_candidates(candidates: &[String]) {
    if candidates.is_empty() {
        println!("No candidates match. Check your inputs.");
        return;
    }
    println!("Possible candidates ({}):", candidates.len());
    for line in format_grid(candidates) {
        println!("  {line}");
    }
}

fn print_usage() {
    println!("Commands:");
    println!("  known <pattern>     letters by position, _ for unknown (e.g. known _RA_E)");
    println!("  slot <1-5> <letter> set one position, _ to clear it");
    println!("  present <letters>   letters in the word, position unknown");
    println!("  exclude <letters>   letters not in the word");
    println!("  clear               start over");
    println!("  exit                quit");
}

fn parse_command(line: &str) -> Option<UserAction> {
    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().unwrap_or("").trim();

    match command.as_str() {
        "exit" | "quit" => Some(UserAction::Exit),
        "clear" => Some(UserAction::Clear),
        "known" => Some(UserAction::SetPattern(argument.to_string())),
        "present" => Some(UserAction::SetPresent(argument.to_string())),
        "exclude" => Some(UserAction::SetExcluded(argument.to_string())),
        "slot" => {
            let mut args = argument.split_whitespace();
            let position: usize = args.next()?.parse().ok()?;
            let index = position.checked_sub(1)?;
            let letter = match args.next() {
                None | Some("_" | "." | "?" | "*") => None,
                Some(arg) => arg.chars().next(),
            };
            Some(UserAction::SetSlot(index, letter))
        }
        _ => None,
    }
}

/// Line-based implementation of `AssistantInterface`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AssistantInterface for CliInterface<R> {
    fn display_welcome(&mut self, word_count: usize) {
        println!("Wordle Assistant - {word_count} words loaded.");
        print_usage();
    }

    fn read_action(&mut self, constraints: &ConstraintSet) -> Option<UserAction> {
        println!("\n[{}] >", constraints.pattern());
        let mut input = String::new();
        match self.reader.read_line(&mut input) {
            // End of input or an unreadable stream ends the session
            Ok(0) | Err(_) => return Some(UserAction::Exit),
            Ok(_) => {}
        }
        if input.trim().is_empty() {
            return None;
        }
        let action = parse_command(&input);
        if action.is_none() {
            println!("Unrecognised command.");
            print_usage();
        }
        action
    }

    fn display_constraints(&mut self, constraints: &ConstraintSet) {
        let present: String = constraints.present().iter().collect();
        let excluded: String = constraints.excluded().iter().collect();
        println!(
            "Known: {}  Position unknown: {}  Not in word: {}",
            constraints.pattern(),
            if present.is_empty() { "-" } else { present.as_str() },
            if excluded.is_empty() { "-" } else { excluded.as_str() },
        );
    }

    fn display_candidates(&mut self, candidates: &[String]) {
        display_candidates(candidates);
    }

    fn display_no_input(&mut self) {
        println!("Enter some letters to search.");
    }

    fn display_error(&mut self, message: &str) {
        println!("Error: {message}");
    }

    fn display_cleared(&mut self) {
        println!("All inputs cleared.");
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}
