use std::io;
use std::process::ExitCode;

use wordle_assistant::cli::{CliInterface, display_candidates, parse_cli};
use wordle_assistant::logging::{default_log_path, init_logging};
use wordle_assistant::session::{Outcome, Session, assistant_loop};
use wordle_assistant::tui::TuiInterface;
use wordle_assistant::wordbank::resolve_wordbank;

fn main() -> ExitCode {
    let cli = parse_cli();

    // The full-screen interface owns the terminal, so its logs go to a file
    let log_file = if cli.plain || cli.is_one_shot() {
        cli.log_file.clone()
    } else {
        cli.log_file.clone().or_else(default_log_path)
    };
    if let Err(e) = init_logging(log_file.as_deref(), cli.verbose) {
        eprintln!("Failed to set up logging: {e}");
    }

    let wordbank = match resolve_wordbank(cli.wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            match &cli.wordbank_path {
                Some(path) => eprintln!("Failed to load word list from '{}': {e}", path.display()),
                None => eprintln!("Failed to load word list: {e}"),
            }
            return ExitCode::FAILURE;
        }
    };
    log::info!("Word list ready: {} words", wordbank.len());

    if cli.is_one_shot() {
        return run_one_shot(&cli.actions(), &wordbank);
    }

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        assistant_loop(&wordbank, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            assistant_loop(&wordbank, &mut interface);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to start terminal interface: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_one_shot(actions: &[wordle_assistant::UserAction], wordbank: &[String]) -> ExitCode {
    let mut session = Session::new(wordbank);
    let mut outcome = Outcome::NoInput;
    for action in actions {
        outcome = session.apply(action.clone());
        if let Outcome::Invalid(e) = &outcome {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }
    match outcome {
        Outcome::Candidates(candidates) => display_candidates(&candidates),
        _ => println!("Enter some letters to search."),
    }
    ExitCode::SUCCESS
}
