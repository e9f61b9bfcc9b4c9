// Integration tests for the wordle-assistant application
// These tests verify that all modules work together correctly

use std::io::Cursor;
use wordle_assistant::cli::CliInterface;
use wordle_assistant::session::Outcome;
use wordle_assistant::*;

fn wordbank(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

/// Reads commands through `CliInterface` and records what the session shows.
struct RecordingInterface {
    inner: CliInterface<Cursor<&'static str>>,
    events: Vec<String>,
}

impl RecordingInterface {
    fn new(input: &'static str) -> Self {
        Self {
            inner: CliInterface::new(Cursor::new(input)),
            events: Vec::new(),
        }
    }
}

impl AssistantInterface for RecordingInterface {
    fn display_welcome(&mut self, word_count: usize) {
        self.events.push(format!("welcome {word_count}"));
    }

    fn read_action(&mut self, constraints: &ConstraintSet) -> Option<UserAction> {
        let action = self.inner.read_action(constraints);
        if action.is_none() {
            self.events.push("ignored".to_string());
        }
        action
    }

    fn display_constraints(&mut self, _constraints: &ConstraintSet) {}

    fn display_candidates(&mut self, candidates: &[String]) {
        self.events.push(format!("candidates {}", candidates.join(",")));
    }

    fn display_no_input(&mut self) {
        self.events.push("no input".to_string());
    }

    fn display_error(&mut self, message: &str) {
        self.events.push(format!("error {message}"));
    }

    fn display_cleared(&mut self) {
        self.events.push("cleared".to_string());
    }

    fn display_exit_message(&mut self) {
        self.events.push("exit".to_string());
    }
}

#[test]
fn test_end_to_end_plain_session() {
    let words = wordbank(&["CRANE", "CRATE", "TRACE", "GRAPE"]);
    let mut interface = RecordingInterface::new(
        "known _ra_e\nexclude n\npresent t\nslot 1 c\nclear\nexit\n",
    );

    assistant_loop(&words, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 4",
            "candidates CRANE,CRATE,TRACE,GRAPE",
            "candidates CRATE,TRACE,GRAPE",
            "candidates CRATE,TRACE",
            "candidates CRATE",
            "cleared",
            "exit",
        ]
    );
}

#[test]
fn test_session_ends_at_end_of_input() {
    let words = wordbank(&["CRANE", "CRATE"]);
    let mut interface = RecordingInterface::new("present te\n");

    assistant_loop(&words, &mut interface);

    assert_eq!(
        interface.events,
        vec!["welcome 2", "candidates CRATE", "exit"]
    );
}

#[test]
fn test_invalid_commands_do_not_stop_session() {
    let words = wordbank(&["CRANE", "CRATE"]);
    let input = "guess crane\nknown abc\nslot 9 a\nslot 3 5\npresent abcdef\npresent t\nexit\n";
    let mut interface = RecordingInterface::new(input);

    assistant_loop(&words, &mut interface);

    assert_eq!(
        interface.events,
        vec![
            "welcome 2",
            "ignored",
            "error Pattern 'abc' must be 5 characters (letters, or _ for unknown)",
            "error Slot 9 is out of range (1-5)",
            "error '5' is not a letter",
            "error 6 position-unknown letters but only 5 open slots",
            "candidates CRATE",
            "exit",
        ]
    );
}

#[test]
fn test_embedded_wordbank_scenarios() {
    let words = default_wordbank().unwrap();

    let mut constraints = ConstraintSet::new();
    constraints.set_pattern("_RA_E").unwrap();
    constraints.set_excluded("N");
    let result = find_candidates(&constraints, &words).unwrap();
    assert!(result.contains(&"CRATE".to_string()));
    assert!(!result.contains(&"CRANE".to_string()));
    for word in &result {
        let letters: Vec<char> = word.chars().collect();
        assert_eq!(letters[1], 'R');
        assert_eq!(letters[2], 'A');
        assert_eq!(letters[4], 'E');
        assert!(!word.contains('N'));
    }
}

#[test]
fn test_presence_correctness_on_embedded_list() {
    let words = default_wordbank().unwrap();
    let mut constraints = ConstraintSet::new();
    constraints.set_present("QU");
    let result = find_candidates(&constraints, &words).unwrap();
    assert!(!result.is_empty());
    assert!(result.iter().all(|w| w.contains('Q') && w.contains('U')));
    assert!(result.contains(&"QUIET".to_string()));
}

#[test]
fn test_no_constraints_returns_whole_list_in_order() {
    let words = default_wordbank().unwrap();
    let result = find_candidates(&ConstraintSet::new(), &words).unwrap();
    assert_eq!(result, words);
}

#[test]
fn test_json_file_to_session() {
    use std::fs;

    let path = std::env::temp_dir().join("wordle_assistant_test_words.json");
    fs::write(&path, r#"["crane", "crate", "trace", "grape", "bad"]"#).unwrap();

    let words = load_wordbank_from_file(&path).unwrap();
    assert_eq!(words, wordbank(&["CRANE", "CRATE", "TRACE", "GRAPE"]));

    let mut session = Session::new(&words);
    assert_eq!(
        session.apply(UserAction::SetPresent("te".to_string())),
        Outcome::Candidates(wordbank(&["CRATE", "TRACE"]))
    );
    assert_eq!(
        session.apply(UserAction::SetSlot(0, Some('c'))),
        Outcome::Candidates(wordbank(&["CRATE"]))
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_text_file_wordbank() {
    use std::fs;

    let path = std::env::temp_dir().join("wordle_assistant_test_words.txt");
    fs::write(&path, "apple\ngrape\nlemon\nmelon\npeach\n").unwrap();

    let words = load_wordbank_from_file(&path).unwrap();
    let mut constraints = ConstraintSet::new();
    constraints.set_pattern("_E___").unwrap();
    constraints.set_present("L");
    let result = find_candidates(&constraints, &words).unwrap();
    assert_eq!(result, wordbank(&["LEMON", "MELON"]));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invariant_violation_reported() {
    let words = wordbank(&["CRANE", "CRATE"]);
    let mut session = Session::new(&words);
    session.apply(UserAction::SetPattern("CRA__".to_string()));
    assert_eq!(
        session.apply(UserAction::SetPresent("TES".to_string())),
        Outcome::Invalid(ConstraintError::TooManyPresent {
            present: 3,
            unknown: 2
        })
    );
}
