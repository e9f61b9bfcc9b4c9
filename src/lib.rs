// Library interface for wordle-assistant
// This allows integration tests to access internal modules

pub mod cli;
pub mod constraints;
pub mod logging;
pub mod matcher;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used functions for easier testing
pub use constraints::{ConstraintError, ConstraintSet};
pub use matcher::{build_patterns, find_candidates};
pub use session::{AssistantInterface, Session, UserAction, assistant_loop};
pub use wordbank::{
    default_wordbank, load_wordbank_from_file, load_wordbank_from_json_str, load_wordbank_from_str,
};
