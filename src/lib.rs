// Library interface for bee-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod hive;
pub mod solver;
pub mod syllables;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use hive::{Hive, HiveError};
pub use solver::{filter_candidates, score_word, solve};
pub use syllables::{load_syllable_map_from_file, load_syllable_map_from_str};
pub use wordbank::{load_dictionary_from_file, load_dictionary_from_str};
