use clap::Parser;
use std::path::PathBuf;

use crate::hive::Hive;
use crate::syllables::DEFAULT_SYLLABLE_PATH;

/// Spelling Bee solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The 7 puzzle letters; the 4th one is the required center letter
    pub hive: Hive,

    /// Path to a newline-delimited dictionary file
    pub dictionary: PathBuf,

    /// Path to the syllable dataset (one word per line, syllables separated by ';')
    #[arg(long = "syllables", default_value = DEFAULT_SYLLABLE_PATH)]
    pub syllable_path: PathBuf,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
