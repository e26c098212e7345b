use std::fmt;
use std::str::FromStr;

/// Position of the required (center) letter within the hive string.
/// The puzzle's input format marks no letter explicitly; by convention the
/// 4th character is the center of the hive.
const REQUIRED_INDEX: usize = 3;

/// The set of 7 letters allowed in a puzzle, one of which is required.
///
/// Letters are stored uppercase. Duplicate letters are tolerated: a hive of
/// "AABCDEF" behaves the same as if 'A' appeared once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hive {
    letters: [char; 7],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HiveError {
    WrongLength(usize),
}

impl fmt::Display for HiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiveError::WrongLength(len) => {
                write!(f, "hive must be exactly 7 letters, got {len}")
            }
        }
    }
}

impl std::error::Error for HiveError {}

impl FromStr for Hive {
    type Err = HiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        let chars: Vec<char> = upper.chars().collect();
        let letters: [char; 7] = chars
            .try_into()
            .map_err(|v: Vec<char>| HiveError::WrongLength(v.len()))?;
        Ok(Hive { letters })
    }
}

impl Hive {
    /// The letter that must appear in every solution word.
    pub fn required(&self) -> char {
        self.letters[REQUIRED_INDEX]
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// True if every character of `word` is a hive letter.
    pub fn allows(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// True if every hive letter appears somewhere in `word`.
    pub fn is_pangram(&self, word: &str) -> bool {
        self.letters.iter().all(|&letter| word.contains(letter))
    }
}

impl fmt::Display for Hive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
