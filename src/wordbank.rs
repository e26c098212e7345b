use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Keep a dictionary line only if its first character is lowercase.
/// Proper nouns are capitalized in the source word lists, so this filters
/// them out before normalization.
fn is_common_word(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_lowercase)
}

pub fn load_dictionary_from_str(data: &str) -> HashSet<String> {
    data.lines()
        .filter(|line| is_common_word(line))
        .map(|line| line.trim_end().to_uppercase())
        .collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> io::Result<HashSet<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        if is_common_word(&line) {
            words.insert(line.trim_end().to_uppercase());
        }
    }
    Ok(words)
}
