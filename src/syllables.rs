use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Separator between syllables in the dataset, e.g. `syl;la;ble`.
const SYLLABLE_DELIMITER: char = ';';

/// Default location of the syllable dataset when none is given on the
/// command line.
pub const DEFAULT_SYLLABLE_PATH: &str = "/srv/datasets/syllables.txt";

fn insert_entry(map: &mut HashMap<String, usize>, line: &str) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }
    let word: String = line.chars().filter(|&c| c != SYLLABLE_DELIMITER).collect();
    let count = line.split(SYLLABLE_DELIMITER).count();
    // The dataset can list the same word with conflicting splits; keep the
    // larger syllable count
    match map.get(&word) {
        Some(&existing) if existing > count => {}
        _ => {
            map.insert(word, count);
        }
    }
}

pub fn load_syllable_map_from_str(data: &str) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for line in data.lines() {
        insert_entry(&mut map, line);
    }
    map
}

pub fn load_syllable_map_from_file<P: AsRef<Path>>(path: P) -> io::Result<HashMap<String, usize>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut map = HashMap::new();
    for line in reader.lines() {
        insert_entry(&mut map, &line?);
    }
    Ok(map)
}
