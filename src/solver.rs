use std::collections::{HashMap, HashSet};

use crate::hive::Hive;

/// Minimum solution length; shorter dictionary words are never candidates.
pub const MIN_WORD_LEN: usize = 4;

const PANGRAM_BONUS: usize = 7;

/// Filter the dictionary down to legal plays for the given hive: words of at
/// least 4 letters that contain the required letter and use only hive
/// letters. The result is built into a fresh set.
pub fn filter_candidates(dictionary: &HashSet<String>, hive: &Hive) -> HashSet<String> {
    let mut candidates = HashSet::new();
    for word in dictionary {
        if word.chars().count() < MIN_WORD_LEN {
            continue;
        }
        if !word.contains(hive.required()) {
            continue;
        }
        if hive.allows(word) {
            candidates.insert(word.clone());
        }
    }
    candidates
}

/// Score a single candidate word.
///
/// A 4-letter word is worth 1 point; longer words are worth a point per
/// letter. A pangram (every hive letter appears, only possible at 7+
/// letters) scores `length + 7` instead of the length score. Finally, if
/// the word appears in the syllable map, its syllable count is added.
pub fn score_word(word: &str, hive: &Hive, syllables: &HashMap<String, usize>) -> usize {
    let len = word.chars().count();
    let mut score = if len == 4 { 1 } else { len };
    if len >= 7 && hive.is_pangram(word) {
        // Replaces the length score rather than adding to it
        score = len + PANGRAM_BONUS;
    }
    if let Some(&count) = syllables.get(&word.to_lowercase()) {
        score += count;
    }
    score
}

/// Run the filter and scorer over the whole dictionary, returning
/// `(word, score)` pairs sorted by ascending score, then alphabetically
/// within equal scores.
pub fn solve(
    dictionary: &HashSet<String>,
    hive: &Hive,
    syllables: &HashMap<String, usize>,
) -> Vec<(String, usize)> {
    let candidates = filter_candidates(dictionary, hive);
    let mut scored: Vec<(usize, String)> = candidates
        .into_iter()
        .map(|word| (score_word(&word, hive, syllables), word))
        .collect();
    scored.sort();
    scored.into_iter().map(|(score, word)| (word, score)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hive() -> Hive {
        "ABCDEFG".parse().unwrap()
    }

    fn dictionary(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn no_syllables() -> HashMap<String, usize> {
        HashMap::new()
    }

    #[test]
    fn test_filter_keeps_valid_candidate() {
        let candidates = filter_candidates(&dictionary(&["ABDE"]), &hive());
        assert!(candidates.contains("ABDE"));
    }

    #[test]
    fn test_filter_rejects_short_words() {
        let candidates = filter_candidates(&dictionary(&["ABD", "BAD", "DAB"]), &hive());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_filter_rejects_missing_required_letter() {
        // Required letter for ABCDEFG is D
        let candidates = filter_candidates(&dictionary(&["FACE", "CAGE"]), &hive());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_filter_rejects_foreign_letters() {
        let candidates = filter_candidates(&dictionary(&["ABDEX"]), &hive());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_filter_allows_repeated_letters() {
        let candidates = filter_candidates(&dictionary(&["DEEDED"]), &hive());
        assert!(candidates.contains("DEEDED"));
    }

    #[test]
    fn test_score_four_letter_word_is_one() {
        assert_eq!(score_word("ABDE", &hive(), &no_syllables()), 1);
    }

    #[test]
    fn test_score_longer_word_is_length() {
        assert_eq!(score_word("FADED", &hive(), &no_syllables()), 5);
        assert_eq!(score_word("DEEDED", &hive(), &no_syllables()), 6);
    }

    #[test]
    fn test_score_pangram_replaces_length_score() {
        // 7 letters + 7 bonus, not 7 + 7 + 7
        assert_eq!(score_word("ABCDEFG", &hive(), &no_syllables()), 14);
    }

    #[test]
    fn test_score_long_pangram() {
        assert_eq!(score_word("ABCDEFGA", &hive(), &no_syllables()), 15);
    }

    #[test]
    fn test_score_long_non_pangram_is_length() {
        // 7+ letters but missing some hive letters
        assert_eq!(score_word("DEFACED", &hive(), &no_syllables()), 7);
    }

    #[test]
    fn test_score_adds_syllable_bonus() {
        let syllables = load_map(&[("faded", 2)]);
        assert_eq!(score_word("FADED", &hive(), &syllables), 7);
    }

    #[test]
    fn test_score_pangram_plus_syllable_bonus() {
        let syllables = load_map(&[("abcdefg", 3)]);
        assert_eq!(score_word("ABCDEFG", &hive(), &syllables), 17);
    }

    #[test]
    fn test_score_syllable_lookup_is_lowercase() {
        let syllables = load_map(&[("ABDE", 2)]);
        // Keys are lowercase in the dataset; an uppercase key never matches
        assert_eq!(score_word("ABDE", &hive(), &syllables), 1);
    }

    #[test]
    fn test_solve_sorts_by_score_then_word() {
        let dict = dictionary(&["FADED", "ABDE", "BADE", "DEEDED"]);
        let solutions = solve(&dict, &hive(), &no_syllables());
        assert_eq!(
            solutions,
            vec![
                ("ABDE".to_string(), 1),
                ("BADE".to_string(), 1),
                ("FADED".to_string(), 5),
                ("DEEDED".to_string(), 6),
            ]
        );
    }

    #[test]
    fn test_solve_each_candidate_appears_once() {
        let dict = dictionary(&["ABDE", "FADED", "ABCDEFG"]);
        let solutions = solve(&dict, &hive(), &no_syllables());
        assert_eq!(solutions.len(), 3);
        let words: HashSet<&str> = solutions.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_solve_scores_at_least_one() {
        let dict = dictionary(&["ABDE", "BADE", "FADED", "ABCDEFG"]);
        let solutions = solve(&dict, &hive(), &no_syllables());
        assert!(solutions.iter().all(|&(_, score)| score >= 1));
    }

    fn load_map(entries: &[(&str, usize)]) -> HashMap<String, usize> {
        entries
            .iter()
            .map(|&(word, count)| (word.to_string(), count))
            .collect()
    }
}
