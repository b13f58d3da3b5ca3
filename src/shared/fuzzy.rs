use std::{cmp, mem::swap};

/// Minimum score for a candidate to count as a match.
pub(crate) const MATCH_THRESHOLD: f64 = 0.1;

/// Levenshtein edit distance counted in chars.
pub(crate) fn distance(s1_in: &str, s2_in: &str) -> usize {
    if s1_in == s2_in {
        return 0;
    }

    let (mut long, mut short) = (s1_in, s2_in);
    if short.chars().count() > long.chars().count() {
        swap(&mut long, &mut short);
    }
    let short_len = short.chars().count();

    // Single row, `previous[j]` is the cost of turning long[..i] into short[..j].
    let mut previous: Vec<usize> = (0..=short_len).collect();
    let mut current = vec![0usize; short_len + 1];
    for (i, lc) in long.chars().enumerate() {
        current[0] = i + 1;
        for (j, sc) in short.chars().enumerate() {
            let sub_cost = if lc == sc { 0 } else { 1 };
            current[j + 1] = cmp::min(
                previous[j] + sub_cost,
                cmp::min(previous[j + 1] + 1, current[j] + 1),
            );
        }
        swap(&mut previous, &mut current);
    }
    previous[short_len]
}

/// Scores `hay` against `needle` token by token, in order. 1.0 is a full match.
pub(crate) fn score(needle: &str, hay: &str) -> f64 {
    let needle_tokens: Vec<_> = needle.split_whitespace().collect();
    let hay_tokens: Vec<_> = hay.split_whitespace().collect();
    if needle_tokens.is_empty() {
        return 0.0;
    }
    let score: f64 = needle_tokens
        .iter()
        .zip(hay_tokens.iter())
        .map(|(n, h)| score_token(n, h))
        .sum();
    score / needle_tokens.len() as f64
}

fn score_token(needle: &str, hay: &str) -> f64 {
    // Typing the start of a word is a strong signal in an autocomplete box.
    if hay.starts_with(needle) {
        return 1.0;
    }
    let dist = distance(needle, hay);
    let longest = cmp::max(needle.chars().count(), hay.chars().count());
    1.0 - dist as f64 / longest as f64
}

/// Lowercases and drops everything that is not alphanumeric or whitespace.
pub(crate) fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[test]
fn fuzzy_empty_vs_nonempty() {
    assert_eq!(distance("", "jfk"), 3);
    assert_eq!(distance("jfk", ""), 3);
}

#[test]
fn fuzzy_substitution() {
    assert_eq!(distance("lax", "lex"), 1);
}

#[test]
fn fuzzy_insertion_and_deletion() {
    assert_eq!(distance("ohare", "o hare"), 1);
    assert_eq!(distance("o hare", "ohare"), 1);
}

#[test]
fn fuzzy_unicode() {
    assert_eq!(distance("zürich", "zurich"), 1);
    assert_eq!(distance("zürich", "zürich"), 0);
}

#[test]
fn fuzzy_longer_sequence() {
    assert_eq!(distance("intention", "execution"), 5);
}

#[test]
fn score_prefix_is_full_match() {
    assert_eq!(score("kenn", "kennedy intl"), 1.0);
}

#[test]
fn score_empty_needle() {
    assert_eq!(score("", "kennedy"), 0.0);
}

#[test]
fn normalize_strips_punctuation() {
    assert_eq!(normalize("O'Hare Int'l"), "ohare intl");
}
