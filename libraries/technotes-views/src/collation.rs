//! Locale-aware string comparison and case-insensitive matching
//!
//! `locale_cmp` approximates root-locale collation for the names and titles
//! the lists sort on. Strings are decomposed (NFD) and compared in three
//! levels:
//!
//! 1. base letters, ignoring accents and case (`Éclair` sorts with `e`)
//! 2. accents, unaccented first (`resume` < `résumé`)
//! 3. case, lowercase first (`amy` < `Amy`)

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a locale-aware collator orders list labels
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let a_nfd: String = a.nfd().collect();
    let b_nfd: String = b.nfd().collect();

    primary_key(&a_nfd)
        .cmp(primary_key(&b_nfd))
        .then_with(|| folded(&a_nfd).cmp(folded(&b_nfd)))
        .then_with(|| case_cmp(&a_nfd, &b_nfd))
}

/// Base letters only: combining marks dropped, case folded
fn primary_key(decomposed: &str) -> impl Iterator<Item = char> + '_ {
    decomposed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Case folded, accents kept
fn folded(decomposed: &str) -> impl Iterator<Item = char> + '_ {
    decomposed.chars().flat_map(char::to_lowercase)
}

/// Tertiary level: at the first differing character lowercase wins
fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

/// Lowercased search needle, or `None` when nothing was typed
pub fn search_needle(term: &str) -> Option<String> {
    if term.is_empty() {
        None
    } else {
        Some(term.to_lowercase())
    }
}

/// Whether `haystack` contains an already-lowercased `needle`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
