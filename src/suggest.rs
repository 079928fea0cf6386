//! Typo suggestions using Levenshtein distance

use std::collections::BTreeSet;

use crate::fmt::join_list;

/// Most candidates a suggestion will offer.
pub const MAX_SUGGESTIONS: usize = 3;

/// Calculate the Levenshtein distance between two strings.
/// This measures the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one string into the other.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two rows instead of the full matrix
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr_row[0] = i;
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// The largest edit distance still worth suggesting for a query.
///
/// A third of the query's length, but never less than 2.
fn max_distance_for(query: &str) -> usize {
    (query.chars().count() / 3).max(2)
}

/// Find the closest candidates to a mistyped string.
///
/// Comparison is case-insensitive. Candidates are deduplicated and ranked
/// by edit distance, equal distances in sorted order, and at most
/// [`MAX_SUGGESTIONS`] within the distance limit are returned.
pub fn suggest<'a, I>(query: &str, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_lower = query.to_lowercase();
    let max_distance = max_distance_for(&query_lower);
    let unique: BTreeSet<&str> = candidates.into_iter().collect();

    let mut scored: Vec<(usize, &str)> = unique
        .into_iter()
        .map(|candidate| (levenshtein_distance(&query_lower, &candidate.to_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();

    // Stable sort keeps the BTreeSet order for equal distances
    scored.sort_by_key(|(distance, _)| *distance);
    tracing::trace!(query, matches = scored.len(), "ranked suggestion candidates");

    scored.into_iter().take(MAX_SUGGESTIONS).map(|(_, s)| s).collect()
}

/// Format a "did you mean?" phrase. Returns None if there are no suggestions.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    if suggestions.is_empty() {
        return None;
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("{:?}", s)).collect();
    Some(format!("did you mean {}?", join_list(&quoted, ", ", " or ")))
}

/// The text to append to an error message for a mistyped value: either
/// `, did you mean ...?` or the empty string.
pub fn suggestion_suffix<'a, I>(query: &str, candidates: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format_suggestion(&suggest(query, candidates))
        .map(|s| format!(", {}", s))
        .unwrap_or_default()
}
