//! Typo correction against a corpus vocabulary.
//!
//! A query token the corpus has never seen gets its nearest vocabulary
//! neighbours appended to the query. Correction only ever adds tokens.

/// Default maximum edit distance for a correction.
pub const DEFAULT_THRESHOLD: usize = 2;

/// Corrections appended per unknown token.
pub const MAX_CORRECTIONS: usize = 2;

/// Levenshtein distance over characters (unit cost insert/delete/substitute).
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the shorter string in the row
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0; short.len() + 1];

    for (i, lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Vocabulary terms within `threshold` edits of `token`, nearest first.
///
/// Exact matches (distance 0) are never returned. Candidates whose length
/// differs by more than `threshold` are skipped before the distance is
/// computed. Ties are ordered alphabetically.
pub fn fuzzy_match<'v, I>(token: &str, vocabulary: I, threshold: usize) -> Vec<(&'v str, usize)>
where
    I: IntoIterator<Item = &'v str>,
{
    let token_len = token.chars().count();

    let mut matches: Vec<(&'v str, usize)> = vocabulary
        .into_iter()
        .filter(|candidate| candidate.chars().count().abs_diff(token_len) <= threshold)
        .filter_map(|candidate| {
            let distance = levenshtein(token, candidate);
            (distance > 0 && distance <= threshold).then_some((candidate, distance))
        })
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches
}

/// Append up to [`MAX_CORRECTIONS`] near-miss vocabulary terms for every
/// token the vocabulary does not contain.
pub fn correct<'v, V>(tokens: &[String], vocabulary: V, threshold: usize) -> Vec<String>
where
    V: VocabularyLookup<'v>,
{
    let mut corrected = tokens.to_vec();

    for token in tokens {
        if vocabulary.contains_term(token) {
            continue;
        }
        let matches = fuzzy_match(token, vocabulary.terms(), threshold);
        corrected.extend(
            matches
                .into_iter()
                .take(MAX_CORRECTIONS)
                .map(|(term, _)| term.to_string()),
        );
    }

    corrected
}

/// Read access to a set of known terms.
pub trait VocabularyLookup<'v>: Copy {
    fn contains_term(&self, term: &str) -> bool;
    fn terms(&self) -> impl Iterator<Item = &'v str>;
}

impl<'v> VocabularyLookup<'v> for &'v [&'v str] {
    fn contains_term(&self, term: &str) -> bool {
        self.iter().any(|t| *t == term)
    }

    fn terms(&self) -> impl Iterator<Item = &'v str> {
        let slice: &'v [&'v str] = *self;
        slice.iter().copied()
    }
}
