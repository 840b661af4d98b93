//! Synonym expansion for better recall.
//!
//! Each canonical term lists related terms in a declared order. That
//! order is part of the data: expansion takes the first few entries of a
//! list, so reordering a list changes results.

use crate::core::query::tokenizer::tokenize;
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;

/// Related terms added for a token that is a canonical key.
pub const FORWARD_LIMIT: usize = 3;

/// Related terms added through the bidirectional map.
pub const REVERSE_LIMIT: usize = 2;

const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    // Style
    ("modern", &["contemporary", "sleek", "clean", "current", "fresh"]),
    ("minimal", &["minimalism", "minimalist", "simple", "clean", "sparse", "less-is-more"]),
    ("elegant", &["sophisticated", "refined", "graceful", "luxurious", "premium", "classy"]),
    ("playful", &["fun", "whimsical", "cheerful", "vibrant", "energetic", "lively"]),
    ("professional", &["corporate", "business", "formal", "enterprise", "serious"]),
    ("dark", &["dark-mode", "night", "oled", "dark-theme", "moody"]),
    ("light", &["light-mode", "bright", "white", "airy", "clean"]),
    ("bold", &["strong", "impactful", "powerful", "dramatic", "striking"]),
    ("soft", &["gentle", "subtle", "muted", "pastel", "calm", "soothing"]),
    ("retro", &["vintage", "nostalgic", "classic", "old-school", "throwback"]),
    ("futuristic", &["sci-fi", "cyber", "tech", "neon", "space-age"]),
    ("organic", &["natural", "earthy", "botanical", "eco", "green"]),
    ("luxury", &["premium", "high-end", "exclusive", "opulent", "lavish"]),
    ("glassmorphism", &["glass", "frosted", "blur", "translucent", "transparent"]),
    ("neumorphism", &["soft-ui", "embossed", "raised", "inset", "3d-soft"]),
    ("brutalism", &["raw", "unpolished", "anti-design", "punk", "grunge"]),
    // Product
    ("saas", &["software", "app", "platform", "tool", "service", "cloud"]),
    ("ecommerce", &["e-commerce", "shop", "store", "marketplace", "retail", "buy", "sell"]),
    ("dashboard", &["admin", "panel", "analytics", "metrics", "data", "monitoring"]),
    ("landing", &["homepage", "marketing", "promo", "launch", "hero"]),
    ("portfolio", &["showcase", "gallery", "work", "projects", "personal"]),
    ("blog", &["article", "post", "news", "content", "magazine", "journal"]),
    // Color
    ("blue", &["azure", "navy", "cobalt", "cerulean", "indigo", "sapphire"]),
    ("red", &["crimson", "scarlet", "ruby", "cherry", "vermillion"]),
    ("green", &["emerald", "sage", "mint", "forest", "lime", "olive"]),
    ("purple", &["violet", "lavender", "plum", "amethyst", "mauve"]),
    ("orange", &["amber", "tangerine", "coral", "peach", "apricot"]),
    ("pink", &["rose", "blush", "magenta", "fuchsia", "salmon"]),
    // Typography
    ("serif", &["traditional", "classic", "editorial", "newspaper", "book"]),
    ("sans-serif", &["sans", "modern", "clean", "geometric", "grotesk"]),
    ("monospace", &["mono", "code", "terminal", "developer", "typewriter"]),
    ("handwritten", &["script", "cursive", "calligraphy", "brush", "hand-lettered"]),
];

static BUILTIN: Lazy<SynonymTable> =
    Lazy::new(|| SynonymTable::from_entries(BUILTIN_SYNONYMS.iter().copied()));

/// Canonical synonym lists plus their bidirectional closure.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    canonical: IndexMap<String, Vec<String>>,
    related: IndexMap<String, IndexSet<String>>,
}

impl SynonymTable {
    /// Build a table from canonical entries in declared order.
    ///
    /// The bidirectional map is derived here: each related term points back
    /// to its canonical key, and each key points at all of its related terms.
    pub fn from_entries<'a, I, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, R)>,
        R: AsRef<[&'a str]>,
    {
        let mut canonical: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut related: IndexMap<String, IndexSet<String>> = IndexMap::new();

        for (key, values) in entries {
            let values: Vec<String> = values.as_ref().iter().map(|v| v.to_string()).collect();

            for value in &values {
                related
                    .entry(value.clone())
                    .or_default()
                    .insert(key.to_string());
            }
            related
                .entry(key.to_string())
                .or_default()
                .extend(values.iter().cloned());

            canonical.insert(key.to_string(), values);
        }

        Self { canonical, related }
    }

    /// The process-wide built-in table
    pub fn builtin() -> &'static SynonymTable {
        &BUILTIN
    }

    /// Related terms declared for a canonical key
    pub fn canonical(&self, term: &str) -> Option<&[String]> {
        self.canonical.get(term).map(Vec::as_slice)
    }

    /// Every term related to `term` in either direction
    pub fn related(&self, term: &str) -> Option<&IndexSet<String>> {
        self.related.get(term)
    }

    /// Tokenize `query` and add related terms for each token.
    ///
    /// Canonical keys contribute their first [`FORWARD_LIMIT`] related terms,
    /// the bidirectional map contributes up to [`REVERSE_LIMIT`] more. Added
    /// phrases are tokenized like any other text, so `dark-mode` adds `dark`
    /// and `mode`. The result keeps every input token, without duplicates.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let tokens = tokenize(query);
        let mut expanded: IndexSet<String> = tokens.iter().cloned().collect();

        for token in &tokens {
            if let Some(values) = self.canonical.get(token) {
                for value in values.iter().take(FORWARD_LIMIT) {
                    expanded.extend(tokenize(value));
                }
            }
            if let Some(values) = self.related.get(token) {
                for value in values.iter().take(REVERSE_LIMIT) {
                    expanded.extend(tokenize(value));
                }
            }
        }

        expanded.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
