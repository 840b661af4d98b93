//! Query processing: tokenization, translation, synonym expansion and
//! typo correction.
//!
//! A raw query flows through [`QueryNormalizer::normalize`] (translate,
//! then tokenize and expand) and, once the target corpus is known,
//! through [`fuzzy::correct`] against that corpus's vocabulary.

pub mod fuzzy;
mod synonyms;
mod tokenizer;
mod translate;

pub use fuzzy::{correct, fuzzy_match, levenshtein, VocabularyLookup};
pub use synonyms::SynonymTable;
pub use tokenizer::tokenize;
pub use translate::TranslationTable;

/// Translation followed by synonym expansion.
#[derive(Debug, Clone, Copy)]
pub struct QueryNormalizer<'t> {
    translations: &'t TranslationTable,
    synonyms: &'t SynonymTable,
    use_synonyms: bool,
}

impl QueryNormalizer<'static> {
    /// Normalizer over the built-in tables
    pub fn builtin(use_synonyms: bool) -> Self {
        Self::new(
            TranslationTable::builtin(),
            SynonymTable::builtin(),
            use_synonyms,
        )
    }
}

impl<'t> QueryNormalizer<'t> {
    pub fn new(
        translations: &'t TranslationTable,
        synonyms: &'t SynonymTable,
        use_synonyms: bool,
    ) -> Self {
        Self {
            translations,
            synonyms,
            use_synonyms,
        }
    }

    /// Turn a raw query into the token list handed to the scorer.
    pub fn normalize(&self, query: &str) -> Vec<String> {
        let translated = self.translations.translate(query);
        if self.use_synonyms {
            self.synonyms.expand(&translated)
        } else {
            tokenize(&translated)
        }
    }
}
