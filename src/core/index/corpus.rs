//! Per-corpus term statistics.

use crate::core::query::{tokenize, VocabularyLookup};
use crate::core::types::Row;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Tokenized documents plus the statistics BM25 needs.
///
/// `documents[i]` always describes source row `i`. The index is built in
/// one pass and never mutated; a changed source produces a new index.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    documents: Vec<Vec<String>>,
    term_freqs: Vec<HashMap<String, usize>>,
    avgdl: f64,
    doc_freq: IndexMap<String, usize>,
    idf: IndexMap<String, f64>,
}

impl CorpusIndex {
    /// Index rows by concatenating their searchable fields.
    ///
    /// Fields missing from a row contribute nothing.
    pub fn build(rows: &[Row], search_fields: &[&str]) -> Self {
        let texts: Vec<String> = rows
            .iter()
            .map(|row| {
                search_fields
                    .iter()
                    .map(|field| row.get(*field).map(String::as_str).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        Self::from_documents(texts.iter().map(String::as_str))
    }

    /// Index raw document texts in order.
    pub fn from_documents<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let documents: Vec<Vec<String>> = texts.into_iter().map(tokenize).collect();
        let n = documents.len();
        if n == 0 {
            return Self::default();
        }

        let mut term_freqs = Vec::with_capacity(n);
        let mut doc_freq: IndexMap<String, usize> = IndexMap::new();
        let mut total_len = 0usize;

        for doc in &documents {
            total_len += doc.len();
            let mut tf: HashMap<String, usize> = HashMap::new();
            for token in doc {
                *tf.entry(token.clone()).or_insert(0) += 1;
            }
            // Distinct terms in first-seen order keep doc_freq deterministic
            let mut seen = std::collections::HashSet::new();
            for token in doc {
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.clone()).or_insert(0) += 1;
                }
            }
            term_freqs.push(tf);
        }

        let n_f = n as f64;
        let idf = doc_freq
            .iter()
            .map(|(term, &df)| {
                let df = df as f64;
                (term.clone(), ((n_f - df + 0.5) / (df + 0.5) + 1.0).ln())
            })
            .collect();

        Self {
            documents,
            term_freqs,
            avgdl: total_len as f64 / n_f,
            doc_freq,
            idf,
        }
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Tokens of document `i`
    pub fn document(&self, i: usize) -> Option<&[String]> {
        self.documents.get(i).map(Vec::as_slice)
    }

    /// Token count of document `i`
    pub fn doc_len(&self, i: usize) -> usize {
        self.documents.get(i).map_or(0, Vec::len)
    }

    /// Occurrences of `term` in document `i`
    pub fn term_freq(&self, i: usize, term: &str) -> usize {
        self.term_freqs
            .get(i)
            .and_then(|tf| tf.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Mean document length; zero for an empty corpus
    pub fn avgdl(&self) -> f64 {
        self.avgdl
    }

    pub fn doc_freq(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Distinct terms in the corpus
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

impl<'v> VocabularyLookup<'v> for &'v CorpusIndex {
    fn contains_term(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    fn terms(&self) -> impl Iterator<Item = &'v str> {
        let index: &'v CorpusIndex = *self;
        index.idf.keys().map(String::as_str)
    }
}
