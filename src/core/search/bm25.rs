//! BM25 ranking over a [`CorpusIndex`].

use crate::core::index::CorpusIndex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// BM25 free parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Params {
    /// Term-frequency saturation
    pub k1: f64,
    /// Document-length normalization strength (0 = none, 1 = full)
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.5, b: 0.75 }
    }
}

/// Score every document against `query` and rank them.
///
/// Returns `(document index, score)` for all documents, highest score
/// first, equal scores in ascending document order. Query tokens the
/// corpus has never seen contribute nothing; a repeated query token is
/// counted once per occurrence. An empty corpus yields an empty ranking.
pub fn rank(index: &CorpusIndex, query: &[String], params: Bm25Params) -> Vec<(usize, f64)> {
    if index.is_empty() {
        return Vec::new();
    }

    let avgdl = index.avgdl();
    let mut scores: Vec<(usize, f64)> = (0..index.len())
        .map(|doc| {
            let doc_len = index.doc_len(doc) as f64;
            // avgdl is zero when every document is empty; no term can match then
            let norm = if avgdl > 0.0 { doc_len / avgdl } else { 0.0 };
            let score = query
                .iter()
                .filter_map(|token| index.idf(token).map(|idf| (token, idf)))
                .map(|(token, idf)| {
                    let tf = index.term_freq(doc, token) as f64;
                    idf * (tf * (params.k1 + 1.0)) / (tf + params.k1 * (1.0 - params.b + params.b * norm))
                })
                .sum::<f64>();
            (doc, score)
        })
        .collect();

    scores.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        other => other,
    });
    scores
}
