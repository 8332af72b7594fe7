//! Interest taxonomy mapping.
//!
//! Free-text interest tags are scored against a fixed bucket taxonomy.
//! Matching is case-insensitive set intersection, so tag order and
//! duplicates never change the result.

use std::collections::{BTreeMap, BTreeSet};

/// The taxonomy: bucket key → keyword set. Kept in lexicographic key order.
pub const TAXONOMY: [(&str, &[&str]); 8] = [
    ("ai", &["ai", "artificial intelligence", "machine learning", "ml"]),
    ("audio", &["voice", "audio", "speech"]),
    ("data", &["data", "analytics"]),
    ("gaming", &["unity", "unreal", "game"]),
    ("llm", &["llm", "large language model", "chatgpt", "gpt"]),
    ("nlp", &["nlp", "language", "text"]),
    ("product", &["product", "pm"]),
    ("web", &["frontend", "javascript", "three.js", "react", "webrtc"]),
];

/// Number of taxonomy buckets — one fused-embedding slot each.
pub const BUCKET_COUNT: usize = TAXONOMY.len();

/// Bucket boosted to this score when no tag matches anything, so the
/// interest vector is never identically zero.
const FALLBACK_BUCKET: &str = "ai";
const FALLBACK_SCORE: f32 = 0.5;

/// Per-match bonus so even a single matching keyword scores well above zero.
const MATCH_BONUS: f32 = 0.2;

/// Score each taxonomy bucket in `[0, 1]` from raw interest tags.
pub fn normalize_interests(raw_interests: &[String]) -> BTreeMap<String, f32> {
    let lowered: BTreeSet<String> = raw_interests.iter().map(|tag| tag.to_lowercase()).collect();

    let mut scores: BTreeMap<String, f32> = TAXONOMY
        .iter()
        .map(|(bucket, _)| (bucket.to_string(), 0.0))
        .collect();

    for (bucket, keywords) in TAXONOMY {
        let hits = keywords
            .iter()
            .filter(|keyword| lowered.contains(**keyword))
            .count();
        if hits > 0 {
            let score = (hits as f32 / keywords.len() as f32 + MATCH_BONUS).min(1.0);
            scores.insert(bucket.to_string(), score);
        }
    }

    if scores.values().all(|score| *score == 0.0) {
        scores.insert(FALLBACK_BUCKET.to_string(), FALLBACK_SCORE);
    }

    scores
}
