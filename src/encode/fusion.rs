//! Multi-modal fusion.
//!
//! Concatenates the text, voice, and interest vectors in fixed order and
//! L2-normalizes the result exactly once. Normalizing after concatenation —
//! not per part — means the pre-fusion magnitude of each modality decides
//! its influence on downstream distances.

use std::collections::BTreeMap;

use super::l2_normalize;

/// Fuse the three modality vectors into a single embedding.
///
/// Interest scores are appended in lexicographic bucket-key order (the
/// `BTreeMap` iteration order), so the layout is stable across calls.
pub fn fuse(
    text_embedding: &[f32],
    voice_embedding: &[f32],
    interest_scores: &BTreeMap<String, f32>,
) -> Vec<f32> {
    let mut merged =
        Vec::with_capacity(text_embedding.len() + voice_embedding.len() + interest_scores.len());
    merged.extend_from_slice(text_embedding);
    merged.extend_from_slice(voice_embedding);
    merged.extend(interest_scores.values().copied());

    l2_normalize(&mut merged);
    merged
}
