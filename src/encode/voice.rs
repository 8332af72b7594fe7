//! Voice trait encoder.
//!
//! Maps four named scalar traits into a [`VOICE_DIM`](super::VOICE_DIM)
//! vector. The trailing half repeats the four traits cyclically — a padding
//! policy that keeps the voice contribution commensurate in magnitude with
//! the text and interest parts of the fused embedding.

use std::collections::BTreeMap;

use super::{l2_normalize, VOICE_DIM};

/// Fixed trait layout for indices 0..3. Missing keys read as 0.0.
pub const TRAIT_ORDER: [&str; 4] = ["energy", "warmth", "confidence", "articulation"];

/// Encode named voice traits into a [`VOICE_DIM`] vector, L2-normalized.
pub fn encode_voice_traits(traits: &BTreeMap<String, f32>) -> Vec<f32> {
    let mut vector = vec![0.0f32; VOICE_DIM];

    for (idx, key) in TRAIT_ORDER.iter().enumerate() {
        vector[idx] = traits.get(*key).copied().unwrap_or(0.0);
    }

    for i in TRAIT_ORDER.len()..VOICE_DIM {
        vector[i] = vector[i % TRAIT_ORDER.len()];
    }

    l2_normalize(&mut vector);
    vector
}
