//! Deterministic voice trait derivation.
//!
//! A real deployment would derive these from acoustic features. Here each
//! trait is a hash of the seed text plus the trait name, so identical input
//! always yields identical traits and demo data stays stable and testable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::encode::voice::TRAIT_ORDER;

/// Hint recorded when no transcript was available.
const NO_TRANSCRIPT_HINT: &str = "audio_only";

/// Derived voice traits, each in `[0, 1]` rounded to 3 decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    pub energy: f32,
    pub warmth: f32,
    pub confidence: f32,
    pub articulation: f32,
    /// The transcript the traits were derived from, or `"audio_only"`.
    pub transcript_hint: String,
}

impl VoiceAnalysis {
    /// Trait scores keyed for the voice encoder.
    pub fn trait_scores(&self) -> BTreeMap<String, f32> {
        let values = [self.energy, self.warmth, self.confidence, self.articulation];
        TRAIT_ORDER
            .iter()
            .zip(values)
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// Derive voice traits from a seed string.
///
/// Each trait hashes `seed + trait name` and maps the leading 24 bits of
/// the digest to a fraction of `0xFFFFFF`. Different trait names give
/// near-independent-looking values from the same seed.
pub fn analyze_voice(seed: &str, transcript: Option<&str>) -> VoiceAnalysis {
    VoiceAnalysis {
        energy: score_from_text(seed, "energy"),
        warmth: score_from_text(seed, "warmth"),
        confidence: score_from_text(seed, "confidence"),
        articulation: score_from_text(seed, "articulation"),
        transcript_hint: transcript.unwrap_or(NO_TRANSCRIPT_HINT).to_string(),
    }
}

fn score_from_text(seed: &str, trait_name: &str) -> f32 {
    let digest = Sha256::digest(format!("{seed}{trait_name}").as_bytes());
    let prefix = u32::from_be_bytes([0, digest[0], digest[1], digest[2]]);
    let score = prefix as f32 / 0xFFFFFF as f32;
    (score * 1000.0).round() / 1000.0
}
