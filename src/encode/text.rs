//! Hashed bag-of-words text encoder.
//!
//! Tokens are hashed into a fixed [`TEXT_DIM`](super::TEXT_DIM)-bucket count
//! histogram, then L2-normalized. Hash collisions across distinct tokens are
//! accepted as dimensionality reduction, not an error. The histogram is
//! purely additive, so field and token order never affect the result.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use super::{l2_normalize, TEXT_DIM};

/// One text-like profile field: free text, a tag list, or a numeric scalar.
#[derive(Debug, Clone)]
pub enum TextField {
    /// Free text — lower-cased and split on whitespace into tokens.
    Text(String),
    /// Tag list — each element lower-cased as a single token, never split.
    Tags(Vec<String>),
    /// Numeric scalar — stringified as a single token.
    Scalar(f64),
}

/// Encode named text fields into a [`TEXT_DIM`] vector.
///
/// Field names are not tokenized; only values contribute. An input with no
/// tokens at all yields the zero vector.
pub fn encode_text_fields(fields: &BTreeMap<String, TextField>) -> Vec<f32> {
    let mut vector = vec![0.0f32; TEXT_DIM];

    for value in fields.values() {
        match value {
            TextField::Text(text) => {
                for token in text.to_lowercase().split_whitespace() {
                    vector[token_bucket(token)] += 1.0;
                }
            }
            TextField::Tags(tags) => {
                for tag in tags {
                    vector[token_bucket(&tag.to_lowercase())] += 1.0;
                }
            }
            TextField::Scalar(value) => {
                vector[token_bucket(&value.to_string())] += 1.0;
            }
        }
    }

    l2_normalize(&mut vector);
    vector
}

/// Map a token to its histogram bucket via the leading 8 bytes of its
/// SHA-256 digest.
fn token_bucket(token: &str) -> usize {
    let digest = Sha256::digest(token.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % TEXT_DIM as u64) as usize
}
