//! Feature encoders and vector fusion.
//!
//! Every profile is reduced to a fixed 32-dimension fingerprint built from
//! three modalities: hashed text tokens ([`text`]), scalar voice traits
//! ([`voice`]), and interest taxonomy scores, concatenated and normalized
//! once by [`fusion`]. All encoders are pure functions — identical input
//! always produces a bit-identical vector.

pub mod fusion;
pub mod text;
pub mod voice;

/// Dimension of the hashed-token text vector.
pub const TEXT_DIM: usize = 16;

/// Dimension of the voice trait vector (four traits, repeated once).
pub const VOICE_DIM: usize = 8;

/// Dimension of the fused embedding: text + voice + one slot per interest bucket.
pub const FUSED_DIM: usize = TEXT_DIM + VOICE_DIM + crate::profile::interests::BUCKET_COUNT;

/// Added to every L2 denominator so all-zero vectors normalize to zero
/// instead of NaN.
pub const NORM_EPSILON: f32 = 1e-8;

/// L2-normalize a vector in place, dividing by `norm + NORM_EPSILON`.
pub(crate) fn l2_normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    let denom = norm + NORM_EPSILON;
    for x in vector.iter_mut() {
        *x /= denom;
    }
}
