//! Spatial placement: neighbor search, room clustering, 3D projection.

pub mod coords;
pub mod knn;
pub mod rooms;

use crate::encode::NORM_EPSILON;

/// Cosine distance: `1 - cos(a, b)`.
///
/// The denominator is epsilon-stabilized, so the function is total — a
/// zero-norm input yields distance 1.0 rather than NaN.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    1.0 - dot / (norm_a * norm_b + NORM_EPSILON)
}
