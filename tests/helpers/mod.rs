#![allow(dead_code)]

use atria::profile::ProfileInput;

/// Build a profile input with inline CV text and a transcript derived from
/// the name, so each name yields a distinct but reproducible profile.
pub fn profile(name: &str, cv_text: &str, interests: &[&str]) -> ProfileInput {
    ProfileInput {
        name: name.to_string(),
        cv_text: Some(cv_text.to_string()),
        transcript: Some(format!("Hello, this is {name}.")),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Unit vector with a spike at position `seed`.
pub fn spike_embedding(seed: usize, dim: usize) -> Vec<f32> {
    let mut v = vec![0.0f32; dim];
    v[seed % dim] = 1.0;
    v
}

/// Slightly perturbed copy of `base` with high cosine similarity to it.
pub fn similar_embedding(base: &[f32]) -> Vec<f32> {
    let mut v = base.to_vec();
    for i in 0..3.min(v.len()) {
        v[i] += 0.05;
    }
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}
