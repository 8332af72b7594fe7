//! Profile extraction and the end-to-end embedding builder.
//!
//! [`build_embedding`] orchestrates the full pipeline: CV resolution
//! ([`cv`]), deterministic voice trait derivation ([`voice`]), interest
//! normalization ([`interests`]), then the encoders and fusion from
//! [`crate::encode`]. The result is an [`EmbeddingRecord`] carrying the
//! fused vector plus the unfused components for diagnostics.

pub mod cv;
pub mod interests;
pub mod voice;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encode::fusion::fuse;
use crate::encode::text::{encode_text_fields, TextField};
use crate::encode::voice::encode_voice_traits;
use crate::error::EmbedError;
use crate::spatial::knn::Candidate;

use cv::CvData;
use voice::VoiceAnalysis;

/// Seed used for voice trait derivation when no transcript, voice id, or
/// audio reference is present.
const VOICE_SEED_PLACEHOLDER: &str = "audio_placeholder";

/// Transient request data for one embedding build. Owned by the caller;
/// nothing here is persisted by the pipeline itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// The fused embedding plus everything that went into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    /// UUID v7 (time-sortable) identifier.
    pub id: String,
    pub name: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// The fused, unit-norm embedding (32 dimensions).
    pub embedding: Vec<f32>,
    /// Unfused text component, for diagnostics.
    pub text_embedding: Vec<f32>,
    /// Unfused voice component, for diagnostics.
    pub voice_embedding: Vec<f32>,
    /// Soft score per taxonomy bucket.
    pub interest_scores: BTreeMap<String, f32>,
    /// Structured CV fields the text encoder consumed.
    pub cv: CvData,
    /// Derived voice traits.
    pub voice: VoiceAnalysis,
    /// Room assigned at lobby insertion, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    /// Normalized 3D coordinate assigned at lobby insertion, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<[f32; 3]>,
}

impl Candidate for EmbeddingRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn embedding(&self) -> &[f32] {
        &self.embedding
    }
}

/// Run the full embedding pipeline for one profile.
///
/// CV resolution order: explicit path, then inline text, then an empty CV.
/// Voice seed order: transcript, then voice id, then a placeholder constant.
/// The profile name is identity only — it feeds no encoder.
///
/// Pure apart from the filesystem read behind `cv_path`; the only error is
/// [`EmbedError::CvNotFound`] (or an I/O failure on an unreadable file).
pub fn build_embedding(input: &ProfileInput) -> Result<EmbeddingRecord, EmbedError> {
    let cv_data = match (&input.cv_path, &input.cv_text) {
        (Some(path), _) => cv::parse_cv(path)?,
        (None, Some(text)) => cv::parse_cv_text(text),
        (None, None) => CvData::default(),
    };

    let voice_seed = input
        .transcript
        .as_deref()
        .or(input.voice_id.as_deref())
        .unwrap_or(VOICE_SEED_PLACEHOLDER);
    let voice_analysis = voice::analyze_voice(voice_seed, input.transcript.as_deref());

    let interest_scores = interests::normalize_interests(&input.interests);

    let mut text_fields = BTreeMap::new();
    text_fields.insert(
        "summary".to_string(),
        TextField::Text(cv_data.summary.clone()),
    );
    text_fields.insert(
        "skills".to_string(),
        TextField::Tags(cv_data.skills.clone()),
    );
    text_fields.insert(
        "experience".to_string(),
        TextField::Tags(cv_data.experience.clone()),
    );
    text_fields.insert(
        "interests".to_string(),
        TextField::Tags(input.interests.clone()),
    );

    let text_embedding = encode_text_fields(&text_fields);
    let voice_embedding = encode_voice_traits(&voice_analysis.trait_scores());
    let embedding = fuse(&text_embedding, &voice_embedding, &interest_scores);

    debug!(
        name = %input.name,
        skills = cv_data.skills.len(),
        dims = embedding.len(),
        "embedding built"
    );

    Ok(EmbeddingRecord {
        id: uuid::Uuid::now_v7().to_string(),
        name: input.name.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
        embedding,
        text_embedding,
        voice_embedding,
        interest_scores,
        cv: cv_data,
        voice: voice_analysis,
        room: None,
        coords: None,
    })
}

/// Embed a batch of profiles, stopping at the first failure.
pub fn batch_embed(inputs: &[ProfileInput]) -> Result<Vec<EmbeddingRecord>, EmbedError> {
    inputs.iter().map(build_embedding).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{FUSED_DIM, TEXT_DIM, VOICE_DIM};

    fn sample_input() -> ProfileInput {
        ProfileInput {
            name: "Test User".to_string(),
            cv_text: Some("Python developer with ML background and product instincts.".into()),
            transcript: Some("Hi there, I like building things.".into()),
            interests: vec!["ml".into(), "product".into()],
            ..Default::default()
        }
    }

    #[test]
    fn builds_expected_dimensions() {
        let record = build_embedding(&sample_input()).unwrap();
        assert_eq!(record.embedding.len(), FUSED_DIM);
        assert_eq!(record.text_embedding.len(), TEXT_DIM);
        assert_eq!(record.voice_embedding.len(), VOICE_DIM);
    }

    #[test]
    fn embedding_is_deterministic() {
        let input = sample_input();
        let first = build_embedding(&input).unwrap();
        let second = build_embedding(&input).unwrap();
        assert_eq!(first.embedding, second.embedding);
        assert_eq!(first.text_embedding, second.text_embedding);
        assert_eq!(first.voice_embedding, second.voice_embedding);
    }

    #[test]
    fn name_is_excluded_from_features() {
        let mut a = sample_input();
        let mut b = sample_input();
        a.name = "Alice".to_string();
        b.name = "Bob".to_string();
        assert_eq!(
            build_embedding(&a).unwrap().embedding,
            build_embedding(&b).unwrap().embedding
        );
    }

    #[test]
    fn empty_input_is_well_defined() {
        let record = build_embedding(&ProfileInput {
            name: "Nobody".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert!(record.embedding.iter().all(|x| x.is_finite()));
        // Interest fallback keeps the fused vector off zero.
        let norm: f32 = record.embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!(norm > 0.5);
    }

    #[test]
    fn missing_cv_path_surfaces_not_found() {
        let input = ProfileInput {
            name: "Ghost".to_string(),
            cv_path: Some(PathBuf::from("/no/such/cv.pdf")),
            ..Default::default()
        };
        assert!(matches!(
            build_embedding(&input),
            Err(EmbedError::CvNotFound(_))
        ));
    }

    #[test]
    fn transcript_seeds_voice_over_voice_id() {
        let with_transcript = build_embedding(&sample_input()).unwrap();

        let mut alt = sample_input();
        alt.voice_id = Some("voice-123".into());
        let with_both = build_embedding(&alt).unwrap();

        // Transcript wins, so the voice component is unchanged.
        assert_eq!(with_transcript.voice_embedding, with_both.voice_embedding);
    }

    #[test]
    fn batch_embed_preserves_order() {
        let mut second = sample_input();
        second.name = "Second".to_string();
        let records = batch_embed(&[sample_input(), second]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Test User");
        assert_eq!(records[1].name, "Second");
    }
}
