use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::config::AtriaConfig;
use crate::profile::ProfileInput;

/// One demo profile as found in a seed file.
#[derive(Debug, Deserialize)]
struct SeedProfile {
    name: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    voice_id: Option<String>,
    #[serde(default)]
    interests: Vec<String>,
}

/// Batch-import demo profiles from a JSON array file.
pub fn seed(config: &AtriaConfig, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file: {}", path.display()))?;
    let profiles: Vec<SeedProfile> =
        serde_json::from_str(&contents).context("failed to parse seed file JSON")?;

    let mut lobby = super::open_lobby(config)?;

    for profile in &profiles {
        let input = ProfileInput {
            name: profile.name.clone(),
            cv_text: profile.summary.clone(),
            transcript: profile.transcript.clone(),
            voice_id: profile.voice_id.clone(),
            interests: profile.interests.clone(),
            ..Default::default()
        };
        let record = lobby.add(&input)?;
        println!(
            "  {} -> {}",
            record.name,
            record.room.as_deref().unwrap_or("")
        );
    }

    super::save_lobby(config, &lobby)?;
    println!(
        "Seeded {} profile(s) into {} room(s).",
        profiles.len(),
        lobby.rooms().len()
    );

    Ok(())
}
