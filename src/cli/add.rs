use anyhow::Result;
use std::path::PathBuf;

use crate::config::AtriaConfig;
use crate::profile::ProfileInput;

/// Embed a single profile, place it, and persist the lobby.
#[allow(clippy::too_many_arguments)]
pub fn add(
    config: &AtriaConfig,
    name: &str,
    cv_path: Option<PathBuf>,
    cv_text: Option<String>,
    transcript: Option<String>,
    voice_id: Option<String>,
    interests: Vec<String>,
) -> Result<()> {
    let mut lobby = super::open_lobby(config)?;

    let input = ProfileInput {
        name: name.to_string(),
        cv_path,
        cv_text,
        transcript,
        voice_id,
        interests,
    };

    let record = lobby.add(&input)?;
    let room = record.room.clone().unwrap_or_default();
    let coords = record.coords.unwrap_or_default();

    println!("Added '{name}'");
    println!("  room:   {room}");
    println!(
        "  coords: ({:.3}, {:.3}, {:.3})",
        coords[0], coords[1], coords[2]
    );
    println!("  skills: {}", record.cv.skills.join(", "));

    super::save_lobby(config, &lobby)?;
    Ok(())
}
