use anyhow::Result;

use crate::config::AtriaConfig;
use crate::error::EmbedError;

/// Print the full embedding record for a profile as JSON.
pub fn show(config: &AtriaConfig, name: &str) -> Result<()> {
    let lobby = super::open_lobby(config)?;

    let record = lobby
        .get(name)
        .ok_or_else(|| EmbedError::ProfileNotFound(name.to_string()))?;
    println!("{}", serde_json::to_string_pretty(record)?);

    Ok(())
}
