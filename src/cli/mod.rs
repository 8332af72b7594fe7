//! Terminal commands operating on the lobby store.

pub mod add;
pub mod neighbors;
pub mod rooms;
pub mod seed;
pub mod show;

use anyhow::{Context, Result};

use crate::config::AtriaConfig;
use crate::lobby::Lobby;

/// Load the lobby referenced by the config, empty if it does not exist yet.
fn open_lobby(config: &AtriaConfig) -> Result<Lobby> {
    let path = config.resolved_lobby_path();
    Lobby::load(&path, config.pipeline.room_threshold)
        .with_context(|| format!("failed to load lobby from {}", path.display()))
}

/// Persist the lobby back to the configured path.
fn save_lobby(config: &AtriaConfig, lobby: &Lobby) -> Result<()> {
    let path = config.resolved_lobby_path();
    lobby
        .save(&path)
        .with_context(|| format!("failed to save lobby to {}", path.display()))
}
