//! The lobby — an explicit repository for embedding records and rooms.
//!
//! The pipeline functions themselves are stateless; all process-lifetime
//! state (the embedding collection used for neighbor search and the room
//! membership map) lives here and is passed around by handle. `&mut self`
//! on the write path makes the single-writer discipline explicit — callers
//! serving concurrent writers must wrap the lobby in their own lock.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EmbedError;
use crate::profile::{build_embedding, EmbeddingRecord, ProfileInput};
use crate::spatial::coords::project_to_3d;
use crate::spatial::knn::{find_neighbors, Neighbor};
use crate::spatial::rooms::{RoomMap, DEFAULT_ROOM_THRESHOLD};

/// On-disk shape of a saved lobby.
#[derive(Default, Serialize, Deserialize)]
struct LobbyFile {
    records: Vec<EmbeddingRecord>,
    rooms: RoomMap,
}

/// In-memory store of embedded profiles and their room assignments.
pub struct Lobby {
    records: Vec<EmbeddingRecord>,
    rooms: RoomMap,
    room_threshold: f32,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_THRESHOLD)
    }
}

impl Lobby {
    pub fn new(room_threshold: f32) -> Self {
        Self {
            records: Vec::new(),
            rooms: RoomMap::new(),
            room_threshold,
        }
    }

    /// Embed a profile, place it (room + 3D coordinate), and append it.
    pub fn add(&mut self, input: &ProfileInput) -> Result<&EmbeddingRecord, EmbedError> {
        let mut record = build_embedding(input)?;
        record.coords = Some(project_to_3d(&record.embedding));
        record.room = Some(self.rooms.assign(&record.embedding, self.room_threshold));

        info!(
            name = %record.name,
            room = record.room.as_deref().unwrap_or(""),
            "profile added to lobby"
        );

        self.records.push(record);
        Ok(self.records.last().expect("record was just pushed"))
    }

    /// First record with a matching name, if any.
    pub fn get(&self, name: &str) -> Option<&EmbeddingRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Profile names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    pub fn records(&self) -> &[EmbeddingRecord] {
        &self.records
    }

    pub fn rooms(&self) -> &RoomMap {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rank every stored record against the named profile's embedding.
    ///
    /// The target profile itself is among the candidates, so it appears in
    /// its own neighbor list at distance ~0 — callers that want it gone
    /// drop the first entry.
    pub fn neighbors_of(&self, name: &str, k: usize) -> Result<Vec<Neighbor>, EmbedError> {
        let target = self
            .get(name)
            .ok_or_else(|| EmbedError::ProfileNotFound(name.to_string()))?;
        Ok(find_neighbors(&target.embedding, &self.records, k))
    }

    /// Load a lobby from a JSON file. A missing file yields an empty lobby.
    pub fn load(path: &Path, room_threshold: f32) -> Result<Self, EmbedError> {
        if !path.exists() {
            return Ok(Self::new(room_threshold));
        }

        let contents = std::fs::read_to_string(path)?;
        let file: LobbyFile = serde_json::from_str(&contents)?;
        Ok(Self {
            records: file.records,
            rooms: file.rooms,
            room_threshold,
        })
    }

    /// Persist the lobby as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), EmbedError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = LobbyFile {
            records: self.records.clone(),
            rooms: self.rooms.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}
