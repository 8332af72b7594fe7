//! Greedy online room assignment.
//!
//! A room is an order-dependent cluster with no centroid: a new embedding
//! joins the first room (in room creation order) containing any member
//! strictly closer than the threshold, else it founds a new room. Rooms
//! never merge, split, or shrink, and earlier assignments are never
//! re-evaluated, so cluster quality depends on insertion order — a cheap,
//! single-pass heuristic rather than a global clustering.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cosine_distance;

/// Distance below which a new embedding joins an existing room.
pub const DEFAULT_ROOM_THRESHOLD: f32 = 0.6;

/// One room: a generated label plus members in join order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Member embeddings, insertion order preserved, append-only.
    pub members: Vec<Vec<f32>>,
}

/// Insertion-ordered collection of rooms.
///
/// Iteration order is room creation order; assignment correctness depends
/// on that order being stable and reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomMap {
    rooms: Vec<Room>,
}

impl RoomMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an embedding to a room and return the room id.
    ///
    /// Scans rooms in creation order; the first room with any member at
    /// cosine distance strictly below `threshold` wins and the embedding is
    /// appended to it. No match across all rooms creates `room-<count+1>`
    /// with the embedding as sole member.
    pub fn assign(&mut self, embedding: &[f32], threshold: f32) -> String {
        for room in &mut self.rooms {
            let joins = room
                .members
                .iter()
                .any(|member| cosine_distance(embedding, member) < threshold);
            if joins {
                room.members.push(embedding.to_vec());
                debug!(room = %room.id, members = room.members.len(), "joined existing room");
                return room.id.clone();
            }
        }

        let id = format!("room-{}", self.rooms.len() + 1);
        debug!(room = %id, "created new room");
        self.rooms.push(Room {
            id: id.clone(),
            members: vec![embedding.to_vec()],
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Rooms in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
