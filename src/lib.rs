//! Spatial social matching engine — deterministic profile embeddings,
//! neighbor search, and room placement.
//!
//! Atria turns heterogeneous, sparse profile signals (CV text, voice-trait
//! scores, tagged interests) into a fixed 32-dimension fingerprint, then
//! uses that fingerprint to find nearest neighbors and to place each
//! profile into a spatial "room" cluster and a normalized 3D coordinate for
//! visualization.
//!
//! # Architecture
//!
//! - **Encoding**: hash-based token bucketing, cyclic voice trait padding,
//!   and fixed-taxonomy interest scores, fused by one final L2 normalization.
//!   Deliberately lossy and model-free — the whole pipeline is a pure,
//!   deterministic function of its input.
//! - **Search**: brute-force cosine-distance ranking over the stored
//!   records; no index structure.
//! - **Rooms**: greedy, order-dependent single-linkage clustering with no
//!   centroids — a profile joins the first room with any member inside the
//!   distance threshold.
//! - **Storage**: a JSON-backed [`lobby::Lobby`] repository owned by the
//!   caller; the pipeline itself keeps no state.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`encode`] — Per-modality feature encoders and vector fusion
//! - [`profile`] — CV/voice/interest extraction and the embedding builder
//! - [`spatial`] — Neighbor search, room assignment, and 3D projection
//! - [`lobby`] — The embedding collection and room map as an explicit repository

pub mod cli;
pub mod config;
pub mod encode;
pub mod error;
pub mod lobby;
pub mod profile;
pub mod spatial;

pub use error::EmbedError;
