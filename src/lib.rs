//! RPSLS Arena - an autonomous Rock-Paper-Scissors-Lizard-Spock battle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, domination rules)
//! - `battle`: Lifecycle controller (phases, asset gate, frame drive)
//!
//! The crate is the simulation core only. Drawing, image decoding and page
//! chrome belong to the host, which supplies the surface size and per-species
//! visual references, forwards raw pointer events, and reads back the entity
//! list once per frame to draw it.

pub mod battle;
pub mod sim;

pub use battle::{Battle, Cursor, FrameReport};
pub use sim::{Arena, Entity, Phase, Species, TextureId};

/// Simulation configuration constants
pub mod consts {
    /// Side length of every entity's square footprint, in surface pixels
    pub const ENTITY_SIZE: f32 = 100.0;

    /// Entities per species at roster creation
    pub const PER_SPECIES: usize = 10;
    /// Total roster size, invariant for the whole session
    pub const ENTITY_COUNT: usize = PER_SPECIES * crate::sim::Species::COUNT;

    /// Two entities collide when their centers are strictly closer than
    /// `COLLISION_FACTOR * ENTITY_SIZE`
    pub const COLLISION_FACTOR: f32 = 0.7;

    /// Launch speed range, in pixels per frame
    pub const MIN_SPEED: f32 = 1.5;
    pub const MAX_SPEED: f32 = 3.0;
}
