//! Battle state and core simulation types
//!
//! Entity identity is positional: the store index assigned at roster creation
//! never changes. Losing a collision overwrites `species` and `visual` in
//! place; nothing is ever added to or removed from the store mid-session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ENTITY_COUNT, PER_SPECIES};

/// One of the five battling species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Species {
    /// Fixed cardinality of the species set
    pub const COUNT: usize = 5;

    /// All species, in roster creation order
    pub const ALL: [Species; Species::COUNT] = [
        Species::Rock,
        Species::Paper,
        Species::Scissors,
        Species::Lizard,
        Species::Spock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Rock => "rock",
            Species::Paper => "paper",
            Species::Scissors => "scissors",
            Species::Lizard => "lizard",
            Species::Spock => "spock",
        }
    }

    /// Index into per-species tables (visuals, load flags)
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Opaque handle to a host-loaded image, one per species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Current lifecycle phase of a battle session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Session created, visual references still loading
    Idle,
    /// All visuals loaded; manual drag placement permitted, no motion
    Placing,
    /// Per-frame physics active; placement forbidden
    Running,
    /// Store frozen, winning species recorded
    Finished,
}

/// A battling unit with a square footprint
///
/// `pos` is the top-left corner of the footprint, in arena-local pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub species: Species,
    /// Visual reference drawn by the host; follows `species` on conversion
    pub visual: TextureId,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Entity {
    /// Center of the square footprint
    #[inline]
    pub fn center(&self, size: f32) -> Vec2 {
        self.pos + Vec2::splat(size / 2.0)
    }

    /// Whether an arena-local point lies inside the footprint
    #[inline]
    pub fn contains(&self, point: Vec2, size: f32) -> bool {
        point.x >= self.pos.x
            && point.x <= self.pos.x + size
            && point.y >= self.pos.y
            && point.y <= self.pos.y + size
    }
}

/// Create the full roster: `PER_SPECIES` entities of each species, in
/// `Species::ALL` order, with zeroed kinematics (randomized at launch)
pub fn spawn_roster(visuals: [TextureId; Species::COUNT]) -> Vec<Entity> {
    let mut roster = Vec::with_capacity(ENTITY_COUNT);
    for species in Species::ALL {
        for _ in 0..PER_SPECIES {
            roster.push(Entity {
                species,
                visual: visuals[species.index()],
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
            });
        }
    }
    roster
}
