//! Deterministic simulation module
//!
//! All battle logic lives here. This module must be pure and deterministic:
//! - One unit-less Euler step per frame
//! - Seeded RNG only (owned by the controller)
//! - Stable iteration order (by store index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod placement;
pub mod rules;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use placement::{DragState, SurfaceRect, arena_local, hit_test, pick};
pub use rules::{beats, resolve};
pub use state::{Entity, Phase, Species, TextureId, spawn_roster};
pub use tick::{StepOutcome, step};
