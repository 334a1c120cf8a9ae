//! Per-frame simulation step
//!
//! Ordered sub-phases, every frame while the battle runs:
//! 1. integrate motion (unit-less Euler, `pos += vel`)
//! 2. reflect off arena boundaries, per axis independently
//! 3. O(n^2) pairwise collision scan on footprint centers
//! 4. convert losers to the winner's species in ascending index-pair order
//! 5. survivor check over the whole store
//!
//! Geometry re-sync (sub-phase 0 in the component contract) happens in the
//! controller before `step` is called, since only the host knows the
//! surface's current displayed size.

use super::arena::Arena;
use super::rules::resolve;
use super::state::{Entity, Species};
use crate::consts::{COLLISION_FACTOR, ENTITY_SIZE};

/// Result of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More than one species still present
    Ongoing,
    /// Exactly one species remains; the battle is decided
    Decided(Species),
}

/// Advance the battle by one frame
pub fn step(entities: &mut [Entity], arena: &Arena) -> StepOutcome {
    integrate_and_reflect(entities, arena);
    resolve_collisions(entities);

    match survivor(entities) {
        Some(species) => StepOutcome::Decided(species),
        None => StepOutcome::Ongoing,
    }
}

/// Euler-integrate every entity, then bounce it off the arena edges
///
/// Horizontal and vertical reflections are evaluated independently so a
/// corner contact flips both velocity components in the same frame.
fn integrate_and_reflect(entities: &mut [Entity], arena: &Arena) {
    for entity in entities.iter_mut() {
        entity.pos += entity.vel;

        if entity.pos.x <= 0.0 {
            entity.pos.x = 0.0;
            entity.vel.x = -entity.vel.x;
        } else if entity.pos.x + ENTITY_SIZE >= arena.width {
            entity.pos.x = arena.width - ENTITY_SIZE;
            entity.vel.x = -entity.vel.x;
        }

        if entity.pos.y <= 0.0 {
            entity.pos.y = 0.0;
            entity.vel.y = -entity.vel.y;
        } else if entity.pos.y + ENTITY_SIZE >= arena.height {
            entity.pos.y = arena.height - ENTITY_SIZE;
            entity.vel.y = -entity.vel.y;
        }
    }
}

/// Scan every unordered pair and convert losers in place
///
/// Pairs are processed in ascending index order `(0,1), (0,2), ...`. Inside a
/// cluster of three or more mutually colliding entities this order decides
/// which entity converts first within the frame; that tie-break is fixed and
/// documented, not random. Conversion copies the winner's species and visual
/// onto the loser and leaves its kinematics untouched.
fn resolve_collisions(entities: &mut [Entity]) {
    let threshold_sq = (ENTITY_SIZE * COLLISION_FACTOR).powi(2);

    for i in 0..entities.len() {
        for j in (i + 1)..entities.len() {
            let delta = entities[i].center(ENTITY_SIZE) - entities[j].center(ENTITY_SIZE);
            if delta.length_squared() >= threshold_sq {
                continue;
            }

            match resolve(entities[i].species, entities[j].species) {
                Some(winner) if winner == entities[i].species => {
                    entities[j].species = entities[i].species;
                    entities[j].visual = entities[i].visual;
                }
                Some(_) => {
                    entities[i].species = entities[j].species;
                    entities[i].visual = entities[j].visual;
                }
                None => {}
            }
        }
    }
}

/// The single remaining species, if the battle is over
pub fn survivor(entities: &[Entity]) -> Option<Species> {
    let first = entities.first()?.species;
    entities
        .iter()
        .all(|e| e.species == first)
        .then_some(first)
}
