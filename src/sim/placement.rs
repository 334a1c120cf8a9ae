//! Pre-start manual placement: pointer normalization, hit testing, dragging
//!
//! Mouse and touch input arrive as client coordinates plus the rendering
//! surface's bounding rectangle; the core converts them to arena-local
//! coordinates itself. Dragging is only meaningful while the battle is in
//! the placing phase; the controller enforces that gate.

use glam::Vec2;

use super::arena::Arena;
use super::state::Entity;
use crate::consts::ENTITY_SIZE;

/// Top-left corner of the rendering surface in client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
}

/// Convert a client-space pointer reading to arena-local coordinates
#[inline]
pub fn arena_local(client: Vec2, rect: SurfaceRect) -> Vec2 {
    Vec2::new(client.x - rect.left, client.y - rect.top)
}

/// Hit-test entities topmost-first
///
/// Entities are drawn in store order, so the last index under the pointer is
/// the one visually on top; iterate from the end and return the first match.
pub fn pick(entities: &[Entity], pointer: Vec2) -> Option<usize> {
    entities
        .iter()
        .enumerate()
        .rev()
        .find(|(_, e)| e.contains(pointer, ENTITY_SIZE))
        .map(|(i, _)| i)
}

/// Whether any entity lies under the pointer (cursor affordance only)
pub fn hit_test(entities: &[Entity], pointer: Vec2) -> bool {
    pick(entities, pointer).is_some()
}

/// An in-progress drag of a single entity
///
/// `offset` is the pointer-to-corner offset captured at grab time, so the
/// entity does not jump to center itself under the pointer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    active: Option<(usize, Vec2)>,
}

impl DragState {
    /// Try to grab the topmost entity under the pointer
    ///
    /// Returns true when a drag began.
    pub fn begin(&mut self, entities: &[Entity], pointer: Vec2) -> bool {
        match pick(entities, pointer) {
            Some(index) => {
                self.active = Some((index, pointer - entities[index].pos));
                true
            }
            None => false,
        }
    }

    /// Move the dragged entity to follow the pointer, clamped into bounds
    ///
    /// A pure no-op when no drag is active.
    pub fn update(&self, entities: &mut [Entity], arena: &Arena, pointer: Vec2) -> bool {
        let Some((index, offset)) = self.active else {
            return false;
        };
        let Some(entity) = entities.get_mut(index) else {
            return false;
        };
        entity.pos = arena.clamp(pointer - offset, ENTITY_SIZE);
        true
    }

    /// Release the drag; idempotent
    pub fn end(&mut self) {
        self.active = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Species, TextureId};

    fn entity_at(species: Species, x: f32, y: f32) -> Entity {
        Entity {
            species,
            visual: TextureId(species.index() as u32),
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
        }
    }

    #[test]
    fn test_arena_local_subtracts_surface_origin() {
        let rect = SurfaceRect { left: 40.0, top: 25.0 };
        assert_eq!(
            arena_local(Vec2::new(140.0, 125.0), rect),
            Vec2::new(100.0, 100.0)
        );
    }

    #[test]
    fn test_pick_prefers_topmost() {
        // Two overlapping entities: the later (topmost-drawn) index wins
        let entities = vec![
            entity_at(Species::Rock, 100.0, 100.0),
            entity_at(Species::Paper, 150.0, 100.0),
        ];
        assert_eq!(pick(&entities, Vec2::new(160.0, 150.0)), Some(1));
        assert_eq!(pick(&entities, Vec2::new(105.0, 150.0)), Some(0));
        assert_eq!(pick(&entities, Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let arena = Arena::new(800.0, 600.0);
        let mut entities = vec![entity_at(Species::Rock, 100.0, 100.0)];
        let mut drag = DragState::default();

        // Grab 30,40 inside the footprint
        assert!(drag.begin(&entities, Vec2::new(130.0, 140.0)));
        drag.update(&mut entities, &arena, Vec2::new(330.0, 240.0));
        assert_eq!(entities[0].pos, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_drag_clamps_to_bounds() {
        let arena = Arena::new(800.0, 600.0);
        let mut entities = vec![entity_at(Species::Lizard, 100.0, 100.0)];
        let mut drag = DragState::default();

        assert!(drag.begin(&entities, Vec2::new(100.0, 100.0)));
        drag.update(&mut entities, &arena, Vec2::new(-500.0, 10_000.0));
        assert_eq!(entities[0].pos, Vec2::new(0.0, 600.0 - ENTITY_SIZE));
    }

    #[test]
    fn test_update_without_active_drag_is_noop() {
        let arena = Arena::new(800.0, 600.0);
        let mut entities = vec![entity_at(Species::Spock, 100.0, 100.0)];
        let drag = DragState::default();

        assert!(!drag.update(&mut entities, &arena, Vec2::new(400.0, 400.0)));
        assert_eq!(entities[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_begin_misses_empty_space() {
        let entities = vec![entity_at(Species::Rock, 100.0, 100.0)];
        let mut drag = DragState::default();
        assert!(!drag.begin(&entities, Vec2::new(600.0, 600.0)));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_end_is_idempotent() {
        let entities = vec![entity_at(Species::Rock, 100.0, 100.0)];
        let mut drag = DragState::default();
        drag.begin(&entities, Vec2::new(110.0, 110.0));
        assert!(drag.is_active());
        drag.end();
        drag.end();
        assert!(!drag.is_active());
    }

    #[test]
    fn test_hit_test_matches_pick() {
        let entities = vec![entity_at(Species::Scissors, 0.0, 0.0)];
        assert!(hit_test(&entities, Vec2::new(50.0, 50.0)));
        assert!(!hit_test(&entities, Vec2::new(150.0, 150.0)));
    }
}
