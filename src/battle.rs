//! Battle lifecycle controller
//!
//! Owns the entity store and arena for the duration of a session and drives
//! the phase machine `Idle -> Placing -> Running -> Finished`, with `reset`
//! returning to a fresh `Idle` from any phase.
//!
//! The host calls `frame` once per scheduled animation frame with the
//! surface's current displayed size; the controller decides whether that
//! frame launches the battle, advances it one step, or does nothing. Phase
//! is checked at frame entry, so a frame scheduled before a `reset` or after
//! the win mutates nothing. Pointer events mutate state only while placing;
//! steps run only while running - the two mutators can never interleave.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{ENTITY_SIZE, MAX_SPEED, MIN_SPEED};
use crate::sim::arena::Arena;
use crate::sim::placement::{DragState, SurfaceRect, arena_local, hit_test};
use crate::sim::state::{Entity, Phase, Species, TextureId, spawn_roster};
use crate::sim::tick::{StepOutcome, step};

/// What the host should do with its cursor, derived from pointer movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    /// Hovering a draggable entity
    Grab,
    /// Actively dragging
    Grabbing,
}

/// Per-frame report for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub phase: Phase,
    /// Set exactly when `phase == Finished`
    pub winner: Option<Species>,
}

/// The lifecycle controller: one battle session
pub struct Battle {
    seed: u64,
    rng: Pcg32,
    arena: Arena,
    entities: Vec<Entity>,
    visuals: [TextureId; Species::COUNT],
    loaded: [bool; Species::COUNT],
    phase: Phase,
    winner: Option<Species>,
    drag: DragState,
    start_requested: bool,
    ticks: u64,
}

impl Battle {
    /// Create a fresh session
    ///
    /// The roster is created immediately (ten entities per species, zeroed
    /// kinematics); the session stays in `Idle` until the host reports all
    /// five species' visuals loaded.
    pub fn new(seed: u64, visuals: [TextureId; Species::COUNT]) -> Self {
        log::info!("battle session created with seed {seed}");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena: Arena::default(),
            entities: spawn_roster(visuals),
            visuals,
            loaded: [false; Species::COUNT],
            phase: Phase::Idle,
            winner: None,
            drag: DragState::default(),
            start_requested: false,
            ticks: 0,
        }
    }

    /// One-shot load notification from the asset collaborator; idempotent
    ///
    /// When the last species reports, the session advances to `Placing`.
    pub fn visual_loaded(&mut self, species: Species) {
        self.loaded[species.index()] = true;
        if self.phase == Phase::Idle && self.all_visuals_loaded() {
            log::info!("all visuals loaded, placement open");
            self.phase = Phase::Placing;
        }
    }

    #[inline]
    pub fn all_visuals_loaded(&self) -> bool {
        self.loaded.iter().all(|&l| l)
    }

    /// Number of entities whose visual reference has finished loading
    pub fn loaded_visuals(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| self.loaded[e.species.index()])
            .count()
    }

    /// Request the battle to begin
    ///
    /// Takes effect inside the next `frame` call, where the surface size is
    /// known: the launch waits for all visuals and a ready surface. Calling
    /// this while running or finished is a no-op.
    pub fn start(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Placing) {
            self.start_requested = true;
        }
    }

    /// Return to a fresh `Idle` session; safe from any phase
    ///
    /// Tears the store down entirely: a new roster with zeroed kinematics,
    /// cleared winner, drag and load state. Any frame already scheduled by
    /// the host finds the phase gate closed and mutates nothing.
    pub fn reset(&mut self) {
        log::info!("battle reset");
        self.entities = spawn_roster(self.visuals);
        self.loaded = [false; Species::COUNT];
        self.phase = Phase::Idle;
        self.winner = None;
        self.drag = DragState::default();
        self.start_requested = false;
        self.ticks = 0;
    }

    /// The host's frame-pacing callback
    ///
    /// `width`/`height` are the surface's current displayed size; geometry is
    /// re-synced before anything else because the surface can change between
    /// frames. Exactly one simulation step runs per call while `Running`.
    pub fn frame(&mut self, width: f32, height: f32) -> FrameReport {
        let resized = self.arena.resize(width, height);

        match self.phase {
            Phase::Idle | Phase::Placing => {
                // Keep manually placed entities inside a shrunken surface
                if resized && self.arena.is_ready() {
                    for entity in &mut self.entities {
                        entity.pos = self.arena.clamp(entity.pos, ENTITY_SIZE);
                    }
                }
                if self.start_requested {
                    self.try_launch();
                }
            }
            Phase::Running => {
                if self.arena.is_ready() {
                    self.ticks += 1;
                    if let StepOutcome::Decided(species) = step(&mut self.entities, &self.arena) {
                        log::info!("{} wins after {} ticks", species.as_str(), self.ticks);
                        self.winner = Some(species);
                        self.phase = Phase::Finished;
                    }
                }
            }
            Phase::Finished => {}
        }

        self.report()
    }

    /// Randomize the roster and enter `Running`, if the gates allow it
    ///
    /// The frame that launches draws the randomized layout statically; the
    /// first step happens on the following frame.
    fn try_launch(&mut self) {
        if !self.all_visuals_loaded() || !self.arena.is_ready() {
            return;
        }
        self.randomize_entities();
        self.drag.end();
        self.start_requested = false;
        self.phase = Phase::Running;
        log::info!(
            "battle started in {}x{} arena",
            self.arena.width,
            self.arena.height
        );
    }

    /// Uniform random position within bounds, uniform random direction,
    /// speed drawn from the fixed launch range
    fn randomize_entities(&mut self) {
        let span = self.arena.placement_span(ENTITY_SIZE);
        for entity in &mut self.entities {
            entity.pos = Vec2::new(
                self.rng.random_range(0.0..=span.x),
                self.rng.random_range(0.0..=span.y),
            );
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.random_range(MIN_SPEED..=MAX_SPEED);
            entity.vel = Vec2::new(angle.cos(), angle.sin()) * speed;
        }
    }

    // --- Pointer entry points (mutate only while placing) ---

    /// Pointer/touch press; returns true when a drag began
    pub fn pointer_down(&mut self, client: Vec2, rect: SurfaceRect) -> bool {
        if self.phase != Phase::Placing {
            return false;
        }
        let pointer = arena_local(client, rect);
        self.drag.begin(&self.entities, pointer)
    }

    /// Pointer/touch move; drives the drag and the hover cursor
    pub fn pointer_move(&mut self, client: Vec2, rect: SurfaceRect) -> Cursor {
        if self.phase != Phase::Placing {
            return Cursor::Default;
        }
        let pointer = arena_local(client, rect);
        if self.drag.update(&mut self.entities, &self.arena, pointer) {
            Cursor::Grabbing
        } else if hit_test(&self.entities, pointer) {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// Pointer/touch release; idempotent
    pub fn pointer_up(&mut self) {
        self.drag.end();
    }

    /// Pointer leave / touch cancel; treated as a release
    pub fn pointer_cancel(&mut self) {
        self.drag.end();
    }

    // --- Read surface for the renderer and UI ---

    /// Snapshot of the ordered entity list for drawing; read-only
    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn winner(&self) -> Option<Species> {
        self.winner
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Completed simulation steps this session
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn report(&self) -> FrameReport {
        FrameReport {
            phase: self.phase,
            winner: self.winner,
        }
    }
}
