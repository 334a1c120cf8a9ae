//! Arena geometry: surface-tracking bounds and coordinate clamping
//!
//! The arena mirrors the rendering surface's displayed size, which the host
//! may change between frames (layout reflow, window resize). Geometry is
//! re-synced at the top of every frame before any position computation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular battle bounds, `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Update bounds from the surface's displayed size
    ///
    /// Returns true when the dimensions actually changed; idempotent
    /// otherwise.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// A collapsed surface means "not yet ready": no placement ranges or
    /// stepping may be computed against it
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Largest valid top-left coordinate for a square footprint of `size`
    ///
    /// Degenerate spans (footprint larger than the arena) collapse to zero
    /// rather than going negative.
    #[inline]
    pub fn placement_span(&self, size: f32) -> Vec2 {
        Vec2::new((self.width - size).max(0.0), (self.height - size).max(0.0))
    }

    /// Project a top-left coordinate so the footprint lies fully in bounds
    pub fn clamp(&self, pos: Vec2, size: f32) -> Vec2 {
        let span = self.placement_span(size);
        Vec2::new(pos.x.clamp(0.0, span.x), pos.y.clamp(0.0, span.y))
    }
}
