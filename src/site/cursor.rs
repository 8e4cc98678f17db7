//! Decorative pointer follower: a small dot and a trailing ring chasing the mouse on springs.

use crate::animation::spring::{SmoothingConfig, SmoothingFilter};
use crate::foundation::core::Vec2;
use crate::foundation::error::FolioResult;

/// Scale applied while the pointer is over a clickable element.
pub const HOVER_SCALE: f64 = 1.5;

/// Spring driving the dot.
pub const DOT_SPRING: SmoothingConfig = SmoothingConfig {
    stiffness: 500.0,
    damping: 28.0,
    rest_delta: 0.01,
};

/// Spring driving the ring.
pub const RING_SPRING: SmoothingConfig = SmoothingConfig {
    stiffness: 250.0,
    damping: 20.0,
    rest_delta: 0.01,
};

/// One spring-driven marker.
#[derive(Clone, Debug)]
pub struct Follower {
    half_size: f64,
    x: SmoothingFilter,
    y: SmoothingFilter,
    scale: SmoothingFilter,
}

impl Follower {
    /// Marker of `size` pixels, centred on the pointer, resting at the origin.
    pub fn new(config: SmoothingConfig, size: f64) -> FolioResult<Self> {
        let half_size = size / 2.0;
        Ok(Self {
            half_size,
            x: SmoothingFilter::new(config, -half_size)?,
            y: SmoothingFilter::new(config, -half_size)?,
            scale: SmoothingFilter::new(config, 1.0)?,
        })
    }

    /// Top-left corner of the marker.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position(), self.y.position())
    }

    pub fn scale(&self) -> f64 {
        self.scale.position()
    }

    fn tick(&mut self, pointer: Vec2, hovering: bool, dt_secs: f64) {
        self.x.tick(pointer.x - self.half_size, dt_secs);
        self.y.tick(pointer.y - self.half_size, dt_secs);
        self.scale
            .tick(if hovering { HOVER_SCALE } else { 1.0 }, dt_secs);
    }

    fn is_settled(&self, pointer: Vec2, hovering: bool) -> bool {
        self.x.is_settled(pointer.x - self.half_size)
            && self.y.is_settled(pointer.y - self.half_size)
            && self
                .scale
                .is_settled(if hovering { HOVER_SCALE } else { 1.0 })
    }
}

/// Dot plus trailing ring.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    pointer: Vec2,
    hovering: bool,
    dot: Follower,
    ring: Follower,
}

impl CursorFollower {
    /// 16px dot and 32px ring on their stock springs.
    pub fn new() -> FolioResult<Self> {
        Self::with_springs(DOT_SPRING, RING_SPRING)
    }

    pub fn with_springs(dot: SmoothingConfig, ring: SmoothingConfig) -> FolioResult<Self> {
        Ok(Self {
            pointer: Vec2::ZERO,
            hovering: false,
            dot: Follower::new(dot, 16.0)?,
            ring: Follower::new(ring, 32.0)?,
        })
    }

    /// Record a pointer move and whether the element under it is clickable.
    pub fn on_pointer_move(&mut self, pointer: Vec2, over_clickable: bool) {
        if pointer.is_finite() {
            self.pointer = pointer;
        }
        self.hovering = over_clickable;
    }

    /// Advance both markers by `dt_secs`.
    pub fn tick(&mut self, dt_secs: f64) {
        self.dot.tick(self.pointer, self.hovering, dt_secs);
        self.ring.tick(self.pointer, self.hovering, dt_secs);
    }

    /// `true` once both markers rest on their targets.
    pub fn is_settled(&self) -> bool {
        self.dot.is_settled(self.pointer, self.hovering)
            && self.ring.is_settled(self.pointer, self.hovering)
    }

    pub fn dot(&self) -> &Follower {
        &self.dot
    }

    pub fn ring(&self) -> &Follower {
        &self.ring
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/cursor.rs"]
mod tests;
