//! Axis-aligned collision scan
//!
//! The source delegated collision detection to the engine's physics step
//! and smuggled the results out through global booleans. Here the core
//! runs one explicit AABB overlap pass per tick and returns typed
//! `CollisionFlags`, so the contract is testable without a renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pipes::PipePool;
use super::state::{Bird, CollisionFlags};
use crate::config::GameConfig;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Overlap test; shared edges do not count as contact
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The road strip along the bottom of the world
pub fn ground_rect() -> Aabb {
    Aabb::new(
        Vec2::new(f32::NEG_INFINITY, GROUND_Y),
        Vec2::new(f32::INFINITY, WORLD_HEIGHT),
    )
}

/// One collision pass: bird vs road, bird vs every pipe
pub fn scan(bird: &Bird, pipes: &PipePool, cfg: &GameConfig) -> CollisionFlags {
    let body = bird.aabb();

    let landed = body.overlaps(&ground_rect());
    let bumped = pipes
        .pairs
        .iter()
        .any(|p| body.overlaps(&p.top_rect()) || body.overlaps(&p.bottom_rect(cfg)));

    CollisionFlags { landed, bumped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RngState;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center_size(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        // Touching edges are not contact
        let d = Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_scan_detects_landing() {
        let cfg = GameConfig::default();
        let mut rng = RngState::new(1);
        let pipes = PipePool::new(&cfg, &mut rng);

        let mut bird = Bird::default();
        let flags = scan(&bird, &pipes, &cfg);
        assert!(!flags.landed && !flags.bumped);

        bird.pos.y = GROUND_Y; // bottom half below the road line
        let flags = scan(&bird, &pipes, &cfg);
        assert!(flags.landed);
    }

    #[test]
    fn test_scan_detects_pipe_bump() {
        let cfg = GameConfig::default();
        let mut rng = RngState::new(1);
        let mut pipes = PipePool::new(&cfg, &mut rng);

        // Drop a pair right on top of the bird, gap well below it
        let mut bird = Bird::default();
        bird.pos.y = 100.0;
        pipes.pairs[0].x = bird.pos.x;
        pipes.pairs[0].top_y = 400.0;

        let flags = scan(&bird, &pipes, &cfg);
        assert!(flags.bumped);
        assert!(!flags.landed);
    }

    #[test]
    fn test_scan_clear_through_the_gap() {
        let cfg = GameConfig::default();
        let mut rng = RngState::new(1);
        let mut pipes = PipePool::new(&cfg, &mut rng);

        // Bird centered in the opening of a pair straddling it
        let mut bird = Bird::default();
        pipes.pairs[0].x = bird.pos.x - PIPE_WIDTH / 2.0;
        pipes.pairs[0].top_y = 150.0;
        bird.pos.y = 150.0 + cfg.pipe_vertical_gap / 2.0;

        let flags = scan(&bird, &pipes, &cfg);
        assert!(!flags.bumped);
    }
}
