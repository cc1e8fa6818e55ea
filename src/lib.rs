//! Pellet Arena - an eat-or-be-eaten arena simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, eligibility, per-tick pipeline)
//! - `renderer`: Render collaborator (`Canvas` capability, draw recording)
//! - `settings`: Data-driven tuning and eligibility policy (`GameData`)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{GameData, Predicates, Quantity};
pub use sim::{Game, RunState, TickInput};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Pellet defaults
    pub const PELLET_SIZE: f32 = 5.0;
    pub const PELLET_VALUE: f32 = 1.0;
    pub const INITIAL_PELLETS: usize = 120;
    /// Frames between pellet top-ups
    pub const NEW_PELLETS_INTERVAL: u64 = 120;
    pub const NEW_PELLETS_QTY: usize = 20;

    /// Sprite defaults (sizes are diameters)
    pub const SPRITE_SIZE: f32 = 20.0;
    pub const SPRITE_SPEED: f32 = 3.0;
    /// Exponent of the size/speed falloff
    pub const SPEED_FACTOR: f32 = 0.5;
    /// Multiplier applied to an oversized sprite every shrink period
    pub const SHRINK_FACTOR: f32 = 0.99;
    pub const SHRINK_DURATION: u64 = 30;
    pub const MAX_SPRITE_SIZE: f32 = 300.0;
    /// Diameter gained per unit of eaten value
    pub const GROWTH_PER_VALUE: f32 = 0.5;
    /// Value of an eaten sprite per unit of its diameter
    pub const SPRITE_VALUE_FACTOR: f32 = 0.5;
    /// A sprite must be this much bigger than its prey
    pub const EAT_RATIO: f32 = 1.1;

    /// Black hole defaults
    pub const BLACK_HOLE_INTERVAL: u64 = 600;
    pub const BLACK_HOLE_SIZE: f32 = 60.0;
    pub const BLACK_HOLE_POWER: f32 = 0.5;
    pub const BLACK_HOLE_LIFE_SPAN: u32 = 300;
    /// Maximum drag toward the hole centre per tick (pixels)
    pub const BLACK_HOLE_PULL: f32 = 1.5;
}

/// Clamp a position into `[0, width) x [0, height)`
#[inline]
pub fn clamp_to_bounds(pos: Vec2, bounds: Vec2) -> Vec2 {
    let max = (bounds * (1.0 - f32::EPSILON)).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_bounds_half_open() {
        let bounds = Vec2::new(800.0, 600.0);
        let clamped = clamp_to_bounds(Vec2::new(900.0, -5.0), bounds);
        assert!(clamped.x < 800.0);
        assert!(clamped.x > 799.9);
        assert_eq!(clamped.y, 0.0);

        let inside = Vec2::new(10.0, 20.0);
        assert_eq!(clamp_to_bounds(inside, bounds), inside);
    }

    #[test]
    fn test_clamp_to_degenerate_bounds() {
        let clamped = clamp_to_bounds(Vec2::new(3.0, 4.0), Vec2::ZERO);
        assert_eq!(clamped, Vec2::ZERO);
    }
}
