//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit frame counter, no global clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order, removals by id)
//! - No rendering or platform dependencies beyond the `Canvas` hook

pub mod black_hole;
pub mod collision;
pub mod entity;
pub mod pellet;
pub mod sprite;
pub mod staging;
pub mod state;
pub mod tick;

pub use black_hole::BlackHole;
pub use entity::{Appearance, Color, Control, Entity, EntityId, Render};
pub use pellet::Pellet;
pub use sprite::{KeyBindings, Sprite};
pub use staging::StagingSet;
pub use state::{Game, RunState};
pub use tick::{Key, TickInput, run};
