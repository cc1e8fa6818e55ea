//! Shared entity identity and capabilities
//!
//! Anything placed on the field has an id, a position and a current size.
//! Drawing and input handling are explicit capabilities rather than
//! assumed methods.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::TickInput;
use crate::renderer::Canvas;

/// Unique identifier for an entity, allocated by the `Game`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EntityId(pub u32);

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Visual identity: fill and stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub fill: Color,
    pub stroke: Color,
}

impl Appearance {
    /// Same color for fill and stroke
    pub const fn solid(color: Color) -> Self {
        Self {
            fill: color,
            stroke: color,
        }
    }
}

/// Common view of every placed entity
pub trait Entity {
    fn id(&self) -> EntityId;
    fn pos(&self) -> Vec2;
    /// Current size; 0 means consumed
    fn actual_size(&self) -> f32;

    fn is_consumed(&self) -> bool {
        self.actual_size() <= 0.0
    }
}

/// Entities that can draw themselves
pub trait Render {
    fn display(&self, canvas: &mut dyn Canvas);
}

/// Entities steered by external input
pub trait Control {
    /// Apply this frame's input; `bounds` is the arena size
    fn control(&mut self, input: &TickInput, bounds: Vec2);
}
