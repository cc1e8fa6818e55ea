//! Render collaborator
//!
//! The simulation never draws by itself. Every entity hands its shape to a
//! `Canvas` from its `display()` hook; a frontend implements `Canvas` on top
//! of whatever graphics stack it uses.

pub mod shapes;

pub use shapes::{DrawList, Shape, ShapeKind};

/// A drawing surface the simulation renders into
pub trait Canvas {
    /// Draw one entity shape
    fn draw(&mut self, shape: Shape);
}

/// Canvas that discards everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn draw(&mut self, _shape: Shape) {}
}
