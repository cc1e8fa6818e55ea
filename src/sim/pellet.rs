//! Pellets: static food

use glam::Vec2;

use super::entity::{Appearance, Entity, EntityId, Render};
use crate::renderer::{Canvas, Shape, ShapeKind};

/// A passive resource particle
///
/// Size and value are fixed at creation; the only thing that ever happens
/// to a pellet is being placed once and removed once.
#[derive(Debug, Clone)]
pub struct Pellet {
    id: EntityId,
    pos: Vec2,
    size: f32,
    value: f32,
    appearance: Appearance,
}

impl Pellet {
    pub fn new(id: EntityId, pos: Vec2, size: f32, value: f32, appearance: Appearance) -> Self {
        Self {
            id,
            pos,
            size: size.max(0.0),
            value,
            appearance,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

impl Entity for Pellet {
    fn id(&self) -> EntityId {
        self.id
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn actual_size(&self) -> f32 {
        self.size
    }
}

impl Render for Pellet {
    fn display(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Shape {
            kind: ShapeKind::Pellet,
            id: self.id,
            center: self.pos,
            size: self.size,
            appearance: self.appearance,
        });
    }
}
