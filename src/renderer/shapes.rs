//! Shapes handed from entities to the canvas

use glam::Vec2;

use super::Canvas;
use crate::sim::{Appearance, EntityId};

/// What kind of entity produced a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Pellet,
    Sprite,
    BlackHole,
}

/// A filled, stroked disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub id: EntityId,
    pub center: Vec2,
    /// Disk diameter
    pub size: f32,
    pub appearance: Appearance,
}

/// Canvas that records every draw call in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub shapes: Vec<Shape>,
}

impl DrawList {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Draw order as `(kind, id)` pairs
    pub fn order(&self) -> Vec<(ShapeKind, EntityId)> {
        self.shapes.iter().map(|s| (s.kind, s.id)).collect()
    }

    pub fn count(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind == kind).count()
    }
}

impl Canvas for DrawList {
    fn draw(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;

    #[test]
    fn test_draw_list_records_in_order() {
        let mut list = DrawList::new();
        let appearance = Appearance::solid(Color::new(1, 2, 3));
        for (i, kind) in [ShapeKind::BlackHole, ShapeKind::Sprite, ShapeKind::Pellet]
            .into_iter()
            .enumerate()
        {
            list.draw(Shape {
                kind,
                id: EntityId(i as u32),
                center: Vec2::ZERO,
                size: 1.0,
                appearance,
            });
        }
        assert_eq!(
            list.order(),
            vec![
                (ShapeKind::BlackHole, EntityId(0)),
                (ShapeKind::Sprite, EntityId(1)),
                (ShapeKind::Pellet, EntityId(2)),
            ]
        );
        assert_eq!(list.count(ShapeKind::Sprite), 1);
        list.clear();
        assert!(list.shapes.is_empty());
    }
}
