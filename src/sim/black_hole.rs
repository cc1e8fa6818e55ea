//! Black holes: transient hazards
//!
//! A hole lives for a fixed number of ticks. While alive it swallows
//! pellets outright and drains sprites a little every tick, dragging them
//! toward its centre.

use glam::Vec2;

use super::entity::{Appearance, Entity, EntityId, Render};
use super::pellet::Pellet;
use super::sprite::Sprite;
use super::staging::StagingSet;
use crate::renderer::{Canvas, Shape, ShapeKind};
use crate::settings::GameData;

#[derive(Debug, Clone)]
pub struct BlackHole {
    id: EntityId,
    pos: Vec2,
    size: f32,
    /// Size drained from a sprite per tick
    power: f32,
    /// Maximum drag toward the centre per tick
    pull: f32,
    /// Ticks left to act
    life_span: u32,
    appearance: Appearance,
}

impl BlackHole {
    pub fn new(size: f32, power: f32, life_span: u32, appearance: Appearance) -> Self {
        Self {
            id: EntityId::default(),
            pos: Vec2::ZERO,
            size: size.max(0.0),
            power,
            pull: 0.0,
            life_span,
            appearance,
        }
    }

    /// A hole with the configured size, power, pull and life span
    pub fn from_data(data: &GameData) -> Self {
        Self::new(
            data.black_hole_size,
            data.black_hole_power,
            data.black_hole_life_span,
            Appearance::solid(data.black_hole_color),
        )
        .with_pull(data.black_hole_pull)
    }

    pub fn with_pull(mut self, pull: f32) -> Self {
        self.pull = pull.max(0.0);
        self
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Put the hole on the field
    pub fn spawn(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn life_span(&self) -> u32 {
        self.life_span
    }

    /// Swallow a pellet whose eligibility was already checked
    pub fn suck_pellet(&self, pellet: &Pellet, eaten: &mut StagingSet) {
        eaten.stage(pellet.id());
        log::debug!("Black hole {:?} swallowed pellet {:?}", self.id, pellet.id());
    }

    /// Drain and drag a sprite; the caller decides whether it died
    pub fn suck_sprite(&self, sprite: &mut Sprite) {
        sprite.drain(self.power);
        sprite.drag_toward(self.pos, self.pull);
        log::debug!(
            "Black hole {:?} drained sprite {:?} -> {:.2}",
            self.id,
            sprite.id(),
            sprite.actual_size()
        );
    }

    /// Count down one tick of life
    pub(crate) fn age(&mut self) {
        self.life_span = self.life_span.saturating_sub(1);
    }

    /// Life span exhausted
    pub fn is_dead(&self) -> bool {
        self.life_span == 0
    }
}

impl Entity for BlackHole {
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

impl Render for BlackHole {
    fn display(&self, canvas: &mut dyn Canvas) {
        canvas.draw(Shape {
            kind: ShapeKind::BlackHole,
            id: self.id,
            center: self.pos,
            size: self.size,
            appearance: self.appearance,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Color;

    fn hole(power: f32, life_span: u32) -> BlackHole {
        BlackHole::new(60.0, power, life_span, Appearance::solid(Color::new(0, 0, 0)))
    }

    #[test]
    fn test_suck_sprite_drains_gradually() {
        let h = hole(10.0, 5);
        let mut sprite = Sprite::new(25.0, 3.0);
        h.suck_sprite(&mut sprite);
        assert_eq!(sprite.actual_size(), 15.0);
        assert!(!sprite.is_consumed());
        h.suck_sprite(&mut sprite);
        h.suck_sprite(&mut sprite);
        assert_eq!(sprite.actual_size(), 0.0);
        assert!(sprite.is_consumed());
    }

    #[test]
    fn test_suck_sprite_drags_toward_centre() {
        let mut h = hole(0.0, 5).with_pull(2.0);
        h.spawn(10.0, 0.0);
        let mut sprite = Sprite::new(20.0, 3.0);
        sprite.place(0.0, 0.0, 100.0, 100.0);
        h.suck_sprite(&mut sprite);
        assert_eq!(sprite.pos(), Vec2::new(2.0, 0.0));

        // Never overshoots the centre
        let mut strong = hole(0.0, 5).with_pull(50.0);
        strong.spawn(10.0, 0.0);
        strong.suck_sprite(&mut sprite);
        assert_eq!(sprite.pos(), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_lifecycle() {
        let mut h = hole(1.0, 2);
        assert!(!h.is_dead());
        h.age();
        assert!(!h.is_dead());
        h.age();
        assert!(h.is_dead());
        h.age();
        assert_eq!(h.life_span(), 0);
    }

    #[test]
    fn test_suck_pellet_stages_once() {
        let h = hole(1.0, 2);
        let pellet = Pellet::new(
            EntityId(3),
            Vec2::ZERO,
            5.0,
            1.0,
            Appearance::solid(Color::new(1, 1, 1)),
        );
        let mut eaten = StagingSet::new();
        h.suck_pellet(&pellet, &mut eaten);
        h.suck_pellet(&pellet, &mut eaten);
        assert_eq!(eaten.len(), 1);
    }
}
