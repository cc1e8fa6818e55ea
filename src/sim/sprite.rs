//! Sprites: the mobile actors that eat and get eaten

use glam::Vec2;

use super::entity::{Appearance, Control, Entity, EntityId, Render};
use super::pellet::Pellet;
use super::staging::StagingSet;
use super::tick::{Key, TickInput};
use crate::clamp_to_bounds;
use crate::consts::{MAX_SPRITE_SIZE, SHRINK_DURATION, SHRINK_FACTOR, SPEED_FACTOR};
use crate::renderer::{Canvas, Shape, ShapeKind};
use crate::settings::GameData;

/// Keys steering one sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
}

impl KeyBindings {
    pub const ARROWS: Self = Self {
        up: Key::Up,
        down: Key::Down,
        left: Key::Left,
        right: Key::Right,
    };

    pub const WASD: Self = Self {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
    };

    /// Unit (or zero) direction for the currently held keys
    pub fn direction(&self, input: &TickInput) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if input.is_down(self.up) {
            dir.y -= 1.0;
        }
        if input.is_down(self.down) {
            dir.y += 1.0;
        }
        if input.is_down(self.left) {
            dir.x -= 1.0;
        }
        if input.is_down(self.right) {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// A mobile actor
#[derive(Debug, Clone)]
pub struct Sprite {
    id: EntityId,
    pos: Vec2,
    /// Nominal diameter
    size: f32,
    /// Current diameter
    actual_size: f32,
    max_size: f32,
    speed: f32,
    speed_factor: f32,
    shrink_factor: f32,
    shrink_duration: u64,
    /// Credit for whoever eats this sprite, set when it becomes prey
    value: f32,
    appearance: Option<Appearance>,
    controls: Option<KeyBindings>,
}

impl Sprite {
    /// Create a sprite with explicit size and speed and default dynamics
    pub fn new(size: f32, speed: f32) -> Self {
        Self {
            id: EntityId::default(),
            pos: Vec2::ZERO,
            size: size.max(0.0),
            actual_size: size.max(0.0),
            max_size: MAX_SPRITE_SIZE,
            speed,
            speed_factor: SPEED_FACTOR,
            shrink_factor: SHRINK_FACTOR,
            shrink_duration: SHRINK_DURATION,
            value: 0.0,
            appearance: None,
            controls: None,
        }
    }

    /// Create a sprite using the configured sprite tuning
    pub fn from_data(data: &GameData) -> Self {
        Self {
            max_size: data.max_sprite_size,
            speed_factor: data.speed_factor,
            shrink_factor: data.shrink_factor,
            shrink_duration: data.shrink_duration,
            ..Self::new(data.sprite_size, data.sprite_speed)
        }
    }

    pub fn with_controls(mut self, controls: KeyBindings) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Start from a different current size (e.g. a pre-grown sprite)
    pub fn with_actual_size(mut self, actual_size: f32) -> Self {
        self.actual_size = actual_size.max(0.0);
        self
    }

    pub(crate) fn assign_id(&mut self, id: EntityId) {
        self.id = id;
    }

    /// Assign colors unless the sprite already has some
    pub(crate) fn ensure_appearance(&mut self, pick: impl FnOnce() -> Appearance) {
        if self.appearance.is_none() {
            self.appearance = Some(pick());
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn appearance(&self) -> Option<Appearance> {
        self.appearance
    }

    pub fn controls(&self) -> Option<KeyBindings> {
        self.controls
    }

    /// Place the sprite, clamped into the arena
    pub fn place(&mut self, x: f32, y: f32, bounds_width: f32, bounds_height: f32) {
        self.pos = clamp_to_bounds(Vec2::new(x, y), Vec2::new(bounds_width, bounds_height));
    }

    /// Movement per frame; bigger sprites are slower, never faster than `speed`
    pub fn effective_speed(&self) -> f32 {
        if self.actual_size <= 0.0 || self.size <= 0.0 {
            return 0.0;
        }
        let ratio = (self.size / self.actual_size).powf(self.speed_factor);
        self.speed * ratio.min(1.0)
    }

    /// Fix the credit for eating this sprite at its current size
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    fn grow(&mut self, amount: f32) {
        let cap = self.max_size.max(self.actual_size);
        self.actual_size = (self.actual_size + amount).min(cap);
    }

    /// Grow from `pellet` and stage it for removal
    pub fn eat_pellet(&mut self, pellet: &Pellet, data: &GameData, eaten: &mut StagingSet) {
        self.grow(data.growth_for(pellet.value()));
        eaten.stage(pellet.id());
        log::debug!("Sprite {:?} ate pellet {:?} -> {:.2}", self.id, pellet.id(), self.actual_size);
    }

    /// Grow by `other`'s value and stage it for removal
    ///
    /// `other.value()` must already reflect its size at this moment.
    pub fn eat_other_sprite(&mut self, other: &Sprite, eaten: &mut StagingSet) {
        self.grow(other.value);
        eaten.stage(other.id);
        log::debug!(
            "Sprite {:?} ate sprite {:?} (value {:.2}) -> {:.2}",
            self.id,
            other.id,
            other.value,
            self.actual_size
        );
    }

    /// Drift back toward nominal size on the shrink schedule
    pub fn shrink(&mut self, frame: u64) {
        if !GameData::is_due(self.shrink_duration, frame) || self.actual_size <= self.size {
            return;
        }
        let factor = self.shrink_factor.clamp(0.0, 1.0);
        self.actual_size = (self.actual_size * factor).max(self.size);
    }

    /// Lose `amount` of size, never going below zero
    pub(crate) fn drain(&mut self, amount: f32) {
        self.actual_size = (self.actual_size - amount.max(0.0)).max(0.0);
    }

    /// Move toward `target` by at most `max_step`
    pub(crate) fn drag_toward(&mut self, target: Vec2, max_step: f32) {
        let offset = target - self.pos;
        let dist = offset.length();
        if dist > 0.0 && max_step > 0.0 {
            self.pos += offset / dist * dist.min(max_step);
        }
    }
}

impl Entity for Sprite {
    fn id(&self) -> EntityId {
        self.id
    }

    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn actual_size(&self) -> f32 {
        self.actual_size
    }
}

impl Control for Sprite {
    fn control(&mut self, input: &TickInput, bounds: Vec2) {
        let Some(controls) = self.controls else {
            return;
        };
        let dir = controls.direction(input);
        if dir != Vec2::ZERO {
            self.pos = clamp_to_bounds(self.pos + dir * self.effective_speed(), bounds);
        }
    }
}

impl Render for Sprite {
    fn display(&self, canvas: &mut dyn Canvas) {
        if let Some(appearance) = self.appearance {
            canvas.draw(Shape {
                kind: ShapeKind::Sprite,
                id: self.id,
                center: self.pos,
                size: self.actual_size,
                appearance,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Color;

    fn pellet(id: u32, value: f32) -> Pellet {
        Pellet::new(
            EntityId(id),
            Vec2::ZERO,
            5.0,
            value,
            Appearance::solid(Color::new(0, 0, 0)),
        )
    }

    #[test]
    fn test_place_clamps() {
        let mut sprite = Sprite::new(20.0, 3.0);
        sprite.place(-10.0, 900.0, 800.0, 600.0);
        assert_eq!(sprite.pos().x, 0.0);
        assert!(sprite.pos().y < 600.0);
    }

    #[test]
    fn test_eat_pellet_grows_and_stages() {
        let data = GameData::default();
        let mut sprite = Sprite::new(20.0, 3.0);
        let mut eaten = StagingSet::new();
        sprite.eat_pellet(&pellet(9, 2.0), &data, &mut eaten);
        assert_eq!(sprite.actual_size(), 20.0 + data.growth_for(2.0));
        assert!(eaten.contains(EntityId(9)));
    }

    #[test]
    fn test_growth_capped() {
        let mut data = GameData::default();
        data.max_sprite_size = 21.0;
        let mut sprite = Sprite::from_data(&data);
        let mut eaten = StagingSet::new();
        sprite.eat_pellet(&pellet(1, 100.0), &data, &mut eaten);
        assert_eq!(sprite.actual_size(), 21.0);
    }

    #[test]
    fn test_eat_other_sprite_uses_value() {
        let mut big = Sprite::new(40.0, 3.0);
        let mut small = Sprite::new(10.0, 3.0);
        small.assign_id(EntityId(4));
        small.set_value(7.0);
        let mut eaten = StagingSet::new();
        big.eat_other_sprite(&small, &mut eaten);
        assert_eq!(big.actual_size(), 47.0);
        assert!(eaten.contains(EntityId(4)));
    }

    #[test]
    fn test_shrink_toward_nominal() {
        let mut sprite = Sprite::new(20.0, 3.0).with_actual_size(40.0);
        let duration = GameData::default().shrink_duration;

        // Off-schedule frames leave the size alone
        sprite.shrink(duration + 1);
        assert_eq!(sprite.actual_size(), 40.0);

        let mut last = sprite.actual_size();
        for k in 1..2000 {
            sprite.shrink(duration * k);
            assert!(sprite.actual_size() <= last);
            assert!(sprite.actual_size() >= 20.0);
            last = sprite.actual_size();
        }
        // Gradual, not instantaneous
        let mut fresh = Sprite::new(20.0, 3.0).with_actual_size(40.0);
        fresh.shrink(duration);
        assert!(fresh.actual_size() > 20.0);
    }

    #[test]
    fn test_drain_never_negative() {
        let mut sprite = Sprite::new(20.0, 3.0);
        sprite.drain(5.0);
        assert_eq!(sprite.actual_size(), 15.0);
        sprite.drain(100.0);
        assert_eq!(sprite.actual_size(), 0.0);
        assert!(sprite.is_consumed());
        assert_eq!(sprite.effective_speed(), 0.0);
    }

    #[test]
    fn test_control_moves_and_clamps() {
        let bounds = Vec2::new(100.0, 100.0);
        let mut sprite = Sprite::new(20.0, 3.0).with_controls(KeyBindings::ARROWS);
        sprite.place(50.0, 50.0, 100.0, 100.0);

        let input = TickInput::with_keys(&[Key::Right]);
        sprite.control(&input, bounds);
        assert_eq!(sprite.pos(), Vec2::new(53.0, 50.0));

        // WASD keys don't steer an arrow-bound sprite
        sprite.control(&TickInput::with_keys(&[Key::A]), bounds);
        assert_eq!(sprite.pos(), Vec2::new(53.0, 50.0));

        for _ in 0..100 {
            sprite.control(&TickInput::with_keys(&[Key::Up]), bounds);
        }
        assert_eq!(sprite.pos().y, 0.0);
    }

    #[test]
    fn test_bigger_is_slower() {
        let small = Sprite::new(20.0, 3.0);
        let big = Sprite::new(20.0, 3.0).with_actual_size(80.0);
        assert_eq!(small.effective_speed(), 3.0);
        assert!(big.effective_speed() < small.effective_speed());

        let drained = Sprite::new(20.0, 3.0).with_actual_size(5.0);
        assert_eq!(drained.effective_speed(), 3.0);
    }

    #[test]
    fn test_uncontrolled_sprite_stays() {
        let mut sprite = Sprite::new(20.0, 3.0);
        sprite.place(10.0, 10.0, 100.0, 100.0);
        sprite.control(&TickInput::with_keys(&[Key::Right]), Vec2::splat(100.0));
        assert_eq!(sprite.pos(), Vec2::new(10.0, 10.0));
    }
}
