//! Game data: tuning values and eligibility policy
//!
//! Everything the simulation reads but never owns lives here. The numeric
//! part is serde-loadable so a driver can ship balance tweaks as JSON; the
//! eligibility predicates are plain function pointers an embedder can swap.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::collision::{circles_overlap, contains_point};
use crate::sim::{BlackHole, Color, Entity, Pellet, Sprite};

/// A tuning value that is either fixed or produced on demand
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Always the same value
    Fixed(f32),
    /// Uniformly drawn from `[min, max)`
    Range { min: f32, max: f32 },
    /// Produced by a generator function (not serializable)
    #[serde(skip)]
    Generated(fn(&mut Pcg32) -> f32),
}

impl Quantity {
    /// Resolve to a concrete value, drawing from `rng` when needed
    pub fn resolve(&self, rng: &mut Pcg32) -> f32 {
        match *self {
            Quantity::Fixed(v) => v,
            Quantity::Range { min, max } => {
                if max > min {
                    rng.random_range(min..max)
                } else {
                    min
                }
            }
            Quantity::Generated(generate) => generate(rng),
        }
    }
}

pub type PelletRule<C> = fn(&GameData, &C, &Pellet) -> bool;
pub type SpriteRule<C> = fn(&GameData, &C, &Sprite) -> bool;

/// The four consumption-eligibility predicates
#[derive(Debug, Clone, Copy)]
pub struct Predicates {
    /// May this sprite eat this pellet now?
    pub can_eat_pellet: PelletRule<Sprite>,
    /// May the first sprite eat the second now?
    pub can_eat_sprite: SpriteRule<Sprite>,
    /// May this black hole swallow this pellet now?
    pub can_suck_pellet: PelletRule<BlackHole>,
    /// May this black hole drain this sprite now?
    pub can_suck_sprite: SpriteRule<BlackHole>,
}

impl Default for Predicates {
    fn default() -> Self {
        Self {
            can_eat_pellet: default_can_eat_pellet,
            can_eat_sprite: default_can_eat_sprite,
            can_suck_pellet: default_can_suck_pellet,
            can_suck_sprite: default_can_suck_sprite,
        }
    }
}

/// Pellet centre inside the sprite disk
pub fn default_can_eat_pellet(_data: &GameData, sprite: &Sprite, pellet: &Pellet) -> bool {
    contains_point(sprite.pos(), sprite.actual_size() / 2.0, pellet.pos())
}

/// Predator clearly bigger, prey centre inside the predator disk
pub fn default_can_eat_sprite(data: &GameData, eater: &Sprite, prey: &Sprite) -> bool {
    eater.actual_size() > prey.actual_size() * data.eat_ratio
        && contains_point(eater.pos(), eater.actual_size() / 2.0, prey.pos())
}

/// Hole and pellet disks overlap
pub fn default_can_suck_pellet(_data: &GameData, hole: &BlackHole, pellet: &Pellet) -> bool {
    circles_overlap(hole.pos(), hole.size() / 2.0, pellet.pos(), pellet.size() / 2.0)
}

/// Hole and sprite disks overlap
pub fn default_can_suck_sprite(_data: &GameData, hole: &BlackHole, sprite: &Sprite) -> bool {
    circles_overlap(
        hole.pos(),
        hole.size() / 2.0,
        sprite.pos(),
        sprite.actual_size() / 2.0,
    )
}

/// Tuning values and policy for one game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    /// Seed for the simulation RNG
    pub seed: u64,

    // === Pellets ===
    pub pellet_size: Quantity,
    pub pellet_value: Quantity,
    /// Pellets placed by `place_pellets(None)`
    pub initial_pellets: usize,
    /// Frames between top-ups (0 = never)
    pub new_pellets_interval: u64,
    pub new_pellets_qty: usize,

    // === Sprites ===
    pub sprite_size: f32,
    pub sprite_speed: f32,
    pub speed_factor: f32,
    pub shrink_factor: f32,
    /// Frames between shrink steps (0 = never shrink)
    pub shrink_duration: u64,
    pub max_sprite_size: f32,
    pub growth_per_value: f32,
    pub sprite_value_factor: f32,
    pub eat_ratio: f32,

    // === Black holes ===
    /// Frames between spawns (0 = never)
    pub black_hole_interval: u64,
    pub black_hole_size: f32,
    pub black_hole_power: f32,
    pub black_hole_life_span: u32,
    pub black_hole_pull: f32,
    pub black_hole_color: Color,

    // === Visuals ===
    pub palette: Vec<Color>,

    /// Eligibility policy
    #[serde(skip)]
    pub predicates: Predicates,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            seed: 0x5eed,

            pellet_size: Quantity::Fixed(PELLET_SIZE),
            pellet_value: Quantity::Fixed(PELLET_VALUE),
            initial_pellets: INITIAL_PELLETS,
            new_pellets_interval: NEW_PELLETS_INTERVAL,
            new_pellets_qty: NEW_PELLETS_QTY,

            sprite_size: SPRITE_SIZE,
            sprite_speed: SPRITE_SPEED,
            speed_factor: SPEED_FACTOR,
            shrink_factor: SHRINK_FACTOR,
            shrink_duration: SHRINK_DURATION,
            max_sprite_size: MAX_SPRITE_SIZE,
            growth_per_value: GROWTH_PER_VALUE,
            sprite_value_factor: SPRITE_VALUE_FACTOR,
            eat_ratio: EAT_RATIO,

            black_hole_interval: BLACK_HOLE_INTERVAL,
            black_hole_size: BLACK_HOLE_SIZE,
            black_hole_power: BLACK_HOLE_POWER,
            black_hole_life_span: BLACK_HOLE_LIFE_SPAN,
            black_hole_pull: BLACK_HOLE_PULL,
            black_hole_color: Color::new(20, 0, 40),

            palette: vec![
                Color::new(231, 76, 60),
                Color::new(46, 204, 113),
                Color::new(52, 152, 219),
                Color::new(241, 196, 15),
                Color::new(155, 89, 182),
                Color::new(26, 188, 156),
            ],

            predicates: Predicates::default(),
        }
    }
}

impl GameData {
    /// Parse game data from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the numeric part of the game data
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Diameter gained from eating something worth `value`
    pub fn growth_for(&self, value: f32) -> f32 {
        value * self.growth_per_value
    }

    /// Value credited for eating a sprite of the given current size
    pub fn sprite_value(&self, size: f32) -> f32 {
        size * self.sprite_value_factor
    }

    /// Whether a `frame`-keyed schedule with this interval fires now
    pub fn is_due(interval: u64, frame: u64) -> bool {
        interval > 0 && frame > 0 && frame % interval == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_quantity_resolve() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(Quantity::Fixed(3.0).resolve(&mut rng), 3.0);

        for _ in 0..100 {
            let v = Quantity::Range { min: 2.0, max: 4.0 }.resolve(&mut rng);
            assert!((2.0..4.0).contains(&v));
        }
        // Degenerate range collapses to min
        assert_eq!(Quantity::Range { min: 5.0, max: 5.0 }.resolve(&mut rng), 5.0);

        fn always_nine(_: &mut Pcg32) -> f32 {
            9.0
        }
        assert_eq!(Quantity::Generated(always_nine).resolve(&mut rng), 9.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let data = GameData::from_json(
            r#"{ "initial_pellets": 7, "pellet_value": { "range": { "min": 1.0, "max": 3.0 } } }"#,
        )
        .unwrap();
        assert_eq!(data.initial_pellets, 7);
        assert!(matches!(data.pellet_value, Quantity::Range { min, max } if min == 1.0 && max == 3.0));
        assert_eq!(data.sprite_size, SPRITE_SIZE);
        assert_eq!(data.palette.len(), GameData::default().palette.len());
    }

    #[test]
    fn test_json_round_trip_keeps_tuning() {
        let mut data = GameData::default();
        data.black_hole_power = 4.0;
        let json = data.to_json().unwrap();
        let back = GameData::from_json(&json).unwrap();
        assert_eq!(back.black_hole_power, 4.0);
        assert_eq!(back.black_hole_color, data.black_hole_color);
    }

    #[test]
    fn test_schedule_due() {
        assert!(!GameData::is_due(0, 10));
        assert!(!GameData::is_due(5, 0));
        assert!(!GameData::is_due(5, 3));
        assert!(GameData::is_due(5, 10));
    }

    #[test]
    fn test_derived_values() {
        let data = GameData::default();
        assert_eq!(data.growth_for(2.0), 2.0 * GROWTH_PER_VALUE);
        assert_eq!(data.sprite_value(40.0), 40.0 * SPRITE_VALUE_FACTOR);
    }
}
