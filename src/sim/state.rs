//! Game state and lifecycle
//!
//! `Game` owns every live entity plus the staging sets the tick pipeline
//! uses to defer removals. Setup mutators and the start/pause/resume state
//! machine live here; the per-tick pipeline lives in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::black_hole::BlackHole;
use super::entity::{Appearance, Color, Entity, EntityId};
use super::pellet::Pellet;
use super::sprite::Sprite;
use super::staging::StagingSet;
use super::tick::{self, TickInput};
use crate::renderer::Canvas;
use crate::settings::GameData;

/// Run state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Setup phase, `start()` not yet accepted
    NotStarted,
    /// Ticks advance the simulation
    Running,
    /// Ticks are no-ops until `resume()`
    Paused,
}

/// The authoritative simulation state
#[derive(Debug, Clone)]
pub struct Game {
    /// Arena width/height
    pub(super) bounds: Vec2,
    pub(super) data: GameData,
    pub(super) rng: Pcg32,
    /// Live entities, in insertion order
    pub(super) players: Vec<Sprite>,
    pub(super) pellets: Vec<Pellet>,
    pub(super) black_holes: Vec<BlackHole>,
    /// Removals collected during a scan; empty between ticks
    pub(super) eaten_pellets: StagingSet,
    pub(super) eaten_sprites: StagingSet,
    pub(super) dead_black_holes: StagingSet,
    /// Last frame number reported by the driver
    pub(super) frames_elapsed: u64,
    pub(super) run_state: RunState,
    next_id: u32,
}

impl Game {
    /// Create an empty game on an arena of `env` (width, height)
    pub fn new(env: Vec2, data: GameData) -> Self {
        let rng = Pcg32::seed_from_u64(data.seed);
        Self {
            bounds: env.max(Vec2::ZERO),
            data,
            rng,
            players: Vec::new(),
            pellets: Vec::new(),
            black_holes: Vec::new(),
            eaten_pellets: StagingSet::new(),
            eaten_sprites: StagingSet::new(),
            dead_black_holes: StagingSet::new(),
            frames_elapsed: 0,
            run_state: RunState::NotStarted,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        EntityId(id)
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// Tuning can be adjusted between ticks
    pub fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }

    pub fn players(&self) -> &[Sprite] {
        &self.players
    }

    pub fn pellets(&self) -> &[Pellet] {
        &self.pellets
    }

    pub fn black_holes(&self) -> &[BlackHole] {
        &self.black_holes
    }

    pub fn frames_elapsed(&self) -> u64 {
        self.frames_elapsed
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// True when no removal is pending (always the case between ticks)
    pub fn staging_is_empty(&self) -> bool {
        self.eaten_pellets.is_empty()
            && self.eaten_sprites.is_empty()
            && self.dead_black_holes.is_empty()
    }

    fn random_position(&mut self) -> Vec2 {
        let x = if self.bounds.x > 0.0 {
            self.rng.random_range(0.0..self.bounds.x)
        } else {
            0.0
        };
        let y = if self.bounds.y > 0.0 {
            self.rng.random_range(0.0..self.bounds.y)
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    fn random_color(&mut self) -> Color {
        if self.data.palette.is_empty() {
            return Color::new(255, 255, 255);
        }
        let idx = self.rng.random_range(0..self.data.palette.len());
        self.data.palette[idx]
    }

    fn random_appearance(&mut self) -> Appearance {
        let fill = self.random_color();
        let stroke = self.random_color();
        Appearance { fill, stroke }
    }

    // === Setup ===

    /// Add a sprite; it gets an id, and colors if it has none yet
    pub fn add_player(&mut self, mut sprite: Sprite) -> EntityId {
        let id = self.next_entity_id();
        sprite.assign_id(id);
        sprite.ensure_appearance(|| self.random_appearance());
        self.players.push(sprite);
        log::debug!("Added player {:?}", id);
        id
    }

    /// Scatter every player at a random position
    pub fn place_players(&mut self) {
        let mut players = std::mem::take(&mut self.players);
        for sprite in &mut players {
            let pos = self.random_position();
            sprite.place(pos.x, pos.y, self.bounds.x, self.bounds.y);
        }
        self.players = players;
    }

    /// Place `qty` pellets (default: the configured initial amount) at
    /// random positions; returns how many were placed
    pub fn place_pellets(&mut self, qty: Option<usize>) -> usize {
        let qty = qty.unwrap_or(self.data.initial_pellets);
        for _ in 0..qty {
            let pos = self.random_position();
            let size = self.data.pellet_size.resolve(&mut self.rng);
            let value = self.data.pellet_value.resolve(&mut self.rng);
            self.add_pellet(pos, size, value);
        }
        qty
    }

    /// Add one pellet at an explicit position (clamped into the arena)
    pub fn add_pellet(&mut self, pos: Vec2, size: f32, value: f32) -> EntityId {
        let id = self.next_entity_id();
        let appearance = Appearance::solid(self.random_color());
        let pos = crate::clamp_to_bounds(pos, self.bounds);
        self.pellets.push(Pellet::new(id, pos, size, value, appearance));
        id
    }

    /// Add an already spawned black hole
    pub fn add_black_hole(&mut self, mut hole: BlackHole) -> EntityId {
        let id = self.next_entity_id();
        hole.assign_id(id);
        let pos = crate::clamp_to_bounds(hole.pos(), self.bounds);
        hole.spawn(pos.x, pos.y);
        log::info!(
            "Black hole {:?} spawned at ({:.0}, {:.0}), life {}",
            id,
            hole.pos().x,
            hole.pos().y,
            hole.life_span()
        );
        self.black_holes.push(hole);
        id
    }

    /// Spawn a configured black hole at a random position
    pub fn spawn_black_hole(&mut self) -> EntityId {
        let pos = self.random_position();
        let mut hole = BlackHole::from_data(&self.data);
        hole.spawn(pos.x, pos.y);
        self.add_black_hole(hole)
    }

    // === Lifecycle ===

    /// Begin the game; needs at least one player and one pellet
    ///
    /// Returns whether the game is running after the call. Unmet
    /// preconditions only warn; add entities and call again.
    pub fn start(&mut self) -> bool {
        match self.run_state {
            RunState::Running => true,
            RunState::Paused => false,
            RunState::NotStarted => {
                if self.players.is_empty() || self.pellets.is_empty() {
                    log::warn!(
                        "Cannot start: need at least one player and one pellet ({} players, {} pellets)",
                        self.players.len(),
                        self.pellets.len()
                    );
                    return false;
                }
                self.run_state = RunState::Running;
                log::info!(
                    "Game started: {} players, {} pellets",
                    self.players.len(),
                    self.pellets.len()
                );
                true
            }
        }
    }

    /// Stop ticking; no effect unless running
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
            log::info!("Game paused at frame {}", self.frames_elapsed);
        }
    }

    /// Resume after `pause()`; no effect unless paused
    pub fn resume(&mut self) {
        if self.run_state == RunState::Paused {
            self.run_state = RunState::Running;
            log::info!("Game resumed at frame {}", self.frames_elapsed);
        }
    }

    /// Sync the frame counter with the driver's
    pub fn update(&mut self, frame_count: u64) {
        if frame_count < self.frames_elapsed {
            log::warn!(
                "Ignoring frame counter going backwards ({} -> {})",
                self.frames_elapsed,
                frame_count
            );
            return;
        }
        self.frames_elapsed = frame_count;
    }

    /// Advance exactly one tick (no-op unless running)
    pub fn run(&mut self, input: &TickInput, canvas: &mut dyn Canvas) {
        tick::run(self, input, canvas);
    }
}
