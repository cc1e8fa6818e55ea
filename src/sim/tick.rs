//! Per-tick simulation pipeline
//!
//! One call to `run` advances the game by exactly one tick. Scans never
//! change collection membership: consumed entities are staged by id and
//! flushed between scans, in a fixed order:
//!
//! 0. stage sprites that are already used up
//! 1. spawn black holes on schedule
//! 2. black holes act on pellets and sprites (and render)
//! 3. flush dead black holes
//! 4. flush swallowed pellets
//! 5. player input and shrinking
//! 6. sprites eat pellets
//! 7. flush eaten pellets
//! 8. sprites eat sprites
//! 9. flush eaten sprites
//! 10. render sprites, then pellets
//! 11. replenish pellets on schedule

use super::entity::{Control, Entity, Render};
use super::state::{Game, RunState};
use crate::renderer::Canvas;
use crate::settings::GameData;

/// Keyboard keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
}

/// Input state for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys held down this frame
    pub pressed: Vec<Key>,
}

impl TickInput {
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            pressed: keys.to_vec(),
        }
    }

    pub fn press(&mut self, key: Key) {
        if !self.is_down(key) {
            self.pressed.push(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.retain(|k| *k != key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Advance the game by one tick; no-op unless running
pub fn run(game: &mut Game, input: &TickInput, canvas: &mut dyn Canvas) {
    if game.run_state != RunState::Running {
        return;
    }
    debug_assert!(game.staging_is_empty(), "staging sets must start empty");
    let frame = game.frames_elapsed;

    stage_consumed_players(game);

    if GameData::is_due(game.data.black_hole_interval, frame) {
        game.spawn_black_hole();
    }

    black_holes_act(game, canvas);
    let holes_gone = game.dead_black_holes.flush(&mut game.black_holes, "black hole");
    let swallowed = game.eaten_pellets.flush(&mut game.pellets, "pellet");

    control_players(game, input, frame);

    sprites_eat_pellets(game);
    let eaten = game.eaten_pellets.flush(&mut game.pellets, "pellet");

    sprites_eat_sprites(game);
    let sprites_gone = game.eaten_sprites.flush(&mut game.players, "sprite");

    for sprite in &game.players {
        sprite.display(canvas);
    }
    for pellet in &game.pellets {
        pellet.display(canvas);
    }

    if GameData::is_due(game.data.new_pellets_interval, frame) {
        let qty = game.data.new_pellets_qty;
        game.place_pellets(Some(qty));
    }

    if holes_gone + swallowed + eaten + sprites_gone > 0 {
        log::debug!(
            "Frame {}: {} holes expired, {} pellets swallowed, {} pellets eaten, {} sprites gone",
            frame,
            holes_gone,
            swallowed,
            eaten,
            sprites_gone
        );
    }
}

/// Sprites with nothing left are dead even if no hole drained them this
/// tick; they sit out every scan and go in step 9
fn stage_consumed_players(game: &mut Game) {
    for sprite in &game.players {
        if sprite.is_consumed() {
            game.eaten_sprites.stage(sprite.id());
            log::debug!("Sprite {:?} has nothing left", sprite.id());
        }
    }
}

/// Step 2: every live hole renders, swallows pellets, drains sprites, ages
fn black_holes_act(game: &mut Game, canvas: &mut dyn Canvas) {
    let Game {
        data,
        players,
        pellets,
        black_holes,
        eaten_pellets,
        eaten_sprites,
        dead_black_holes,
        ..
    } = game;
    let rules = data.predicates;

    for hole in black_holes.iter_mut() {
        // Spent before it ever acted
        if hole.is_dead() {
            dead_black_holes.stage(hole.id());
            continue;
        }
        hole.display(canvas);

        for pellet in pellets.iter() {
            if !eaten_pellets.contains(pellet.id()) && (rules.can_suck_pellet)(data, hole, pellet) {
                hole.suck_pellet(pellet, eaten_pellets);
            }
        }

        for sprite in players.iter_mut() {
            if eaten_sprites.contains(sprite.id()) || !(rules.can_suck_sprite)(data, hole, sprite) {
                continue;
            }
            hole.suck_sprite(sprite);
            if sprite.is_consumed() {
                eaten_sprites.stage(sprite.id());
                log::info!("Sprite {:?} fell into black hole {:?}", sprite.id(), hole.id());
            }
        }

        hole.age();
        if hole.is_dead() {
            dead_black_holes.stage(hole.id());
            log::info!("Black hole {:?} collapsed", hole.id());
        }
    }
}

/// Step 5: input, then the shrink schedule, for every sprite still alive
fn control_players(game: &mut Game, input: &TickInput, frame: u64) {
    let bounds = game.bounds;
    for sprite in game.players.iter_mut() {
        if game.eaten_sprites.contains(sprite.id()) {
            continue;
        }
        sprite.control(input, bounds);
        sprite.shrink(frame);
    }
}

/// Step 6: first eligible sprite takes each pellet
fn sprites_eat_pellets(game: &mut Game) {
    let Game {
        data,
        players,
        pellets,
        eaten_pellets,
        eaten_sprites,
        ..
    } = game;
    let rules = data.predicates;

    for sprite in players.iter_mut() {
        if eaten_sprites.contains(sprite.id()) {
            continue;
        }
        for pellet in pellets.iter() {
            if !eaten_pellets.contains(pellet.id()) && (rules.can_eat_pellet)(data, sprite, pellet) {
                sprite.eat_pellet(pellet, data, eaten_pellets);
            }
        }
    }
}

/// Step 8: every unordered pair once; at most one side eats the other
fn sprites_eat_sprites(game: &mut Game) {
    let Game {
        data,
        players,
        eaten_sprites,
        ..
    } = game;
    let rules = data.predicates;

    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            let (head, tail) = players.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if eaten_sprites.contains(a.id()) || eaten_sprites.contains(b.id()) {
                continue;
            }

            if (rules.can_eat_sprite)(data, a, b) {
                b.set_value(data.sprite_value(b.actual_size()));
                a.eat_other_sprite(b, eaten_sprites);
            } else if (rules.can_eat_sprite)(data, b, a) {
                a.set_value(data.sprite_value(a.actual_size()));
                b.eat_other_sprite(a, eaten_sprites);
            }
        }
    }
}
