//! Pellet Arena headless driver
//!
//! Builds a game from an optional JSON tuning file, then plays it out on a
//! simulated frame clock with two keyboard-bound sprites wandering the arena.
//!
//! Usage: `pellet-arena [tuning.json] [frames]`

use glam::Vec2;

use pellet_arena::consts::{ARENA_HEIGHT, ARENA_WIDTH};
use pellet_arena::renderer::NullCanvas;
use pellet_arena::sim::{Entity, Game, Key, KeyBindings, Sprite, TickInput};
use pellet_arena::GameData;

const DEFAULT_FRAMES: u64 = 3600;

fn load_data(path: Option<&str>) -> GameData {
    let Some(path) = path else {
        return GameData::default();
    };
    match std::fs::read_to_string(path) {
        Ok(json) => match GameData::from_json(&json) {
            Ok(data) => {
                log::info!("Loaded tuning from {}", path);
                data
            }
            Err(e) => {
                log::warn!("Invalid tuning file {}: {}; using defaults", path, e);
                GameData::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read {}: {}; using defaults", path, e);
            GameData::default()
        }
    }
}

/// Scripted input: each sprite sweeps in a slowly turning pattern
fn scripted_input(frame: u64) -> TickInput {
    let mut input = TickInput::default();
    let phase = (frame / 90) % 4;
    let (arrows, wasd) = match phase {
        0 => (Key::Right, Key::S),
        1 => (Key::Down, Key::A),
        2 => (Key::Left, Key::W),
        _ => (Key::Up, Key::D),
    };
    input.press(arrows);
    input.press(wasd);
    input
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let data = load_data(args.get(1).map(String::as_str));
    let frames = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    log::info!("Pellet Arena (headless) starting, {} frames", frames);

    let mut game = Game::new(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT), data);
    let arrows = Sprite::from_data(game.data()).with_controls(KeyBindings::ARROWS);
    let wasd = Sprite::from_data(game.data()).with_controls(KeyBindings::WASD);
    game.add_player(arrows);
    game.add_player(wasd);
    game.place_players();
    game.place_pellets(None);

    if !game.start() {
        log::error!("Game did not start");
        return;
    }

    let mut canvas = NullCanvas;
    for frame in 1..=frames {
        game.update(frame);
        game.run(&scripted_input(frame), &mut canvas);
        if game.players().is_empty() {
            log::info!("All sprites gone at frame {}", frame);
            break;
        }
    }

    println!(
        "frames={} players={} pellets={} black_holes={}",
        game.frames_elapsed(),
        game.players().len(),
        game.pellets().len(),
        game.black_holes().len()
    );
    for sprite in game.players() {
        println!(
            "  sprite {:?}: size {:.1} at ({:.0}, {:.0})",
            sprite.id(),
            sprite.actual_size(),
            sprite.pos().x,
            sprite.pos().y
        );
    }
}
