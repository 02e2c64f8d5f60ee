//! ABYSS-DIVE: a 2D spear-fishing platformer
//!
//! A diver runs and jumps across a flooded scene and throws spears at
//! whatever gets in the way. The interesting part is the frame-stepped
//! simulation core under `game/`: tagged-variant objects, tile collision
//! with axis push-out, and a grow-only spear pool. Everything touching the
//! window, textures or input devices is thin macroquad glue.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod animation;
mod assets;
mod game;
mod input;
mod render;
mod timer;

use macroquad::prelude::*;

use assets::Resources;
use game::world::{World, BACKGROUND_TILES, FOREGROUND_TILES};
use input::InputSnapshot;

/// Logical presentation size; the world is authored in these coordinates.
const LOGICAL_WIDTH: f32 = 640.0;
const LOGICAL_HEIGHT: f32 = 320.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("ABYSS-DIVE v{}", VERSION),
        window_width: 1600,
        window_height: 900,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    rand::srand(miniquad::date::now() as u64);

    let mut res = Resources::new();
    res.load().await;

    let mut world = match World::build(
        &FOREGROUND_TILES,
        &BACKGROUND_TILES,
        LOGICAL_WIDTH,
        LOGICAL_HEIGHT,
        &res,
    ) {
        Ok(world) => world,
        Err(err) => {
            error!("level construction failed: {}", err);
            return;
        }
    };
    info!("world ready: {} level tiles, {} background tiles",
        world.layers[game::world::LAYER_LEVEL].len(),
        world.background_tiles.len());

    let mut fullscreen = false;
    let mut prev_time = get_time();

    loop {
        // Wall-clock delta; a zero delta means this tick carries no time and
        // the whole frame is skipped.
        let now = get_time();
        let delta_time = (now - prev_time) as f32;
        if delta_time == 0.0 {
            next_frame().await;
            continue;
        }
        prev_time = now;

        if is_key_released(KeyCode::F1) {
            world.debug_mode = !world.debug_mode;
        }
        if is_key_released(KeyCode::F11) {
            fullscreen = !fullscreen;
            set_fullscreen(fullscreen);
        }

        let snapshot = InputSnapshot::poll();
        game::step::advance(&mut world, &res, &snapshot, delta_time);
        world.follow_player();
        render::draw(&world, &res, delta_time);

        next_frame().await;
    }
}
