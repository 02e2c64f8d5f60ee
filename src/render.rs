//! Frame drawing
//!
//! Thin macroquad layer over the simulation: a letterboxed logical-resolution
//! camera, one textured quad per object, and the optional debug overlay.
//! Nothing here mutates game state.

use macroquad::prelude::{
    clear_background, draw_rectangle, draw_text, draw_texture_ex, screen_height, screen_width,
    set_camera, set_default_camera, vec2, Camera2D, Color, DrawTextureParams, Rect, BLACK, WHITE,
};

use crate::assets::Resources;
use crate::game::object::{GameObject, ObjectData, SpearState};
use crate::game::world::{World, TILE_SIZE};

const SKY: Color = Color::new(188.0 / 255.0, 245.0 / 255.0, 1.0, 1.0);
const COLLIDER_OVERLAY: Color = Color::new(1.0, 0.0, 0.0, 100.0 / 255.0);

/// Draw one frame of the world.
pub fn draw(world: &World, res: &Resources, delta_time: f32) {
    clear_background(SKY);
    set_camera(&logical_camera(world.viewport.w, world.viewport.h));

    // Background tiles scroll with the camera but never animate or flip.
    for tile in &world.background_tiles {
        draw_texture_ex(
            res.texture(tile.texture),
            tile.position.x - world.viewport.x,
            tile.position.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(TILE_SIZE, TILE_SIZE)),
                ..Default::default()
            },
        );
    }

    for layer in &world.layers {
        for obj in layer {
            draw_object(world, res, obj);
        }
    }

    for spear in &world.spears {
        if spear.spear_state() != Some(SpearState::Inactive) {
            draw_object(world, res, spear);
        }
    }

    set_default_camera();
    if world.debug_mode {
        draw_diagnostics(world, delta_time);
    }
}

fn draw_object(world: &World, res: &Resources, obj: &GameObject) {
    let frame = obj
        .current_animation
        .map(|index| obj.animations[index].current_frame())
        .unwrap_or(0);
    let source = Rect::new(frame as f32 * TILE_SIZE, 0.0, TILE_SIZE, TILE_SIZE);

    draw_texture_ex(
        res.texture(obj.texture),
        obj.position.x - world.viewport.x,
        obj.position.y - world.viewport.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(TILE_SIZE, TILE_SIZE)),
            source: Some(source),
            flip_x: obj.direction < 0.0,
            ..Default::default()
        },
    );

    if world.debug_mode {
        let collider = obj.world_collider();
        draw_rectangle(
            collider.x - world.viewport.x,
            collider.y - world.viewport.y,
            collider.w,
            collider.h,
            COLLIDER_OVERLAY,
        );
    }
}

fn draw_diagnostics(world: &World, delta_time: f32) {
    let player = world.player();
    let state = match &player.data {
        ObjectData::Player(data) => format!("{:?}", data.state),
        _ => String::new(),
    };
    draw_text(
        &format!(
            "state: {}  velocity y: {:.1}  dt: {:.4}",
            state, player.velocity.y, delta_time
        ),
        5.0,
        16.0,
        20.0,
        BLACK,
    );
}

/// Camera mapping the logical world rectangle onto a letterboxed viewport.
fn logical_camera(logical_w: f32, logical_h: f32) -> Camera2D {
    Camera2D {
        // Negative y zoom keeps world y growing downward, screen-style.
        zoom: vec2(2.0 / logical_w, -2.0 / logical_h),
        target: vec2(logical_w / 2.0, logical_h / 2.0),
        viewport: Some(letterbox(logical_w / logical_h)),
        ..Default::default()
    }
}

/// Largest centered viewport with the logical aspect ratio, in pixels.
fn letterbox(aspect: f32) -> (i32, i32, i32, i32) {
    let screen_w = screen_width();
    let screen_h = screen_height();
    let (w, h) = if screen_w / screen_h > aspect {
        (screen_h * aspect, screen_h)
    } else {
        (screen_w, screen_w / aspect)
    };
    (
        ((screen_w - w) / 2.0) as i32,
        ((screen_h - h) / 2.0) as i32,
        w as i32,
        h as i32,
    )
}
