//! Per-frame simulation step
//!
//! One object at a time, in a fixed phase order: gravity, input intent,
//! state dispatch (including shooting), facing, integration, then collision
//! and ground sensing. Objects are addressed through the world by id so the
//! pairwise collision pass and the deferred spear spawn never fight over
//! borrows.

use macroquad::math::{vec2, Rect, Vec2};
use macroquad::rand::gen_range;

use crate::assets::Resources;
use crate::input::InputSnapshot;

use super::collision;
use super::object::{GameObject, ObjectData, ObjectKind, PlayerState, SpearData, SpearState};
use super::world::{ObjectId, World};

/// Downward acceleration on airborne dynamic objects, px/s^2.
pub const GRAVITY: Vec2 = Vec2::new(0.0, 500.0);
/// Vertical kick applied when the jump key fires.
pub const JUMP_FORCE: f32 = -200.0;

const SPEAR_SPEED: f32 = 200.0;
const SPEAR_MAX_SPEED_X: f32 = 1000.0;
const SPEAR_JITTER_Y: f32 = 7.5;
const SPEAR_MUZZLE_OFFSET: f32 = 10.0;

/// Advance the whole world by one frame.
///
/// A zero (or negative) delta is a skipped frame by contract: nothing moves,
/// no timer steps, no state changes. The layers are stepped before the spear
/// pool, so a spear fired this frame still receives its first step.
pub fn advance(world: &mut World, res: &Resources, input: &InputSnapshot, delta_time: f32) {
    if delta_time <= 0.0 {
        return;
    }

    if input.jump_pressed {
        jump(world.player_mut());
    }

    for layer in 0..world.layers.len() {
        let count = world.layers[layer].len();
        for index in 0..count {
            let id = ObjectId::Layer { layer, index };
            update_object(world, res, input, id, delta_time);
            step_animation(world.object_mut(id), delta_time);
        }
    }

    let mut index = 0;
    while index < world.spears.len() {
        let id = ObjectId::Spear { index };
        update_object(world, res, input, id, delta_time);
        step_animation(world.object_mut(id), delta_time);
        index += 1;
    }
}

/// One-shot jump trigger. Only a grounded-state player can start a jump;
/// the jumping state itself exits via the landing transition.
fn jump(player: &mut GameObject) {
    let ObjectData::Player(data) = &mut player.data else {
        return;
    };
    if matches!(data.state, PlayerState::Idle | PlayerState::Running) {
        data.state = PlayerState::Jumping;
        player.velocity.y += JUMP_FORCE;
    }
}

fn update_object(
    world: &mut World,
    res: &Resources,
    input: &InputSnapshot,
    id: ObjectId,
    delta_time: f32,
) {
    let viewport = world.viewport;
    let mut fired = None;
    {
        let obj = world.object_mut(id);

        if obj.dynamic && !obj.grounded {
            obj.velocity += GRAVITY * delta_time;
        }

        let intent = match obj.kind() {
            ObjectKind::Player => input.horizontal_intent(),
            _ => 0.0,
        };

        match obj.kind() {
            ObjectKind::Player => {
                update_player(obj, res, input, intent, delta_time, &mut fired);
            }
            ObjectKind::Spear => update_spear(obj, viewport),
            ObjectKind::Level | ObjectKind::Enemy => {}
        }

        // Zero intent preserves the last facing.
        if intent != 0.0 {
            obj.direction = intent.signum();
        }

        obj.velocity += obj.acceleration * intent * delta_time;
        if obj.velocity.x.abs() > obj.max_speed_x {
            obj.velocity.x = intent * obj.max_speed_x;
        }
        obj.position += obj.velocity * delta_time;
    }

    // The spear enters the pool only after the shooter's borrow has ended.
    if let Some(spear) = fired {
        world.fire_spear(spear);
    }

    collide_and_sense(world, res, id);
}

fn update_player(
    obj: &mut GameObject,
    res: &Resources,
    input: &InputSnapshot,
    intent: f32,
    delta_time: f32,
    fired: &mut Option<GameObject>,
) {
    let ObjectData::Player(player) = &mut obj.data else {
        return;
    };

    // The cooldown runs in every state.
    player.weapon_timer.step(delta_time);

    match player.state {
        PlayerState::Idle => {
            if intent != 0.0 {
                player.state = PlayerState::Running;
            } else if obj.velocity.x != 0.0 {
                // Brake toward rest; snap once a step would overshoot zero.
                let braking = if obj.velocity.x > 0.0 { -1.5 } else { 1.5 };
                let amount = braking * obj.acceleration.x * delta_time;
                if obj.velocity.x.abs() < amount.abs() {
                    obj.velocity.x = 0.0;
                } else {
                    obj.velocity.x += amount;
                }
            }
            obj.texture = res.tex_diver_standing;
            obj.current_animation = Some(Resources::ANIM_PLAYER_IDLE);
        }
        PlayerState::Running => {
            if intent == 0.0 {
                player.state = PlayerState::Idle;
            }
            obj.texture = res.tex_diver_running;
            obj.current_animation = Some(Resources::ANIM_PLAYER_RUN);
        }
        PlayerState::Jumping => {
            obj.texture = res.tex_diver_standing;
            obj.current_animation = Some(Resources::ANIM_PLAYER_IDLE);
        }
    }

    // Shooting is allowed from every state.
    if input.shoot && player.weapon_timer.is_timed_out() {
        player.weapon_timer.reset();
        *fired = Some(make_spear(obj.position, obj.direction, res));
    }
}

fn update_spear(obj: &mut GameObject, viewport: Rect) {
    let ObjectData::Spear(spear) = &mut obj.data else {
        return;
    };
    match spear.state {
        SpearState::Moving => {
            // Retire once fully outside the logical view.
            let screen = obj.position - viewport.point();
            if screen.x < 0.0 || screen.x > viewport.w || screen.y < 0.0 || screen.y > viewport.h {
                spear.state = SpearState::Inactive;
            }
        }
        SpearState::Colliding => {
            if let Some(index) = obj.current_animation {
                if obj.animations[index].is_done() {
                    spear.state = SpearState::Inactive;
                }
            }
        }
        SpearState::Inactive => {}
    }
}

fn make_spear(player_position: Vec2, direction: f32, res: &Resources) -> GameObject {
    let muzzle = if direction < 0.0 {
        -SPEAR_MUZZLE_OFFSET
    } else {
        SPEAR_MUZZLE_OFFSET
    };
    let mut spear = GameObject::new(
        ObjectData::Spear(SpearData::new()),
        vec2(player_position.x + muzzle, player_position.y),
        res.tex_spear,
    );
    spear.direction = direction;
    // The tip leads: the collider hugs whichever end faces forward.
    spear.collider = Rect::new(if direction < 0.0 { 20.0 } else { 0.0 }, 13.0, 12.0, 5.0);
    spear.velocity = vec2(
        SPEAR_SPEED * direction,
        gen_range(-SPEAR_JITTER_Y, SPEAR_JITTER_Y),
    );
    spear.max_speed_x = SPEAR_MAX_SPEED_X;
    spear.animations = res.spear_anims.clone();
    spear.current_animation = Some(Resources::ANIM_SPEAR_MOVING);
    spear
}

fn collide_and_sense(world: &mut World, res: &Resources, id: ObjectId) {
    let mut found_ground = false;
    for layer in 0..world.layers.len() {
        for index in 0..world.layers[layer].len() {
            let other = ObjectId::Layer { layer, index };
            if other == id {
                continue;
            }
            let (b_rect, b_kind) = {
                let b = world.object(other);
                (b.world_collider(), b.kind())
            };
            collision::check(world.object_mut(id), b_rect, b_kind, res);

            // Ground contact is sensed against level geometry only.
            if b_kind == ObjectKind::Level && world.object(id).ground_sensor().overlaps(&b_rect) {
                found_ground = true;
            }
        }
    }

    let obj = world.object_mut(id);
    if obj.grounded != found_ground {
        obj.grounded = found_ground;
        if found_ground {
            if let ObjectData::Player(player) = &mut obj.data {
                // Landing lands in the run state; with no input it settles
                // back to idle on the next frame.
                player.state = PlayerState::Running;
            }
        }
    }
}

fn step_animation(obj: &mut GameObject, delta_time: f32) {
    if let Some(index) = obj.current_animation {
        obj.animations[index].step(delta_time);
    }
}
