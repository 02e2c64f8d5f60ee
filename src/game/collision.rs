//! Collision detection and response
//!
//! Broad phase is a plain AABB intersection between world-space colliders.
//! The response is dispatched on the ordered kind pair: the first object is
//! the one being moved and the only one mutated. Pairs without a defined
//! response are detected but produce no effect.

use macroquad::math::Rect;

use crate::assets::Resources;

use super::object::{GameObject, ObjectData, ObjectKind, SpearState};

/// Test `a` against another object's collider and apply the response policy
/// on overlap. Only `a` is ever mutated; the other object is reduced to its
/// world-space rectangle and kind up front.
pub fn check(a: &mut GameObject, b_rect: Rect, b_kind: ObjectKind, res: &Resources) {
    if let Some(overlap) = a.world_collider().intersect(b_rect) {
        // A shared edge produces a zero-area rectangle, not a collision.
        if overlap.w > 0.0 && overlap.h > 0.0 {
            respond(a, b_kind, overlap, res);
        }
    }
}

fn respond(a: &mut GameObject, b_kind: ObjectKind, overlap: Rect, res: &Resources) {
    match (a.kind(), b_kind) {
        (ObjectKind::Player, ObjectKind::Level) => push_out(a, overlap),
        (ObjectKind::Spear, b_kind) if b_kind != ObjectKind::Player => {
            let ObjectData::Spear(spear) = &mut a.data else {
                return;
            };
            if spear.state == SpearState::Moving {
                spear.state = SpearState::Colliding;
                push_out(a, overlap);
                a.velocity = macroquad::math::Vec2::ZERO;
                a.texture = res.tex_spear_hit;
                a.current_animation = Some(Resources::ANIM_SPEAR_HIT);
            }
        }
        _ => {}
    }
}

/// Move `a` out of the overlap along exactly one axis — the one with the
/// smaller overlap extent — against its direction of travel, and kill its
/// velocity on that axis.
fn push_out(a: &mut GameObject, overlap: Rect) {
    if overlap.w < overlap.h {
        if a.velocity.x > 0.0 {
            a.position.x -= overlap.w;
        } else if a.velocity.x < 0.0 {
            a.position.x += overlap.w;
        }
        a.velocity.x = 0.0;
    } else {
        if a.velocity.y > 0.0 {
            a.position.y -= overlap.h;
        } else if a.velocity.y < 0.0 {
            a.position.y += overlap.h;
        }
        a.velocity.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use macroquad::math::{vec2, Vec2};

    use crate::game::object::{PlayerData, SpearData, TextureId};

    use super::*;

    fn player_at(position: Vec2, velocity: Vec2) -> GameObject {
        let mut obj = GameObject::new(
            ObjectData::Player(PlayerData::new()),
            position,
            TextureId::new(0),
        );
        obj.collider = Rect::new(0.0, 0.0, 10.0, 20.0);
        obj.velocity = velocity;
        obj
    }

    #[test]
    fn test_push_out_right_mover_along_smaller_axis() {
        let res = Resources::new();
        // Overlapping 3 wide and 10 tall while moving right: x shrinks by 3.
        let mut player = player_at(vec2(100.0, 100.0), vec2(50.0, 0.0));
        let wall = Rect::new(107.0, 100.0, 32.0, 32.0);

        check(&mut player, wall, ObjectKind::Level, &res);

        assert_eq!(player.position.x, 97.0);
        assert_eq!(player.position.y, 100.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_push_out_left_mover_moves_right() {
        let res = Resources::new();
        let mut player = player_at(vec2(100.0, 100.0), vec2(-30.0, 0.0));
        let wall = Rect::new(95.0, 100.0, 8.0, 32.0);

        check(&mut player, wall, ObjectKind::Level, &res);

        assert_eq!(player.position.x, 103.0);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_vertical_overlap_resolves_on_y() {
        let res = Resources::new();
        // Falling onto a floor: the overlap is wide and shallow.
        let mut player = player_at(vec2(100.0, 100.0), vec2(0.0, 80.0));
        let floor = Rect::new(90.0, 117.0, 32.0, 32.0);

        check(&mut player, floor, ObjectKind::Level, &res);

        assert_eq!(player.position.y, 97.0);
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.position.x, 100.0);
    }

    #[test]
    fn test_no_overlap_no_response() {
        let res = Resources::new();
        let mut player = player_at(vec2(0.0, 0.0), vec2(50.0, 0.0));
        let far = Rect::new(100.0, 100.0, 32.0, 32.0);

        check(&mut player, far, ObjectKind::Level, &res);

        assert_eq!(player.position, vec2(0.0, 0.0));
        assert_eq!(player.velocity.x, 50.0);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let res = Resources::new();
        let mut player = player_at(vec2(100.0, 100.0), vec2(50.0, 0.0));
        let wall = Rect::new(110.0, 100.0, 32.0, 32.0);

        check(&mut player, wall, ObjectKind::Level, &res);

        assert_eq!(player.position.x, 100.0);
        assert_eq!(player.velocity.x, 50.0);
    }

    #[test]
    fn test_moving_spear_sticks_and_switches_to_hit() {
        let res = Resources::new();
        let mut spear = GameObject::new(
            ObjectData::Spear(SpearData::new()),
            vec2(100.0, 100.0),
            res.tex_spear,
        );
        spear.collider = Rect::new(0.0, 13.0, 12.0, 5.0);
        spear.velocity = vec2(200.0, 3.0);
        spear.animations = res.spear_anims.clone();
        spear.current_animation = Some(Resources::ANIM_SPEAR_MOVING);

        let rock = Rect::new(110.0, 90.0, 32.0, 32.0);
        check(&mut spear, rock, ObjectKind::Level, &res);

        assert_eq!(spear.spear_state(), Some(SpearState::Colliding));
        assert_eq!(spear.velocity, Vec2::ZERO);
        assert_eq!(spear.texture, res.tex_spear_hit);
        assert_eq!(spear.current_animation, Some(Resources::ANIM_SPEAR_HIT));
    }

    #[test]
    fn test_colliding_spear_ignores_further_hits() {
        let res = Resources::new();
        let mut spear = GameObject::new(
            ObjectData::Spear(SpearData {
                state: SpearState::Colliding,
            }),
            vec2(100.0, 100.0),
            res.tex_spear_hit,
        );
        spear.collider = Rect::new(0.0, 13.0, 12.0, 5.0);
        let position = spear.position;

        let rock = Rect::new(105.0, 90.0, 32.0, 32.0);
        check(&mut spear, rock, ObjectKind::Level, &res);

        assert_eq!(spear.spear_state(), Some(SpearState::Colliding));
        assert_eq!(spear.position, position);
    }

    #[test]
    fn test_undefined_pairs_are_inert() {
        let res = Resources::new();
        let mut player = player_at(vec2(100.0, 100.0), vec2(50.0, 0.0));
        let overlapping = Rect::new(105.0, 100.0, 12.0, 5.0);

        // Player vs spear and player vs enemy have no defined response.
        check(&mut player, overlapping, ObjectKind::Spear, &res);
        check(&mut player, overlapping, ObjectKind::Enemy, &res);

        assert_eq!(player.position, vec2(100.0, 100.0));
        assert_eq!(player.velocity.x, 50.0);
    }
}
