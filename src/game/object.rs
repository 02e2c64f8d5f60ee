//! Game object model
//!
//! Every simulated thing — the diver, level geometry, enemies, spears — is
//! one `GameObject`. Kind-specific state lives in the `ObjectData` payload,
//! so only the active variant's fields are reachable and the tag can never
//! disagree with the data it selects.

use macroquad::math::{Rect, Vec2};

use crate::animation::Animation;
use crate::timer::Timer;

/// Seconds between spear shots.
pub const WEAPON_COOLDOWN: f32 = 0.2;

/// Opaque handle into the externally owned texture table.
///
/// The simulation only selects textures; loading and freeing them is the
/// resource layer's business. Index handles stay valid across frames because
/// the table never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureId(usize);

impl TextureId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Discriminant-only view of an object's kind, for collision dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Player,
    Level,
    Enemy,
    Spear,
}

/// The diver's movement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Running,
    Jumping,
}

/// A spear's lifecycle state. `Inactive` marks a reusable pool slot,
/// not a dead object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpearState {
    Moving,
    Colliding,
    Inactive,
}

/// Player-only state: the movement state machine and the fire-rate timer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerData {
    pub state: PlayerState,
    pub weapon_timer: Timer,
}

impl PlayerData {
    pub fn new() -> Self {
        Self {
            state: PlayerState::Idle,
            weapon_timer: Timer::new(WEAPON_COOLDOWN),
        }
    }
}

impl Default for PlayerData {
    fn default() -> Self {
        Self::new()
    }
}

/// Spear-only state.
#[derive(Debug, Clone, PartialEq)]
pub struct SpearData {
    pub state: SpearState,
}

impl SpearData {
    pub fn new() -> Self {
        Self {
            state: SpearState::Moving,
        }
    }
}

impl Default for SpearData {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind tag and kind-specific state in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Player(PlayerData),
    Level,
    /// No tile code spawns enemies and no response pair names them; the
    /// variant exists so the collision dispatch stays total over kinds.
    #[allow(dead_code)]
    Enemy,
    Spear(SpearData),
}

/// A simulated object: kind-specific payload plus the kinematic and
/// collision fields shared by every kind.
#[derive(Debug, Clone)]
pub struct GameObject {
    pub data: ObjectData,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Horizontal facing, +1 right or -1 left.
    pub direction: f32,
    pub max_speed_x: f32,
    /// Collider rectangle, offset from `position`.
    pub collider: Rect,
    pub animations: Vec<Animation>,
    pub current_animation: Option<usize>,
    pub texture: TextureId,
    /// Participates in gravity.
    pub dynamic: bool,
    /// Resting on level geometry.
    pub grounded: bool,
}

impl GameObject {
    pub fn new(data: ObjectData, position: Vec2, texture: TextureId) -> Self {
        Self {
            data,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            direction: 1.0,
            max_speed_x: 0.0,
            collider: Rect::new(0.0, 0.0, 0.0, 0.0),
            animations: Vec::new(),
            current_animation: None,
            texture,
            dynamic: false,
            grounded: false,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self.data {
            ObjectData::Player(_) => ObjectKind::Player,
            ObjectData::Level => ObjectKind::Level,
            ObjectData::Enemy => ObjectKind::Enemy,
            ObjectData::Spear(_) => ObjectKind::Spear,
        }
    }

    /// Collider translated into world space.
    pub fn world_collider(&self) -> Rect {
        self.collider.offset(self.position)
    }

    /// One-pixel-tall strip under the collider, used to sense ground contact.
    pub fn ground_sensor(&self) -> Rect {
        Rect::new(
            self.position.x + self.collider.x,
            self.position.y + self.collider.y + self.collider.h,
            self.collider.w,
            1.0,
        )
    }

    /// Spear state, if this object is a spear.
    pub fn spear_state(&self) -> Option<SpearState> {
        match &self.data {
            ObjectData::Spear(spear) => Some(spear.state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use macroquad::math::vec2;

    use super::*;

    #[test]
    fn test_kind_follows_payload() {
        let player = GameObject::new(
            ObjectData::Player(PlayerData::new()),
            vec2(0.0, 0.0),
            TextureId::new(0),
        );
        assert_eq!(player.kind(), ObjectKind::Player);

        let tile = GameObject::new(ObjectData::Level, vec2(0.0, 0.0), TextureId::new(0));
        assert_eq!(tile.kind(), ObjectKind::Level);
        assert_eq!(tile.spear_state(), None);
    }

    #[test]
    fn test_new_player_is_idle_with_cold_weapon() {
        let data = PlayerData::new();
        assert_eq!(data.state, PlayerState::Idle);
        assert_eq!(data.weapon_timer.length(), WEAPON_COOLDOWN);
        assert!(!data.weapon_timer.is_timed_out());
    }

    #[test]
    fn test_world_collider_and_sensor_follow_position() {
        let mut obj = GameObject::new(ObjectData::Level, vec2(100.0, 50.0), TextureId::new(0));
        obj.collider = Rect::new(11.0, 6.0, 10.0, 20.0);

        let rect = obj.world_collider();
        assert_eq!((rect.x, rect.y, rect.w, rect.h), (111.0, 56.0, 10.0, 20.0));

        let sensor = obj.ground_sensor();
        assert_eq!((sensor.x, sensor.y, sensor.w, sensor.h), (111.0, 76.0, 10.0, 1.0));
    }
}
