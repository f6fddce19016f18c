//! Game state: the pose and its time-stepped movement rule.
//!
//! Movement is the only thing that mutates a [`Pose`], and it commits a
//! translation only after probing the destination against the map, so
//! the pose invariant — never inside a solid cell — holds by
//! construction. Rotation is never blocked.

use glam::vec2;

use crate::world::{Map, MapError, Pose};

/// Translation speed, map units per second.
pub const MOVE_SPEED: f32 = 3.0;
/// Rotation speed, radians per second.
pub const TURN_SPEED: f32 = 2.2;
/// Collision probe half-width around the pose.
pub const PLAYER_RADIUS: f32 = 0.25;
/// [`Game::update`] time unit: 1 second == 256 ticks. The shell derives
/// it from its performance counter as `elapsed / (freq >> 8)`.
pub const TICKS_PER_SEC: u32 = 256;

#[derive(Debug)]
pub struct Game {
    map: Map,
    pose: Pose,
}

impl Game {
    /// Embedded demo level with its spawn point.
    pub fn new() -> Result<Self, MapError> {
        Self::with_map(Map::default_level()?, Pose::new(vec2(8.5, 8.5), 0.0))
    }

    /// Any map/pose pair (tests, benchmark sweeps). Rejects a spawn
    /// inside a solid cell — the movement rule preserves the invariant
    /// but cannot establish it.
    pub fn with_map(map: Map, pose: Pose) -> Result<Self, MapError> {
        let (cx, cy) = (pose.pos.x.floor() as i32, pose.pos.y.floor() as i32);
        if map.is_solid(cx, cy) {
            return Err(MapError::SpawnBlocked(cx.max(0) as usize, cy.max(0) as usize));
        }
        Ok(Self { map, pose })
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Advance the pose by `ticks` (1/256 s each).
    ///
    /// * `move_dir` ∈ {-1, 0, 1}: backward / hold / forward along facing.
    /// * `rot_dir` ∈ {-1, 0, 1}: turn left / hold / right on screen.
    ///
    /// Each translation axis is probed and clamped independently, which
    /// doubles as wall sliding when driving into a wall at an angle.
    pub fn update(&mut self, move_dir: i32, rot_dir: i32, ticks: u32) {
        let dt = ticks as f32 / TICKS_PER_SEC as f32;

        if rot_dir != 0 {
            self.pose.turn(TURN_SPEED * dt * rot_dir as f32);
        }

        if move_dir != 0 {
            let step = self.pose.forward() * (MOVE_SPEED * dt * move_dir as f32);
            let pos = self.pose.pos;

            let nx = pos.x + step.x;
            if !self.blocked_x(nx + PLAYER_RADIUS * step.x.signum(), pos.y) {
                self.pose.pos.x = nx;
            }

            let ny = pos.y + step.y;
            if !self.blocked_y(self.pose.pos.x, ny + PLAYER_RADIUS * step.y.signum()) {
                self.pose.pos.y = ny;
            }
        }
    }

    /// Leading-edge probe for an X translation: the destination edge at
    /// both lateral extents of the player.
    fn blocked_x(&self, x: f32, y: f32) -> bool {
        let r = PLAYER_RADIUS;
        self.map.is_solid(x.floor() as i32, (y - r).floor() as i32)
            || self.map.is_solid(x.floor() as i32, (y + r).floor() as i32)
    }

    /// Same for a Y translation.
    fn blocked_y(&self, x: f32, y: f32) -> bool {
        let r = PLAYER_RADIUS;
        self.map.is_solid((x - r).floor() as i32, y.floor() as i32)
            || self.map.is_solid((x + r).floor() as i32, y.floor() as i32)
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
