use glam::{Vec2, vec2};
use std::f32::consts::TAU;

/// Viewer placement in map space.
///
/// * `pos` in map units (one unit = one grid cell edge).
/// * `angle` in radians, 0 = +X (east), counter-clockwise, kept in
///   `[0, TAU)` by [`Pose::turn`].
///
/// Read-only to the casters and renderer; only the game state mutates it.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub pos: Vec2,
    pub angle: f32,
}

impl Pose {
    pub fn new(pos: Vec2, angle: f32) -> Self {
        Self {
            pos,
            angle: angle.rem_euclid(TAU),
        }
    }

    /// Unit vector the viewer looks along.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.angle.sin_cos();
        vec2(c, s)
    }

    /// Rotate around the vertical axis (positive = counter-clockwise).
    #[inline]
    pub fn turn(&mut self, delta: f32) {
        self.angle = (self.angle + delta).rem_euclid(TAU);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_is_unit_length() {
        let pose = Pose::new(vec2(2.0, 3.0), 0.73);
        assert!((pose.forward().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn forward_tracks_axes() {
        let east = Pose::new(Vec2::ZERO, 0.0);
        assert!((east.forward() - vec2(1.0, 0.0)).length() < 1e-6);
        let north = Pose::new(Vec2::ZERO, FRAC_PI_2);
        assert!((north.forward() - vec2(0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn full_turn_wraps_back() {
        let mut pose = Pose::new(Vec2::ZERO, 1.0);
        for _ in 0..360 {
            pose.turn(TAU / 360.0);
        }
        let err = (pose.angle - 1.0).abs().min(TAU - (pose.angle - 1.0).abs());
        assert!(err < 1e-3, "angle drifted to {}", pose.angle);
    }

    #[test]
    fn angle_stays_normalized() {
        let mut pose = Pose::new(Vec2::ZERO, 0.1);
        pose.turn(-0.5);
        assert!((0.0..TAU).contains(&pose.angle));
    }
}
