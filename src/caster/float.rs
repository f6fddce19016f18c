//! Floating-point backend: the DDA walk in native `f32`.

use glam::vec2;

use super::{MAX_DEPTH, MIN_DIST, RayCaster, RayHit, Side, column_offset};
use crate::world::{Map, Pose, Tile};

/// Reference backend. Carries no configuration: `f32` trig comes from
/// the host, so construction is free and the instance is zero-sized.
#[derive(Default)]
pub struct FloatCaster;

impl FloatCaster {
    pub fn new() -> Self {
        Self
    }
}

impl RayCaster for FloatCaster {
    fn cast(&self, pose: &Pose, map: &Map, column: usize) -> RayHit {
        let offset = column_offset(column);
        let (s, c) = (pose.angle + offset).sin_cos();
        let dir = vec2(c, s);

        let mut cell_x = pose.pos.x.floor() as i32;
        let mut cell_y = pose.pos.y.floor() as i32;

        // Along-ray distance between successive boundaries of each axis.
        let delta_x = if dir.x == 0.0 { f32::INFINITY } else { (1.0 / dir.x).abs() };
        let delta_y = if dir.y == 0.0 { f32::INFINITY } else { (1.0 / dir.y).abs() };

        // Along-ray distance to the first boundary of each axis.
        let (step_x, mut side_x) = if dir.x < 0.0 {
            (-1, (pose.pos.x - cell_x as f32) * delta_x)
        } else {
            (1, (cell_x as f32 + 1.0 - pose.pos.x) * delta_x)
        };
        let (step_y, mut side_y) = if dir.y < 0.0 {
            (-1, (pose.pos.y - cell_y as f32) * delta_y)
        } else {
            (1, (cell_y as f32 + 1.0 - pose.pos.y) * delta_y)
        };

        loop {
            // Cross whichever boundary comes first; `along` is the
            // ray length at the crossing just made.
            let (along, side) = if side_x < side_y {
                let t = side_x;
                side_x += delta_x;
                cell_x += step_x;
                (t, Side::X)
            } else {
                let t = side_y;
                side_y += delta_y;
                cell_y += step_y;
                (t, Side::Y)
            };

            if along > MAX_DEPTH {
                return RayHit {
                    distance: MAX_DEPTH,
                    side,
                    tile: 0,
                };
            }
            if let Tile::Wall(kind) = map.tile(cell_x, cell_y) {
                // Project onto the facing axis: kills the fisheye bulge.
                return RayHit {
                    distance: (along * offset.cos()).max(MIN_DIST),
                    side,
                    tile: kind,
                };
            }
        }
    }

    fn label(&self) -> &'static str {
        "float"
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::tests::empty_room;
    use crate::screen;
    use glam::vec2;

    #[test]
    fn axis_ray_reports_x_side() {
        let map = empty_room(8);
        let pose = Pose::new(vec2(2.5, 4.5), 0.0); // facing +X at wall x=7
        let hit = FloatCaster::new().cast(&pose, &map, screen::WIDTH / 2);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.tile, 1);
        assert!((hit.distance - 4.5).abs() < 0.02, "{hit:?}");
    }

    #[test]
    fn out_of_range_ray_is_void() {
        // 64×64 room: the far wall sits beyond MAX_DEPTH.
        let map = empty_room(64);
        let pose = Pose::new(vec2(2.0, 32.0), 0.0);
        let hit = FloatCaster::new().cast(&pose, &map, screen::WIDTH / 2);
        assert_eq!(hit.tile, 0);
        assert_eq!(hit.distance, MAX_DEPTH);
    }

    #[test]
    fn boundary_pose_survives_axis_aligned_ray() {
        // Pose exactly on a cell corner, ray exactly along +Y.
        let map = empty_room(8);
        let pose = Pose::new(vec2(4.0, 4.0), std::f32::consts::FRAC_PI_2);
        let hit = FloatCaster::new().cast(&pose, &map, screen::WIDTH / 2);
        assert!(hit.distance > 0.0 && hit.distance <= map.diagonal());
    }
}
