//! Fixed-point backend: the same DDA walk in Q16.16 integers.
//!
//! No float enters the per-ray path. Positions, boundary distances and
//! the accumulated ray length are `i32` with 16 fractional bits
//! (products and quotients widen to `i64`); trigonometry is a sine
//! table indexed by a 1/4096-turn binary angle. The tables are owned
//! by the instance and built once at construction — two casters never
//! share state, and dropping one releases everything it allocated.
//!
//! Precision: one angle step is ~0.0015 rad, which keeps the hit
//! distance within the 0.05 map-unit visual-equivalence bound of the
//! float backend at level scale (see DESIGN.md).

use super::{MAX_DEPTH, MIN_DIST, RayCaster, RayHit, Side, column_offset};
use crate::screen;
use crate::world::{Map, Pose, Tile};
use std::f32::consts::TAU;

/// Q16.16 value.
type Fp = i32;

const FP_SHIFT: u32 = 16;
const FP_ONE: Fp = 1 << FP_SHIFT;

/// Binary angle resolution: steps per full turn.
const ANGLE_STEPS: i32 = 4096;
/// 90° in steps; turns the sine table into a cosine table.
const QUARTER: i32 = ANGLE_STEPS / 4;

/// Ray budget in Q16.16 map units.
const MAX_DEPTH_FP: Fp = (MAX_DEPTH as i32) << FP_SHIFT;
/// Boundary-to-boundary distance cap for near-axis rays. Anything this
/// large exceeds the ray budget on the first crossing anyway, and the
/// cap keeps the accumulator far from `i32` overflow.
const DELTA_CAP: Fp = MAX_DEPTH_FP * 2;

#[inline(always)]
fn fp_from_f32(v: f32) -> Fp {
    (v * FP_ONE as f32).round() as Fp
}

#[inline(always)]
fn fp_to_f32(v: Fp) -> f32 {
    v as f32 / FP_ONE as f32
}

#[inline(always)]
fn fp_mul(a: Fp, b: Fp) -> Fp {
    ((a as i64 * b as i64) >> FP_SHIFT) as Fp
}

/// Saturating Q16.16 divide; `b` must be non-zero.
#[inline(always)]
fn fp_div(a: Fp, b: Fp) -> Fp {
    let q = ((a as i64) << FP_SHIFT) / b as i64;
    q.clamp(-(i32::MAX as i64), i32::MAX as i64) as Fp
}

/// Nearest binary angle to `angle` radians, wrapped to a full turn.
#[inline]
fn angle_steps(angle: f32) -> i32 {
    ((angle * ANGLE_STEPS as f32 / TAU).round() as i32).rem_euclid(ANGLE_STEPS)
}

/// Q16.16 backend with instance-owned trigonometry.
pub struct FixedCaster {
    /// `sin` over one full turn, one entry per binary-angle step.
    sin_tab: Box<[Fp]>,
    /// Per-column ray offset in binary-angle steps.
    col_step: Box<[i32]>,
    /// `cos` of each column's quantized offset, for the fisheye
    /// correction, so the hot path never touches the host's trig.
    col_cos: Box<[Fp]>,
}

impl Default for FixedCaster {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedCaster {
    /// Build the sine and per-column tables. Host float trig is used
    /// here once; after construction every cast is integer-only.
    pub fn new() -> Self {
        let sin_tab: Box<[Fp]> = (0..ANGLE_STEPS)
            .map(|i| fp_from_f32((i as f32 * TAU / ANGLE_STEPS as f32).sin()))
            .collect();

        let mut col_step = Vec::with_capacity(screen::WIDTH);
        let mut col_cos = Vec::with_capacity(screen::WIDTH);
        for column in 0..screen::WIDTH {
            let steps =
                (column_offset(column) * ANGLE_STEPS as f32 / TAU).round() as i32;
            col_step.push(steps);
            col_cos.push(fp_from_f32(
                (steps as f32 * TAU / ANGLE_STEPS as f32).cos(),
            ));
        }

        Self {
            sin_tab,
            col_step: col_step.into_boxed_slice(),
            col_cos: col_cos.into_boxed_slice(),
        }
    }

    #[inline(always)]
    fn sin(&self, steps: i32) -> Fp {
        self.sin_tab[steps.rem_euclid(ANGLE_STEPS) as usize]
    }

    #[inline(always)]
    fn cos(&self, steps: i32) -> Fp {
        self.sin(steps + QUARTER)
    }
}

impl RayCaster for FixedCaster {
    fn cast(&self, pose: &Pose, map: &Map, column: usize) -> RayHit {
        assert!(
            column < screen::WIDTH,
            "column {column} outside 0..{}",
            screen::WIDTH
        );

        // Pose enters the integer domain here; everything below is Fp.
        let steps = angle_steps(pose.angle) + self.col_step[column];
        let dir_x = self.cos(steps);
        let dir_y = self.sin(steps);

        let pos_x = fp_from_f32(pose.pos.x);
        let pos_y = fp_from_f32(pose.pos.y);
        let mut cell_x = pos_x >> FP_SHIFT;
        let mut cell_y = pos_y >> FP_SHIFT;

        let delta_x = if dir_x == 0 {
            DELTA_CAP
        } else {
            fp_div(FP_ONE, dir_x).abs().min(DELTA_CAP)
        };
        let delta_y = if dir_y == 0 {
            DELTA_CAP
        } else {
            fp_div(FP_ONE, dir_y).abs().min(DELTA_CAP)
        };

        let (step_x, mut side_x) = if dir_x < 0 {
            (-1, fp_mul(pos_x - (cell_x << FP_SHIFT), delta_x))
        } else {
            (1, fp_mul(((cell_x + 1) << FP_SHIFT) - pos_x, delta_x))
        };
        let (step_y, mut side_y) = if dir_y < 0 {
            (-1, fp_mul(pos_y - (cell_y << FP_SHIFT), delta_y))
        } else {
            (1, fp_mul(((cell_y + 1) << FP_SHIFT) - pos_y, delta_y))
        };

        loop {
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

            if along > MAX_DEPTH_FP {
                return RayHit {
                    distance: MAX_DEPTH,
                    side,
                    tile: 0,
                };
            }
            if let Tile::Wall(kind) = map.tile(cell_x, cell_y) {
                let perp = fp_mul(along, self.col_cos[column]);
                return RayHit {
                    distance: fp_to_f32(perp).max(MIN_DIST),
                    side,
                    tile: kind,
                };
            }
        }
    }

    fn label(&self) -> &'static str {
        "fixed"
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::tests::empty_room;
    use glam::vec2;

    #[test]
    fn fp_roundtrip_and_arithmetic() {
        assert_eq!(fp_to_f32(fp_from_f32(2.5)), 2.5);
        assert_eq!(fp_mul(fp_from_f32(1.5), fp_from_f32(2.0)), fp_from_f32(3.0));
        assert_eq!(fp_div(fp_from_f32(3.0), fp_from_f32(2.0)), fp_from_f32(1.5));
    }

    #[test]
    fn fp_div_saturates_near_zero_divisor() {
        // 1/ε in Q16.16 overflows 32 bits; the cap must hold.
        assert_eq!(fp_div(FP_ONE, 1), i32::MAX);
        assert_eq!(fp_div(FP_ONE, -1), -i32::MAX);
    }

    #[test]
    fn binary_angle_wraps_full_turn() {
        for a in [0.0_f32, 0.4, 1.0, 2.8, 5.5] {
            assert_eq!(angle_steps(a), angle_steps(a + TAU), "angle {a}");
        }
        assert_eq!(angle_steps(TAU), 0);
    }

    #[test]
    fn sine_table_cardinal_points() {
        let caster = FixedCaster::new();
        assert_eq!(caster.sin(0), 0);
        assert_eq!(caster.sin(QUARTER), FP_ONE);
        assert_eq!(caster.cos(0), FP_ONE);
        assert_eq!(caster.sin(2 * QUARTER), 0);
    }

    #[test]
    fn instances_do_not_share_tables() {
        let a = FixedCaster::new();
        let b = FixedCaster::new();
        assert_ne!(a.sin_tab.as_ptr(), b.sin_tab.as_ptr());
        assert_eq!(a.sin_tab, b.sin_tab);
    }

    #[test]
    fn axis_hit_matches_geometry() {
        let map = empty_room(8);
        // Facing +Y from (4.5, 2.5): wall boundary at y = 7.0.
        let pose = Pose::new(vec2(4.5, 2.5), std::f32::consts::FRAC_PI_2);
        let hit = FixedCaster::new().cast(&pose, &map, crate::screen::WIDTH / 2);
        assert_eq!(hit.side, Side::Y);
        assert_eq!(hit.tile, 1);
        assert!((hit.distance - 4.5).abs() < 0.02, "{hit:?}");
    }

    #[test]
    fn out_of_range_ray_is_void() {
        let map = empty_room(64);
        let pose = Pose::new(vec2(2.0, 32.0), 0.0);
        let hit = FixedCaster::new().cast(&pose, &map, crate::screen::WIDTH / 2);
        assert_eq!(hit.tile, 0);
        assert_eq!(hit.distance, MAX_DEPTH);
    }
}
