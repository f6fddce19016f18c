//! Ray casting backends.
//!
//! *The renderer never does projection math itself.* It asks a
//! [`RayCaster`] for one [`RayHit`] per screen column and turns the
//! distances into wall slices. Two backends implement the trait with
//! the same DDA grid walk over different number representations:
//!
//! * [`FloatCaster`] — native `f32` throughout.
//! * [`FixedCaster`] — Q16.16 integers and a sine lookup table.
//!
//! Both are run every frame on the same pose/map specifically so their
//! numeric drift, if any, shows up on screen. Divergence is a result
//! here, never an error.

use crate::screen;
use crate::world::{Map, Pose};

mod fixed;
mod float;

pub use fixed::FixedCaster;
pub use float::FloatCaster;

/// Horizontal field of view, radians.
pub const FOV: f32 = std::f32::consts::FRAC_PI_3;

/// Rays stop after this many map units and report a void hit.
pub const MAX_DEPTH: f32 = 24.0;

/// Floor of any reported distance; keeps the renderer's height
/// division finite when a pose sits on a cell boundary.
pub const MIN_DIST: f32 = 1e-3;

/// Which grid axis the ray crossed last before entering the solid
/// cell. Y-side hits render darker, a cheap depth cue without textures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

/// Result of casting one column's ray.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Perpendicular distance (map units) from the pose to the struck
    /// cell boundary, projected onto the facing axis so a flat wall
    /// renders flat. Always `>= MIN_DIST`; `MAX_DEPTH` on a miss.
    pub distance: f32,
    pub side: Side,
    /// Wall palette index of the struck cell; 0 means the ray ran out
    /// of range (void, rendered as backdrop).
    pub tile: u8,
}

/// One ray per screen column against an immutable map.
///
/// Implementations are stateless per frame: everything they own is
/// numeric configuration fixed at construction, so a single instance
/// may serve any number of poses, maps and frames.
pub trait RayCaster {
    /// Cast the ray for `column`. `column >= screen::WIDTH` is a
    /// contract violation and panics.
    fn cast(&self, pose: &Pose, map: &Map, column: usize) -> RayHit;

    /// Short name for window captions and benchmark reports.
    fn label(&self) -> &'static str;
}

/// Angular offset of `column`'s ray from the facing direction.
/// Column centers span `[-FOV/2, FOV/2]`.
#[inline]
pub(crate) fn column_offset(column: usize) -> f32 {
    assert!(
        column < screen::WIDTH,
        "column {column} outside 0..{}",
        screen::WIDTH
    );
    ((column as f32 + 0.5) / screen::WIDTH as f32 - 0.5) * FOV
}

/*──────────────────────────────── Tests ───────────────────────────────*/
