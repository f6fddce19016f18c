//! World grid (immutable after construction).
//!
//! Cells are palette indices: `0` = walkable, `1..=3` = wall kinds the
//! renderer maps to colors. Both caster backends share one `Map` by
//! reference; nothing mutates it after `from_rows` validates it.

use thiserror::Error;

/// One grid cell, as seen by casters and movement code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// Solid cell; payload is the wall palette index (1..=3).
    Wall(u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,
    #[error("row {0} differs in length from row 0")]
    Ragged(usize),
    #[error("boundary cell ({0}, {1}) is not solid")]
    OpenBoundary(usize, usize),
    #[error("spawn cell ({0}, {1}) is solid")]
    SpawnBlocked(usize, usize),
}

/// Runtime snapshot of one level (immutable after load).
#[derive(Debug, Clone)]
pub struct Map {
    w: usize,
    h: usize,
    cells: Vec<u8>,
}

/// Embedded demo level, 16×16. Border sealed with wall kind 1,
/// interior pillars in kinds 2 and 3 so the two views have parallax
/// references at several depths.
#[rustfmt::skip]
const DEMO: [[u8; 16]; 16] = [
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,2,1],
    [1,0,0,0,2,2,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,2,2,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,3,3,3,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,2,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,2,0,0,0,0,0,0,0,0,0,3,0,1],
    [1,0,0,2,0,0,0,0,0,0,0,0,0,3,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,3,3,0,0,0,0,0,0,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,2,0,0,1],
    [1,0,3,0,0,0,0,0,0,0,0,0,2,0,0,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,2,0,0,0,0,0,0,0,0,0,0,0,0,3,1],
    [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
];

impl Map {
    /// Build a map from explicit rows, validating the invariants the
    /// casters rely on: rectangular shape and a fully sealed boundary
    /// (a ray may then walk cell-to-cell without a bounds check on
    /// every step — out-of-range reads only happen past a solid hit).
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, MapError> {
        let h = rows.len();
        if h == 0 || rows[0].is_empty() {
            return Err(MapError::Empty);
        }
        let w = rows[0].len();

        let mut cells = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != w {
                return Err(MapError::Ragged(y));
            }
            cells.extend_from_slice(row);
        }

        let map = Self { w, h, cells };
        for y in 0..h {
            for x in 0..w {
                let on_edge = x == 0 || y == 0 || x == w - 1 || y == h - 1;
                if on_edge && !map.is_solid(x as i32, y as i32) {
                    return Err(MapError::OpenBoundary(x, y));
                }
            }
        }
        Ok(map)
    }

    /// The level both binaries run.
    pub fn default_level() -> Result<Self, MapError> {
        let rows: Vec<&[u8]> = DEMO.iter().map(|r| r.as_slice()).collect();
        Self::from_rows(&rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Cell lookup; anything outside the grid reads as a kind-1 wall so
    /// callers never escape the level even on a bad pose.
    #[inline]
    pub fn tile(&self, cx: i32, cy: i32) -> Tile {
        if cx < 0 || cy < 0 || cx >= self.w as i32 || cy >= self.h as i32 {
            return Tile::Wall(1);
        }
        match self.cells[cy as usize * self.w + cx as usize] {
            0 => Tile::Empty,
            kind => Tile::Wall(kind),
        }
    }

    #[inline]
    pub fn is_solid(&self, cx: i32, cy: i32) -> bool {
        self.tile(cx, cy) != Tile::Empty
    }

    /// Longest possible straight-line distance inside the grid.
    pub fn diagonal(&self) -> f32 {
        ((self.w * self.w + self.h * self.h) as f32).sqrt()
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_level_validates() {
        let map = Map::default_level().unwrap();
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 16);
    }

    #[test]
    fn boundary_is_sealed() {
        let map = Map::default_level().unwrap();
        for x in 0..16 {
            assert!(map.is_solid(x, 0));
            assert!(map.is_solid(x, 15));
        }
        for y in 0..16 {
            assert!(map.is_solid(0, y));
            assert!(map.is_solid(15, y));
        }
    }

    #[test]
    fn out_of_bounds_reads_solid() {
        let map = Map::default_level().unwrap();
        assert_eq!(map.tile(-1, 5), Tile::Wall(1));
        assert_eq!(map.tile(5, 99), Tile::Wall(1));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Map::from_rows(&[&[1, 1, 1], &[1, 1], &[1, 1, 1]]).unwrap_err();
        assert_eq!(err, MapError::Ragged(1));
    }

    #[test]
    fn open_boundary_rejected() {
        let err = Map::from_rows(&[&[1, 1, 1], &[1, 0, 0], &[1, 1, 1]]).unwrap_err();
        assert_eq!(err, MapError::OpenBoundary(2, 1));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Map::from_rows(&[]).unwrap_err(), MapError::Empty);
    }
}
