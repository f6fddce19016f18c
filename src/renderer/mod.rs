//! Per-column frame tracer.
//!
//! One [`Renderer`] owns one casting backend and turns a game state
//! into a full framebuffer: for every column it asks the backend for a
//! [`RayHit`], maps the distance to a wall-slice height and fills the
//! column top to bottom — ceiling, wall, floor. Every pixel is written
//! on every call, so the caller may reuse an uncleared buffer.
//!
//! The tracer is synchronous and side-effect free apart from the buffer
//! it is handed; it keeps no reference to it between calls.

use crate::caster::{RayCaster, RayHit, Side};
use crate::game::Game;
use crate::screen::{self, rgb};

mod font;

/*──────────────────────────── palette ────────────────────────────────*/

const CEILING: u32 = rgb(0x28, 0x2C, 0x38);
const FLOOR: u32 = rgb(0x30, 0x28, 0x20);

/// Wall colors by cell palette index 1..=3.
const WALLS: [u32; 3] = [
    rgb(0xB0, 0x40, 0x38), // brick
    rgb(0x38, 0x90, 0x48), // moss
    rgb(0x40, 0x58, 0xB8), // slate
];

/// Darkened variant for Y-side hits: halve each channel.
#[inline(always)]
fn shade(color: u32) -> u32 {
    0xFF00_0000 | ((color & 0x00FE_FEFE) >> 1)
}

/*──────────────────────────── renderer ───────────────────────────────*/

pub struct Renderer {
    caster: Box<dyn RayCaster>,
}

impl Renderer {
    pub fn new(caster: Box<dyn RayCaster>) -> Self {
        Self { caster }
    }

    pub fn label(&self) -> &'static str {
        self.caster.label()
    }

    /// Trace one complete frame into `fb`.
    ///
    /// `fb` must be exactly [`screen::PIXELS`] long; anything else is a
    /// caller bug. Identical input state produces identical output,
    /// byte for byte.
    pub fn trace_frame(&self, game: &Game, fb: &mut [u32]) {
        assert_eq!(fb.len(), screen::PIXELS, "framebuffer length mismatch");

        for column in 0..screen::WIDTH {
            let hit = self.caster.cast(game.pose(), game.map(), column);
            Self::fill_column(fb, column, &hit);
        }
    }

    /// Ceiling / wall slice / floor for one column. The slice height is
    /// inversely proportional to the hit distance and clipped to the
    /// screen; a void hit degenerates to backdrop only.
    fn fill_column(fb: &mut [u32], column: usize, hit: &RayHit) {
        let mid = screen::HEIGHT / 2;
        let half = if hit.tile == 0 {
            0
        } else {
            ((mid as f32 / hit.distance) as usize).min(mid)
        };

        let color = match hit.tile {
            0 => CEILING, // unused: empty slice
            kind => {
                let base = WALLS[(kind as usize - 1) % WALLS.len()];
                if hit.side == Side::Y { shade(base) } else { base }
            }
        };

        let top = mid - half;
        let bottom = mid + half;
        for y in 0..top {
            fb[y * screen::WIDTH + column] = CEILING;
        }
        for y in top..bottom {
            fb[y * screen::WIDTH + column] = color;
        }
        for y in bottom..screen::HEIGHT {
            fb[y * screen::WIDTH + column] = FLOOR;
        }
    }
}

/*────────────────────────── FPS overlay ──────────────────────────────*/

const FPS_MARGIN: usize = 2;
const FPS_DIGITS: usize = 3;

/// Overlay `value` (clamped to 999) as white-on-black digits in the
/// top-left corner. Touches only that corner region; call it after
/// [`Renderer::trace_frame`] has filled the rest of the buffer.
pub fn draw_fps(fb: &mut [u32], value: u32) {
    assert_eq!(fb.len(), screen::PIXELS, "framebuffer length mismatch");

    let value = value.min(999);
    // Fixed-width, right-aligned, blank-padded: 0 renders as "  0".
    let mut digits = [None::<usize>; FPS_DIGITS];
    let mut rest = value;
    for slot in (0..FPS_DIGITS).rev() {
        digits[slot] = Some((rest % 10) as usize);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    for (slot, digit) in digits.iter().enumerate() {
        let x0 = FPS_MARGIN + slot * (font::GLYPH_W + 1);
        for row in 0..font::GLYPH_H {
            let bits = digit.map_or(0, |d| font::DIGITS[d][row]);
            for bit in 0..font::GLYPH_W {
                let on = bits & (0x80 >> bit) != 0;
                let px = (FPS_MARGIN + row) * screen::WIDTH + x0 + bit;
                fb[px] = if on { rgb(0xFF, 0xFF, 0xFF) } else { rgb(0, 0, 0) };
            }
        }
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::caster::{FixedCaster, FloatCaster};

    const SENTINEL: u32 = 0xDEAD_BEEF;

    fn traced(renderer: &Renderer) -> Vec<u32> {
        let game = Game::new().unwrap();
        let mut fb = vec![SENTINEL; screen::PIXELS];
        renderer.trace_frame(&game, &mut fb);
        fb
    }

    #[test]
    fn every_pixel_is_overwritten() {
        for renderer in [
            Renderer::new(Box::new(FloatCaster::new())),
            Renderer::new(Box::new(FixedCaster::new())),
        ] {
            let fb = traced(&renderer);
            assert!(
                !fb.contains(&SENTINEL),
                "{} left stale pixels",
                renderer.label()
            );
        }
    }

    #[test]
    fn repeat_trace_is_byte_identical() {
        let renderer = Renderer::new(Box::new(FixedCaster::new()));
        let game = Game::new().unwrap();
        let mut a = vec![0u32; screen::PIXELS];
        let mut b = vec![SENTINEL; screen::PIXELS];
        renderer.trace_frame(&game, &mut a);
        renderer.trace_frame(&game, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn column_spans_ceiling_wall_floor() {
        let renderer = Renderer::new(Box::new(FloatCaster::new()));
        let fb = traced(&renderer);
        let col = screen::WIDTH / 2;
        assert_eq!(fb[col], CEILING); // top row
        assert_eq!(fb[(screen::HEIGHT - 1) * screen::WIDTH + col], FLOOR);
        // Middle row is always wall or backdrop, never uninitialized.
        let mid_px = (screen::HEIGHT / 2) * screen::WIDTH + col;
        assert_ne!(fb[mid_px], SENTINEL);
    }

    #[test]
    fn fps_overlay_touches_only_its_corner() {
        let mut fb = vec![SENTINEL; screen::PIXELS];
        draw_fps(&mut fb, 57);
        let region_w = FPS_MARGIN + FPS_DIGITS * (font::GLYPH_W + 1);
        let region_h = FPS_MARGIN + font::GLYPH_H;
        for y in 0..screen::HEIGHT {
            for x in 0..screen::WIDTH {
                let inside = x < region_w && y < region_h;
                if !inside {
                    assert_eq!(fb[y * screen::WIDTH + x], SENTINEL, "({x},{y})");
                }
            }
        }
    }

    #[test]
    fn fps_zero_renders_a_zero_glyph() {
        let mut fb = vec![0u32; screen::PIXELS];
        draw_fps(&mut fb, 0);
        // The last digit slot must contain lit pixels (the 0 glyph).
        let x0 = FPS_MARGIN + (FPS_DIGITS - 1) * (font::GLYPH_W + 1);
        let lit = (0..font::GLYPH_H)
            .flat_map(|r| (0..font::GLYPH_W).map(move |c| (r, c)))
            .any(|(r, c)| fb[(FPS_MARGIN + r) * screen::WIDTH + x0 + c] == rgb(0xFF, 0xFF, 0xFF));
        assert!(lit);
    }

    #[test]
    fn fps_value_is_clamped_not_panicking() {
        let mut fb = vec![0u32; screen::PIXELS];
        draw_fps(&mut fb, u32::MAX);
    }
}
