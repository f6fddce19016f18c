//! Constants that depend on the *frame-buffer*, not on the map.
//!
//! The core fills `WIDTH × HEIGHT` buffers of packed `0xFFRRGGBB`
//! pixels — the layout minifb presents — and the shell must upload them
//! with exactly this geometry. `SCALE` only affects the window size.

/// Columns per view.
pub const WIDTH: usize = 320;
/// Rows per view.
pub const HEIGHT: usize = 240;
/// Logical-pixel to window-pixel magnification (shell side only).
pub const SCALE: usize = 2;
/// Buffer length in pixels.
pub const PIXELS: usize = WIDTH * HEIGHT;

/// Pack an opaque RGB triple the way the buffers store it.
#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}
