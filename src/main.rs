//! Dual-view shell: fixed-point view on the left, floating-point on
//! the right, one window, one shared game state.
//!
//! ```bash
//! cargo run --release            # arrows move/turn, Esc quits
//! cargo run --release -- --scale 4
//! ```
//!
//! All I/O lives here. The core is driven strictly once per frame:
//! trace both views, overlay the FPS readout, present, then feed the
//! elapsed time back into the game state.

use anyhow::bail;
use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use std::time::{Duration, Instant};

use raydual::{
    caster::{FixedCaster, FloatCaster},
    game::{Game, TICKS_PER_SEC},
    renderer::{Renderer, draw_fps},
    screen,
};

/// Blank strip between the two views.
const GAP: usize = 1;
/// Frames per FPS-readout refresh.
const FPS_WINDOW: usize = 32;

#[derive(Parser)]
#[command(about = "Side-by-side fixed-point vs. floating-point raycaster")]
struct Opts {
    /// Window magnification: 1, 2 or 4
    #[arg(long, default_value_t = screen::SCALE)]
    scale: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let scale = match opts.scale {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        s => bail!("unsupported --scale {s} (use 1, 2 or 4)"),
    };

    let mut game = Game::new()?;
    let fixed_view = Renderer::new(Box::new(FixedCaster::new()));
    let float_view = Renderer::new(Box::new(FloatCaster::new()));

    let mut fixed_fb = vec![0u32; screen::PIXELS];
    let mut float_fb = vec![0u32; screen::PIXELS];

    let win_w = screen::WIDTH * 2 + GAP;
    let mut composite = vec![0u32; win_w * screen::HEIGHT];

    let mut window = Window::new(
        "raydual [fixed-point | floating-point]",
        win_w,
        screen::HEIGHT,
        WindowOptions {
            scale,
            ..WindowOptions::default()
        },
    )?;
    // Uncapped: the FPS readout is the point of the exercise.
    window.set_target_fps(0);

    let mut last = Instant::now();
    let mut frame_acc = Duration::ZERO;
    let mut frame_count = 0usize;
    let mut display_fps = 0u32;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let move_dir = match (window.is_key_down(Key::Up), window.is_key_down(Key::Down)) {
            (true, false) => 1,
            (false, true) => -1,
            _ => 0,
        };
        let rot_dir = match (window.is_key_down(Key::Left), window.is_key_down(Key::Right)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };

        fixed_view.trace_frame(&game, &mut fixed_fb);
        float_view.trace_frame(&game, &mut float_fb);
        draw_fps(&mut fixed_fb, display_fps);
        draw_fps(&mut float_fb, display_fps);

        blit(&mut composite, win_w, &fixed_fb, 0);
        blit(&mut composite, win_w, &float_fb, screen::WIDTH + GAP);
        window.update_with_buffer(&composite, win_w, screen::HEIGHT)?;

        let elapsed = last.elapsed();
        last = Instant::now();

        frame_acc += elapsed;
        frame_count += 1;
        if frame_count >= FPS_WINDOW {
            display_fps = (frame_count as f64 / frame_acc.as_secs_f64()).round() as u32;
            frame_acc = Duration::ZERO;
            frame_count = 0;
        }

        let ticks = (elapsed.as_secs_f64() * TICKS_PER_SEC as f64) as u32;
        game.update(move_dir, rot_dir, ticks);
    }
    Ok(())
}

/// Copy one view into the composite window buffer at column `dx`.
fn blit(dst: &mut [u32], dst_w: usize, src: &[u32], dx: usize) {
    for y in 0..screen::HEIGHT {
        let d = y * dst_w + dx;
        let s = y * screen::WIDTH;
        dst[d..d + screen::WIDTH].copy_from_slice(&src[s..s + screen::WIDTH]);
    }
}
