//! Headless backend comparison.
//!
//! Traces the same scripted camera sweep through the demo level with
//! both backends, no window involved, and reports average frame time
//! plus the worst per-column distance divergence observed.
//!
//! ```bash
//! cargo run --release --bin bench -- --frames 1000
//! ```

use anyhow::Result;
use clap::Parser;
use std::time::{Duration, Instant};

use raydual::{
    caster::{FixedCaster, FloatCaster, RayCaster},
    game::Game,
    renderer::Renderer,
    screen,
};

#[derive(Parser)]
#[command(about = "Trace frames with both raycaster backends and report timing + drift")]
struct Opts {
    /// Frames to trace per backend
    #[arg(long, default_value_t = 240)]
    frames: usize,
    /// Also print the worst column of every frame
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut game = Game::new()?;
    let fixed_view = Renderer::new(Box::new(FixedCaster::new()));
    let float_view = Renderer::new(Box::new(FloatCaster::new()));
    // Separate probe instances for the divergence sweep; casters are
    // cheap to duplicate since each owns its tables outright.
    let fixed_probe = FixedCaster::new();
    let float_probe = FloatCaster::new();

    let mut fixed_fb = vec![0u32; screen::PIXELS];
    let mut float_fb = vec![0u32; screen::PIXELS];

    let mut fixed_time = Duration::ZERO;
    let mut float_time = Duration::ZERO;
    let mut worst = 0.0f32;
    let mut worst_at = (0usize, 0usize); // (frame, column)

    for frame in 0..opts.frames {
        // Scripted sweep: keep turning, drive forward and back in
        // alternating bursts so the poses cover the level.
        let move_dir = if frame % 64 < 32 { 1 } else { -1 };
        game.update(move_dir, 1, 4);

        let t0 = Instant::now();
        fixed_view.trace_frame(&game, &mut fixed_fb);
        fixed_time += t0.elapsed();

        let t1 = Instant::now();
        float_view.trace_frame(&game, &mut float_fb);
        float_time += t1.elapsed();

        let mut frame_worst = 0.0f32;
        let mut frame_col = 0usize;
        for column in 0..screen::WIDTH {
            let a = fixed_probe.cast(game.pose(), game.map(), column).distance;
            let b = float_probe.cast(game.pose(), game.map(), column).distance;
            let diff = (a - b).abs();
            if diff > frame_worst {
                frame_worst = diff;
                frame_col = column;
            }
        }
        if frame_worst > worst {
            worst = frame_worst;
            worst_at = (frame, frame_col);
        }
        if opts.verbose {
            println!(
                "frame {frame:4}: worst column {frame_col:3}, drift {frame_worst:.4}"
            );
        }
    }

    let per_frame = |total: Duration| total.as_secs_f64() * 1000.0 / opts.frames as f64;
    println!("frames     : {}", opts.frames);
    println!("fixed-point: {:.3} ms/frame", per_frame(fixed_time));
    println!("float      : {:.3} ms/frame", per_frame(float_time));
    println!(
        "max drift  : {worst:.4} map units (frame {}, column {})",
        worst_at.0, worst_at.1
    );
    Ok(())
}
