//! Side-by-side raycaster: one grid map, two numeric backends.
//!
//! The same DDA projection is implemented twice — once in native `f32`
//! ([`caster::FloatCaster`]) and once in Q16.16 fixed point
//! ([`caster::FixedCaster`]) — behind a common [`caster::RayCaster`]
//! trait. The shell traces both every frame into separate framebuffers
//! so any numeric drift between the two is directly visible on screen.

pub mod caster;
pub mod game;
pub mod renderer;
pub mod screen;
pub mod world;
