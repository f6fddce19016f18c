mod map;
mod pose;

pub use map::{Map, MapError, Tile};
pub use pose::Pose;
