#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate lazy_static;

pub mod config;
pub mod error;
pub mod gridworld;
pub mod logs;
pub mod position;
pub mod track_analysis;
pub mod track_point;

pub use error::TrackError;
pub use position::Position;
pub use track_analysis::{SegmentKind, TrackAnalyzer};
pub use track_point::TrackPoint;
