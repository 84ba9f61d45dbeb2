//! A synthetic 5x5 world of named points, used to build deterministic
//! tracks for testing the analysis.

pub mod model;
pub mod track;

pub use model::{Model, PointName, DEFAULT_MODEL};
pub use track::Track;
