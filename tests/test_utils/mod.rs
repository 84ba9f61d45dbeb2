#![allow(dead_code)]

use trackstats_core::gridworld::{Model, Track, DEFAULT_MODEL};
use trackstats_core::position::{Metres, PONTIANAK};
use trackstats_core::{TrackAnalyzer, TrackPoint};

pub fn track_points(encoding: &str) -> Vec<TrackPoint> {
    track_points_with_model(encoding, &DEFAULT_MODEL)
}

pub fn track_points_with_model(encoding: &str, model: &Model) -> Vec<TrackPoint> {
    Track::new(encoding, model).unwrap().to_track_points()
}

pub fn analyze(encoding: &str, resting_range: Metres) -> TrackAnalyzer {
    TrackAnalyzer::new(track_points(encoding), resting_range).unwrap()
}

// Same grid as the default one, but 1km between neighbouring points.
pub fn small_model() -> Model {
    let grid_unit = 1000.;
    Model::new(PONTIANAK, grid_unit, grid_unit, grid_unit)
}

pub fn seconds(duration: chrono::TimeDelta) -> i64 {
    duration.num_seconds()
}
