use chrono::{DateTime, Utc};

use crate::position::Position;

#[derive(Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub position: Position,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl TrackPoint {
    pub fn new(position: Position, name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        TrackPoint {
            position,
            name: name.into(),
            timestamp,
        }
    }
}
