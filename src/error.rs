use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("cannot find travelling periods in the track")]
    NoTravellingPeriod,

    #[error(
        "negative travelling time ({elapsed_seconds}s) between points {segment_index} and {}",
        .segment_index + 1
    )]
    NegativeTravellingDuration {
        segment_index: usize,
        elapsed_seconds: i64,
    },

    #[error("total travelling time over {num_of_periods} periods is too large to represent")]
    TravellingTimeOverflow { num_of_periods: usize },

    #[error("track starting at {start_time} ends outside the representable time range")]
    StartTimeOutOfRange { start_time: DateTime<Utc> },

    #[error("malformed grid track {encoding:?} at byte {position}: {reason}")]
    MalformedEncoding {
        encoding: String,
        position: usize,
        reason: String,
    },

    #[error("grid point name {0:?} is not in A-Y")]
    OutOfRangePointName(char),

    #[error("resting range must be a non-negative distance, got {0}")]
    InvalidRestingRange(f64),
}
