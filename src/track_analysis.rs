use chrono::TimeDelta;
use itertools::Itertools;
use strum_macros::{Display, EnumIter};

use crate::error::TrackError;
use crate::position::Metres;
use crate::track_point::TrackPoint;

#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum SegmentKind {
    Resting,
    Travelling,
}

/// Two adjacent points of a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment<'a> {
    /// Index of the segment, which is also the index of its first point.
    pub index: usize,
    pub start: &'a TrackPoint,
    pub end: &'a TrackPoint,
    pub distance: Metres,
    /// May be negative if the timestamps are out of order.
    pub elapsed: TimeDelta,
    pub kind: SegmentKind,
}

/// A maximal run of adjacent travelling segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TravellingPeriod {
    pub first_segment: usize,
    pub num_of_segments: usize,
    pub duration: TimeDelta,
}

impl TravellingPeriod {
    fn open(segment: &Segment) -> Self {
        TravellingPeriod {
            first_segment: segment.index,
            num_of_segments: 1,
            duration: segment.elapsed,
        }
    }

    fn extend(&mut self, segment: &Segment) {
        self.num_of_segments += 1;
        self.duration += segment.elapsed;
    }
}

enum ScanState {
    NotInPeriod,
    InPeriod(TravellingPeriod),
}

#[derive(Clone, Debug)]
pub struct TrackAnalyzer {
    track_points: Vec<TrackPoint>,
    resting_range: Metres,
}

impl TrackAnalyzer {
    /// Segments no longer than `resting_range` (horizontally) are rests.
    pub fn new(track_points: Vec<TrackPoint>, resting_range: Metres) -> Result<Self, TrackError> {
        if resting_range.is_nan() || resting_range < 0. {
            return Err(TrackError::InvalidRestingRange(resting_range));
        }
        Ok(TrackAnalyzer {
            track_points,
            resting_range,
        })
    }

    pub fn track_points(&self) -> &[TrackPoint] {
        &self.track_points
    }

    pub fn resting_range(&self) -> Metres {
        self.resting_range
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.track_points
            .iter()
            .tuple_windows()
            .enumerate()
            .map(|(index, (start, end))| {
                let distance = start.position.horizontal_distance(&end.position);
                let kind = if distance <= self.resting_range {
                    SegmentKind::Resting
                } else {
                    SegmentKind::Travelling
                };
                Segment {
                    index,
                    start,
                    end,
                    distance,
                    elapsed: end.timestamp - start.timestamp,
                    kind,
                }
            })
    }

    /// Sum of the time elapsed over every segment, rests included.
    pub fn total_time(&self) -> TimeDelta {
        self.segments()
            .fold(TimeDelta::zero(), |total, segment| total + segment.elapsed)
    }

    /// Negative time while resting is tolerated, but a travelling segment
    /// with negative elapsed time fails the whole scan.
    pub fn travelling_periods(&self) -> Result<Vec<TravellingPeriod>, TrackError> {
        let mut periods = Vec::new();
        let mut state = ScanState::NotInPeriod;

        for segment in self.segments() {
            state = match (state, segment.kind) {
                (ScanState::NotInPeriod, SegmentKind::Resting) => {
                    check_resting_time(&segment);
                    ScanState::NotInPeriod
                }
                (ScanState::InPeriod(period), SegmentKind::Resting) => {
                    check_resting_time(&segment);
                    debug!("travelling period closed: {period:?}");
                    periods.push(period);
                    ScanState::NotInPeriod
                }
                (ScanState::NotInPeriod, SegmentKind::Travelling) => {
                    check_travelling_time(&segment)?;
                    ScanState::InPeriod(TravellingPeriod::open(&segment))
                }
                (ScanState::InPeriod(mut period), SegmentKind::Travelling) => {
                    check_travelling_time(&segment)?;
                    period.extend(&segment);
                    ScanState::InPeriod(period)
                }
            };
        }
        if let ScanState::InPeriod(period) = state {
            debug!("travelling period closed at the end of the track: {period:?}");
            periods.push(period);
        }
        Ok(periods)
    }

    /// Mean duration of the travelling periods, in whole seconds rounded
    /// toward zero.
    pub fn average_travelling_period(&self) -> Result<TimeDelta, TrackError> {
        let periods = self.travelling_periods()?;
        if periods.is_empty() {
            return Err(TrackError::NoTravellingPeriod);
        }
        // Rests may go back in time, so the periods together can span more
        // than the track itself.
        let total = periods
            .iter()
            .try_fold(TimeDelta::zero(), |total, period| {
                total.checked_add(&period.duration)
            })
            .ok_or(TrackError::TravellingTimeOverflow {
                num_of_periods: periods.len(),
            })?;
        let average = TimeDelta::seconds(total.num_seconds() / periods.len() as i64);
        debug!(
            "average travelling period: {}s over {} periods",
            average.num_seconds(),
            periods.len()
        );
        Ok(average)
    }
}

fn log_negative_time(segment: &Segment) -> bool {
    let negative = segment.elapsed < TimeDelta::zero();
    if negative {
        let message = format!(
            "negative {} time {}s at segment {}",
            segment.kind,
            segment.elapsed.num_seconds(),
            segment.index
        );
        match segment.kind {
            SegmentKind::Resting => debug!("{message}"),
            SegmentKind::Travelling => warn!("{message}"),
        }
    }
    negative
}

// Clock artifacts while standing still are tolerated.
fn check_resting_time(segment: &Segment) {
    log_negative_time(segment);
}

fn check_travelling_time(segment: &Segment) -> Result<(), TrackError> {
    if log_negative_time(segment) {
        return Err(TrackError::NegativeTravellingDuration {
            segment_index: segment.index,
            elapsed_seconds: segment.elapsed.num_seconds(),
        });
    }
    Ok(())
}
