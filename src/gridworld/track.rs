use chrono::{DateTime, TimeDelta, Utc};

use crate::error::TrackError;
use crate::gridworld::model::{Model, PointName};
use crate::position::Position;
use crate::track_point::TrackPoint;

// Tracks longer than this (either way) are rejected so timestamps stay
// well inside the range chrono can represent.
const MAX_TRACK_SPAN_IN_DAYS: i64 = 100 * 366;

// One stop of a grid track, with its time offset from the start.
#[derive(Clone, Debug, PartialEq)]
struct Leg {
    point_name: PointName,
    position: Position,
    offset: TimeDelta,
}

/// A track through the grid world, written as a compact string such as
/// `"A3F3G1L5M"`: grid letters separated by the number of seconds elapsed
/// between them. Elapsed times may be negative.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    legs: Vec<Leg>,
    start_time: DateTime<Utc>,
}

impl Track {
    pub fn new(encoding: &str, model: &Model) -> Result<Self, TrackError> {
        let max_span = TimeDelta::days(MAX_TRACK_SPAN_IN_DAYS);
        let mut offset = TimeDelta::zero();
        let mut legs = Vec::new();
        for (point_name, elapsed) in Parser::new(encoding).parse()? {
            offset = offset
                .checked_add(&elapsed)
                .filter(|offset| offset.abs() <= max_span)
                .ok_or_else(|| TrackError::MalformedEncoding {
                    encoding: encoding.to_owned(),
                    position: encoding.len(),
                    reason: format!("track spans more than {MAX_TRACK_SPAN_IN_DAYS} days"),
                })?;
            legs.push(Leg {
                point_name,
                position: model.position(point_name)?,
                offset,
            });
        }
        Ok(Track {
            legs,
            start_time: DateTime::<Utc>::UNIX_EPOCH,
        })
    }

    /// Fails if any point of the track would fall outside the range of
    /// `DateTime<Utc>` when the track starts at `start_time`.
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Result<Self, TrackError> {
        if self
            .legs
            .iter()
            .any(|leg| start_time.checked_add_signed(leg.offset).is_none())
        {
            return Err(TrackError::StartTimeOutOfRange { start_time });
        }
        self.start_time = start_time;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn to_track_points(&self) -> Vec<TrackPoint> {
        self.legs
            .iter()
            .map(|leg| {
                TrackPoint::new(
                    leg.position,
                    Model::point_to_string(leg.point_name),
                    // In range: checked by `with_start_time`, and the epoch
                    // default is far from both ends.
                    self.start_time + leg.offset,
                )
            })
            .collect()
    }
}

struct Parser<'a> {
    encoding: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(encoding: &'a str) -> Self {
        Parser {
            encoding,
            position: 0,
        }
    }

    // Letter (SignedInteger Letter)*
    fn parse(mut self) -> Result<Vec<(PointName, TimeDelta)>, TrackError> {
        if self.encoding.is_empty() {
            return Err(self.error("empty track"));
        }
        let mut legs = vec![(self.point_name()?, TimeDelta::zero())];
        while self.position < self.encoding.len() {
            let elapsed = self.elapsed()?;
            legs.push((self.point_name()?, elapsed));
        }
        Ok(legs)
    }

    fn point_name(&mut self) -> Result<PointName, TrackError> {
        match self.peek() {
            Some(c) if Model::is_valid_point_name(c) => {
                self.position += c.len_utf8();
                Ok(c)
            }
            Some(c) => Err(self.error(&format!("expected a grid letter A-Y, found {c:?}"))),
            None => Err(self.error("expected a grid letter A-Y, found end of track")),
        }
    }

    fn elapsed(&mut self) -> Result<TimeDelta, TrackError> {
        let start = self.position;
        if self.peek() == Some('-') {
            self.position += 1;
        }
        let digits_start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.position += 1;
        }
        if self.position == digits_start {
            self.position = start;
            return Err(self.error("expected the number of seconds since the previous point"));
        }

        let text = &self.encoding[start..self.position];
        let seconds = text.parse::<i64>().ok().and_then(TimeDelta::try_seconds);
        match seconds {
            Some(seconds) => Ok(seconds),
            None => {
                self.position = start;
                Err(self.error(&format!("{text} seconds is out of range")))
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.encoding[self.position..].chars().next()
    }

    fn error(&self, reason: &str) -> TrackError {
        TrackError::MalformedEncoding {
            encoding: self.encoding.to_owned(),
            position: self.position,
            reason: reason.to_owned(),
        }
    }
}
