use crate::error::TrackError;
use crate::position::{Degrees, Metres, Position, EARTH_MEAN_RADIUS, PONTIANAK};

pub type PointName = char;

const GRID_RADIUS: i32 = 2;
const GRID_SIZE: i32 = GRID_RADIUS * 2 + 1;
const NUM_OF_POINTS: usize = (GRID_SIZE * GRID_SIZE) as usize;

pub const FIRST_POINT_NAME: PointName = 'A';
pub const LAST_POINT_NAME: PointName = 'Y';

pub const DEFAULT_HORIZONTAL_GRID_UNIT: Metres = 10000.;
pub const DEFAULT_VERTICAL_GRID_UNIT: Metres = 1000.;

lazy_static! {
    // Centred on Pontianak, 10km between neighbouring points.
    pub static ref DEFAULT_MODEL: Model = Model::default();
}

/*  The grid world is a 5x5 grid of points, each named by a single letter:
 *
 *  A B C D E
 *  F G H I J
 *  K L M N O
 *  P Q R S T
 *  U V W X Y
 *
 *  M is the reference point. Moving up/down changes latitude, moving
 *  left/right changes longitude. Each row is also its own elevation band,
 *  rising by one vertical grid unit per row to the north.
 *  The grid gets more distorted the closer the centre is to a pole.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    center: Position,
    delta_latitude: Degrees,
    delta_longitude: Degrees,
    delta_elevation: Metres,
    grid: [Position; NUM_OF_POINTS],
}

impl Default for Model {
    fn default() -> Self {
        Model::new(
            PONTIANAK,
            DEFAULT_HORIZONTAL_GRID_UNIT,
            DEFAULT_HORIZONTAL_GRID_UNIT,
            DEFAULT_VERTICAL_GRID_UNIT,
        )
    }
}

impl Model {
    pub fn new(
        center: Position,
        north_south_grid_unit: Metres,
        east_west_grid_unit: Metres,
        vertical_grid_unit: Metres,
    ) -> Self {
        let delta_latitude = latitude_delta(north_south_grid_unit);
        let delta_longitude = longitude_delta(center.latitude, east_west_grid_unit);
        let grid = std::array::from_fn(|index| {
            let (row_offset, column_offset) = offsets_from_center(index);
            Position {
                latitude: center.latitude + row_offset as f64 * delta_latitude,
                longitude: center.longitude + column_offset as f64 * delta_longitude,
                elevation: center.elevation + row_offset as f64 * vertical_grid_unit,
            }
        });
        Model {
            center,
            delta_latitude,
            delta_longitude,
            delta_elevation: vertical_grid_unit,
            grid,
        }
    }

    pub fn position(&self, point_name: PointName) -> Result<Position, TrackError> {
        index_of(point_name)
            .map(|index| self.grid[index])
            .ok_or(TrackError::OutOfRangePointName(point_name))
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn delta_latitude(&self) -> Degrees {
        self.delta_latitude
    }

    pub fn delta_longitude(&self) -> Degrees {
        self.delta_longitude
    }

    pub fn delta_elevation(&self) -> Metres {
        self.delta_elevation
    }

    pub fn points(&self) -> impl Iterator<Item = (PointName, Position)> + '_ {
        (FIRST_POINT_NAME..=LAST_POINT_NAME).zip(self.grid.iter().copied())
    }

    pub fn point_to_string(point_name: PointName) -> String {
        point_name.to_string()
    }

    pub fn is_valid_point_name(point_name: PointName) -> bool {
        index_of(point_name).is_some()
    }
}

fn index_of(point_name: PointName) -> Option<usize> {
    if (FIRST_POINT_NAME..=LAST_POINT_NAME).contains(&point_name) {
        Some(point_name as usize - FIRST_POINT_NAME as usize)
    } else {
        None
    }
}

// (north, east) offsets in grid units, so `A` is (2, -2) and `Y` is (-2, 2).
fn offsets_from_center(index: usize) -> (i32, i32) {
    let index = index as i32;
    let row_offset = GRID_RADIUS - index / GRID_SIZE;
    let column_offset = index % GRID_SIZE - GRID_RADIUS;
    (row_offset, column_offset)
}

fn latitude_delta(north_south_grid_unit: Metres) -> Degrees {
    (north_south_grid_unit / EARTH_MEAN_RADIUS).to_degrees()
}

fn longitude_delta(latitude: Degrees, east_west_grid_unit: Metres) -> Degrees {
    let radius_of_latitude = EARTH_MEAN_RADIUS * latitude.to_radians().cos();
    (east_west_grid_unit / radius_of_latitude).to_degrees()
}
