use serde::{Deserialize, Serialize};

pub type Degrees = f64;
pub type Metres = f64;

// Mean radius of the Earth (IUGG).
pub const EARTH_MEAN_RADIUS: Metres = 6_371_008.8;

/// Pontianak, the only city on the equator. Used as the default centre of
/// the grid world.
pub const PONTIANAK: Position = Position {
    latitude: -0.0253,
    longitude: 109.3422,
    elevation: 0.,
};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub elevation: Metres,
}

impl Position {
    pub fn new(latitude: Degrees, longitude: Degrees, elevation: Metres) -> Self {
        Position {
            latitude,
            longitude,
            elevation,
        }
    }

    // Great-circle surface distance, ignoring elevation.
    pub fn horizontal_distance(&self, other: &Position) -> Metres {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = lat2 - lat1;
        let delta_lng = (other.longitude - self.longitude).to_radians();

        let h = (delta_lat / 2.).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lng / 2.).sin().powi(2);
        2. * EARTH_MEAN_RADIUS * h.sqrt().min(1.).asin()
    }
}
