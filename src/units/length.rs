use crate::coordinate::Coordinate;
use std::{
    fmt,
    fmt::Display,
    ops::{Add, AddAssign, Deref, DerefMut},
};

/// Mean Earth radius used for the haversine formula, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Default, Clone, Copy, PartialOrd, PartialEq)]
pub struct Kilometers(pub f64);

impl Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

impl Deref for Kilometers {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Kilometers {
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Add<Kilometers> for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign<Kilometers> for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

/// Great-circle distance between two coordinates, in kilometers.
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> Kilometers {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Kilometers(EARTH_RADIUS_KM * c)
}
