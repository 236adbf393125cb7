use std::{
    fmt,
    fmt::Display,
    ops::{Deref, DerefMut},
};

#[derive(Debug, Default, Clone, Copy, PartialOrd, PartialEq)]
pub struct KilometersPerHour(pub f64);

impl Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;

    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for KilometersPerHour {
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

/// mph -> km/h, per the OSM `maxspeed` convention of a trailing unit suffix.
pub const MPH_TO_KMH: f64 = 1.60934;
