use serde::{Deserialize, Serialize};

/// A geographic point. The core only ever sees resolved coordinates — free-text address
/// resolution happens in the (out-of-scope) geocoding collaborator before the engine is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Coordinate { lat, lon }
    }

    /// Whether this coordinate falls within the valid lat/lon ranges.
    ///
    /// The core presumes valid coordinates (§7); this is provided so the boundary collaborator
    /// has something concrete to call, and so tests can assert the invariant directly.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}
