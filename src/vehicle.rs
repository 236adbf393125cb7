use serde::Serialize;
use std::fmt;

/// Vehicle type and, for trucks, the dimensions that feed truck-legality gating (§4.4).
///
/// Height/weight are only meaningful for `Truck`; a `Car`/`Motorcycle` never carries them, so
/// there is nothing downstream to accidentally read stale dimensions off a non-truck vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehicleProfile {
    Car,
    Motorcycle,
    Truck {
        /// meters, expected in [0, 10]
        height_m: Option<f64>,
        /// tonnes, expected in [0, 100]
        weight_t: Option<f64>,
    },
}

impl VehicleProfile {
    pub fn is_truck(&self) -> bool {
        matches!(self, VehicleProfile::Truck { .. })
    }
}

impl fmt::Display for VehicleProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VehicleProfile::Car => write!(f, "car"),
            VehicleProfile::Motorcycle => write!(f, "motorcycle"),
            VehicleProfile::Truck { .. } => write!(f, "truck"),
        }
    }
}

/// One of the four optimization objectives a route can be computed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Fastest,
    BestSurface,
    Safest,
    TruckCompatible,
}

impl Criterion {
    /// Canonical response order (§4.6): fastest, best_surface, safest, truck_compatible.
    pub const CANONICAL_ORDER: [Criterion; 4] = [
        Criterion::Fastest,
        Criterion::BestSurface,
        Criterion::Safest,
        Criterion::TruckCompatible,
    ];

    /// The criteria to compute for a given vehicle: the default three, plus truck_compatible
    /// iff the vehicle is a truck (§4.6).
    pub fn default_set_for(vehicle: &VehicleProfile) -> Vec<Criterion> {
        let mut criteria = vec![Criterion::Fastest, Criterion::BestSurface, Criterion::Safest];
        if vehicle.is_truck() {
            criteria.push(Criterion::TruckCompatible);
        }
        criteria
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Fastest => "fastest",
            Criterion::BestSurface => "best_surface",
            Criterion::Safest => "safest",
            Criterion::TruckCompatible => "truck_compatible",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Criterion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
