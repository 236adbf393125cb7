//! Static, process-lifetime, read-only lookup tables (§4.2, §6.4).
//!
//! Every entry is a positive real; lower means "preferred". Nothing here is ever mutated after
//! startup, so these are plain functions over `&str` rather than a lazily-built map.

use crate::vehicle::Criterion;

/// `HIGHWAY_WEIGHTS`: highway-class weight, default 2.5 for unknown classes.
pub fn highway_weight(highway_class: &str) -> f64 {
    match highway_class {
        "motorway" => 1.0,
        "motorway_link" => 1.1,
        "trunk" => 1.2,
        "trunk_link" => 1.3,
        "primary" => 1.4,
        "primary_link" => 1.5,
        "secondary" => 1.6,
        "secondary_link" => 1.7,
        "tertiary" => 1.8,
        "tertiary_link" => 1.9,
        "unclassified" => 2.0,
        "residential" => 2.1,
        "living_street" => 2.5,
        "service" => 3.0,
        "track" => 5.0,
        "path" => 10.0,
        "footway" => 15.0,
        _ => 2.5,
    }
}

/// `SURFACE_WEIGHTS`: surface-quality weight, default 2.0 for unknown/absent surfaces.
pub fn surface_weight(surface: &str) -> f64 {
    match surface {
        "asphalt" | "concrete" => 1.0,
        "paved" => 1.1,
        "concrete:plates" => 1.3,
        "paving_stones" => 1.4,
        "compacted" => 2.0,
        "fine_gravel" => 2.2,
        "gravel" => 3.0,
        "unpaved" => 3.5,
        "dirt" => 4.0,
        "ground" => 4.5,
        "grass" => 5.0,
        "sand" => 6.0,
        "mud" => 8.0,
        _ => 2.0,
    }
}

/// `SMOOTHNESS_WEIGHTS`: road-smoothness weight, default 1.5 for unknown/absent smoothness.
pub fn smoothness_weight(smoothness: &str) -> f64 {
    match smoothness {
        "excellent" => 1.0,
        "good" => 1.2,
        "intermediate" => 1.5,
        "bad" => 3.0,
        "very_bad" => 5.0,
        "horrible" => 8.0,
        "very_horrible" => 10.0,
        "impassable" => 100.0,
        _ => 1.5,
    }
}

/// `TRACKTYPE_WEIGHTS`: supplemented from the original Python implementation (§9A). Captured for
/// forward compatibility; no cost-function branch currently multiplies by it, since §4.4's
/// formula is bit-exact to the distilled spec and does not reference `tracktype`.
#[allow(dead_code)]
pub fn tracktype_weight(tracktype: &str) -> f64 {
    match tracktype {
        "grade1" => 1.5,
        "grade2" => 2.0,
        "grade3" => 3.0,
        "grade4" => 4.5,
        "grade5" => 6.0,
        _ => 2.5,
    }
}

/// `SAFETY_FACTORS.lit`.
pub fn lit_factor(lit: Option<&str>) -> f64 {
    match lit {
        Some("yes") => 0.8,
        Some("no") => 1.3,
        _ => 1.0,
    }
}

/// `SAFETY_FACTORS.traffic_signals`.
pub fn traffic_signals_factor(has_traffic_signals: bool) -> f64 {
    if has_traffic_signals {
        0.9
    } else {
        1.0
    }
}

/// `DEFAULTS.maxspeed`, km/h, used when the tag is absent.
pub const DEFAULT_MAXSPEED_KMH: u32 = 50;

/// Continuous speed-penalty function of maxspeed (km/h): higher speed, higher penalty for
/// safety-conscious routing.
pub fn speed_penalty(maxspeed_kmh: u32) -> f64 {
    match maxspeed_kmh {
        0..=40 => 1.0,
        41..=60 => 1.2,
        61..=80 => 1.5,
        81..=100 => 2.0,
        _ => 3.0,
    }
}

/// The five non-negative multipliers a criterion applies to the base cost components (§6.4).
#[derive(Debug, Clone, Copy)]
pub struct CriterionMultipliers {
    pub distance: f64,
    pub highway_type: f64,
    pub surface: f64,
    pub smoothness: f64,
    pub safety: f64,
}

/// `CRITERIA_MULTIPLIERS`, exact values from §6.4.
pub fn criteria_multipliers(criterion: Criterion) -> CriterionMultipliers {
    match criterion {
        Criterion::Fastest => CriterionMultipliers {
            distance: 1.0,
            highway_type: 0.5,
            surface: 0.1,
            smoothness: 0.1,
            safety: 0.0,
        },
        Criterion::BestSurface => CriterionMultipliers {
            distance: 1.0,
            highway_type: 0.3,
            surface: 2.0,
            smoothness: 2.0,
            safety: 0.1,
        },
        Criterion::Safest => CriterionMultipliers {
            distance: 1.0,
            highway_type: 0.5,
            surface: 0.5,
            smoothness: 0.5,
            safety: 3.0,
        },
        Criterion::TruckCompatible => CriterionMultipliers {
            distance: 1.0,
            highway_type: 1.0,
            surface: 1.5,
            smoothness: 1.0,
            safety: 0.5,
        },
    }
}
