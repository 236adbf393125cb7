//! Pure string -> typed-value normalization for raw OSM tag strings (§4.1).
//!
//! No I/O, no failure propagation: malformed input yields `None`, which downstream components
//! treat as "absent" and resolve via the `default` entry of the relevant weight table.

/// Parses an OSM `maxspeed` tag ("50", "50 mph", "50km/h", ...) into whole km/h.
pub fn parse_maxspeed(value: &str) -> Option<u32> {
    let first_token = value.split_whitespace().next()?;
    let speed: f64 = first_token.parse().ok()?;

    let speed = if value.to_lowercase().contains("mph") {
        speed * crate::units::speed::MPH_TO_KMH
    } else {
        speed
    };

    Some(speed as u32)
}

/// Parses an OSM `maxheight`/`maxweight`-style tag ("4.2", "4.2m", "4.2 m") into a bare float.
pub fn parse_metric(value: &str) -> Option<f64> {
    let cleaned = value.replace('m', "").replace('t', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parses a bare integer tag ("1", "2"); absence/failure is `None`.
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// OSM's `oneway` tag is only ever "forward" under the literal value `"yes"` for this engine's
/// purposes — every other value (or absence) means bidirectional.
pub fn parse_oneway(value: Option<&str>) -> bool {
    value == Some("yes")
}
