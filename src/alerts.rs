//! Alert Generator (§4.5): per-edge advisories, plus the dedup/truncation/summary pass §4.6
//! applies to the pooled list for a whole route.

use crate::coordinate::Coordinate;
use crate::network::Edge;
use crate::vehicle::VehicleProfile;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub level: Severity,
    pub message: String,
    pub location: Option<Coordinate>,
}

/// Renders a metric value the way the original's `str(float)` would: Rust's default `Display`
/// drops the trailing `.0` on whole numbers (`4` instead of `4.0`), which the ground-truth
/// message templates in §4.5 don't.
fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Alerts for one non-connector edge, anchored at its terminus coordinate (§4.6 step 5).
pub fn generate_alerts_for_edge(
    edge: &Edge,
    terminus: Coordinate,
    vehicle: &VehicleProfile,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let Some(attrs) = edge.attrs.as_ref() else {
        return alerts;
    };
    let at = |level: Severity, message: String| Alert {
        level,
        message,
        location: Some(terminus),
    };

    if let Some(surface) = attrs.surface.as_deref() {
        if matches!(surface, "unpaved" | "dirt" | "gravel" | "mud") {
            alerts.push(at(Severity::Yellow, format!("Unpaved road: {}", surface)));
        }
        if matches!(surface, "mud" | "sand") {
            alerts.push(at(
                Severity::Red,
                format!("Poor surface condition: {}", surface),
            ));
        }
    }

    if let Some(smoothness) = attrs.smoothness.as_deref() {
        if matches!(smoothness, "bad" | "very_bad") {
            alerts.push(at(Severity::Yellow, format!("Road quality: {}", smoothness)));
        }
        if matches!(smoothness, "horrible" | "very_horrible" | "impassable") {
            alerts.push(at(
                Severity::Red,
                format!("Very poor road quality: {}", smoothness),
            ));
        }
    }

    if attrs.lit.as_deref() == Some("no") {
        alerts.push(at(Severity::Yellow, "No street lighting".to_string()));
    }

    if let Some(maxspeed) = attrs.maxspeed_kmh {
        if maxspeed > 100 {
            alerts.push(at(
                Severity::Yellow,
                format!("High speed road: {} km/h", maxspeed),
            ));
        }
    }

    if let VehicleProfile::Truck { height_m, weight_t } = vehicle {
        if let (Some(maxheight), Some(height)) = (attrs.maxheight_m, *height_m) {
            if height > maxheight {
                alerts.push(at(
                    Severity::Red,
                    format!(
                        "Height restriction: {}m (vehicle: {}m)",
                        format_metric(maxheight),
                        format_metric(height)
                    ),
                ));
            } else if height > 0.9 * maxheight {
                alerts.push(at(
                    Severity::Yellow,
                    format!(
                        "Tight clearance: {}m (vehicle: {}m)",
                        format_metric(maxheight),
                        format_metric(height)
                    ),
                ));
            }
        }

        if let (Some(maxweight), Some(weight)) = (attrs.maxweight_t, *weight_t) {
            if weight > maxweight {
                alerts.push(at(
                    Severity::Red,
                    format!(
                        "Weight restriction: {}t (vehicle: {}t)",
                        format_metric(maxweight),
                        format_metric(weight)
                    ),
                ));
            } else if weight > 0.9 * maxweight {
                alerts.push(at(
                    Severity::Yellow,
                    format!(
                        "Near weight limit: {}t (vehicle: {}t)",
                        format_metric(maxweight),
                        format_metric(weight)
                    ),
                ));
            }
        }

        if let Some(hgv) = attrs.hgv.as_deref() {
            if hgv == "no" {
                alerts.push(at(
                    Severity::Red,
                    "Trucks not allowed (HGV restriction)".to_string(),
                ));
            } else if hgv == "destination" {
                alerts.push(at(
                    Severity::Yellow,
                    "Destination traffic only for trucks".to_string(),
                ));
            }
        }

        if let Some(access) = attrs.access.as_deref() {
            if matches!(access, "private" | "no") {
                alerts.push(at(Severity::Red, format!("Access restricted: {}", access)));
            } else if matches!(access, "delivery" | "destination") {
                alerts.push(at(Severity::Yellow, format!("Limited access: {}", access)));
            }
        }
    }

    alerts
}

/// Deduplicates a route's pooled alert list (§4.6 step 6) and produces the summary string
/// (§4.6 step 7), both computed from the *pre-truncation* severity counts.
pub fn deduplicate_and_summarize(mut alerts: Vec<Alert>) -> (Vec<Alert>, String) {
    alerts.sort_by_key(|a| a.level);

    let mut seen = std::collections::HashSet::new();
    let mut deduped = Vec::new();
    for alert in alerts {
        if seen.insert(alert.message.clone()) {
            deduped.push(alert);
        }
    }

    let red_count = deduped.iter().filter(|a| a.level == Severity::Red).count();
    let yellow_count = deduped.iter().filter(|a| a.level == Severity::Yellow).count();

    deduped.truncate(10);

    let summary = if red_count == 0 && yellow_count == 0 {
        "Route is clear with no warnings".to_string()
    } else {
        let mut parts = Vec::new();
        if red_count > 0 {
            parts.push(format!("{} critical alert(s)", red_count));
        }
        if yellow_count > 0 {
            parts.push(format!("{} caution(s)", yellow_count));
        }
        parts.join(", ")
    };

    (deduped, summary)
}
