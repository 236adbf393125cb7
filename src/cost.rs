//! Cost Function (§4.4): maps an edge, a criterion, and an optional vehicle to a scalar weight,
//! or the blocked sentinel for truck-illegal edges.

use crate::network::Edge;
use crate::vehicle::{Criterion, VehicleProfile};
use crate::weights::{self, criteria_multipliers, CriterionMultipliers};

/// Returns the scalar weight for `edge` under `criterion`, or `f64::INFINITY` if the edge is
/// blocked (only possible for `Criterion::TruckCompatible` with a truck vehicle).
pub fn cost(edge: &Edge, criterion: Criterion, vehicle: Option<&VehicleProfile>) -> f64 {
    // Connector short-circuit: always traversable, weight is just the connector's length (§4.4).
    if edge.is_connector {
        return edge.length_km;
    }

    let attrs = edge
        .attrs
        .as_ref()
        .expect("non-connector edge must carry normalized attributes");
    let m: CriterionMultipliers = criteria_multipliers(criterion);

    let h_excess = weights::highway_weight(&attrs.highway_class) - 1.0;
    let surf_excess = attrs
        .surface
        .as_deref()
        .map(|s| weights::surface_weight(s) - 1.0)
        .unwrap_or(0.0);
    let smooth_excess = attrs
        .smoothness
        .as_deref()
        .map(|s| weights::smoothness_weight(s) - 1.0)
        .unwrap_or(0.0);

    let maxspeed = attrs.maxspeed_kmh.unwrap_or(weights::DEFAULT_MAXSPEED_KMH);
    let safety_factor = weights::lit_factor(attrs.lit.as_deref())
        * weights::traffic_signals_factor(attrs.traffic_signals)
        * weights::speed_penalty(maxspeed);
    let safety_excess = safety_factor - 1.0;

    let mut total = edge.length_km
        * m.distance
        * (1.0 + h_excess * m.highway_type)
        * (1.0 + surf_excess * m.surface)
        * (1.0 + smooth_excess * m.smoothness)
        * (1.0 + safety_excess * m.safety);

    if criterion == Criterion::TruckCompatible {
        if let Some(VehicleProfile::Truck { height_m, weight_t }) = vehicle {
            match truck_restriction_penalty(edge, *height_m, *weight_t) {
                None => return f64::INFINITY,
                Some(penalty) => total *= penalty,
            }
        }
    }

    total
}

/// Truck gating (§4.4): `None` means blocked; `Some(factor)` is the soft-penalty multiplier.
fn truck_restriction_penalty(edge: &Edge, height_m: Option<f64>, weight_t: Option<f64>) -> Option<f64> {
    let attrs = edge.attrs.as_ref().expect("non-connector edge");

    if let (Some(maxheight), Some(height)) = (attrs.maxheight_m, height_m) {
        if height > maxheight {
            return None;
        }
    }
    if let (Some(maxweight), Some(weight)) = (attrs.maxweight_t, weight_t) {
        if weight > maxweight {
            return None;
        }
    }
    if attrs.hgv.as_deref() == Some("no") {
        return None;
    }
    if matches!(attrs.access.as_deref(), Some("private") | Some("no")) {
        return None;
    }

    let mut penalty = 1.0;
    if attrs.hgv.as_deref() == Some("destination") {
        penalty *= 2.0;
    }
    if attrs.access.as_deref() == Some("delivery") {
        penalty *= 1.5;
    }
    Some(penalty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{EdgeAttrs, NodeIdx};

    fn plain_edge(length_km: f64, attrs: EdgeAttrs) -> Edge {
        Edge {
            src: NodeIdx(0),
            dst: NodeIdx(1),
            length_km,
            is_connector: false,
            attrs: Some(attrs),
        }
    }

    fn bare_attrs(highway_class: &str) -> EdgeAttrs {
        EdgeAttrs {
            highway_class: highway_class.to_string(),
            surface: None,
            smoothness: None,
            tracktype: None,
            lit: None,
            traffic_signals: false,
            maxspeed_kmh: None,
            maxheight_m: None,
            maxweight_t: None,
            hgv: None,
            access: None,
            lanes: None,
            oneway: false,
            name: "Unnamed".to_string(),
        }
    }

    #[test]
    fn connector_cost_is_length_regardless_of_criterion() {
        let edge = Edge {
            src: NodeIdx(0),
            dst: NodeIdx(1),
            length_km: 3.5,
            is_connector: true,
            attrs: None,
        };
        for &c in &Criterion::CANONICAL_ORDER {
            assert_eq!(cost(&edge, c, None), 3.5);
        }
    }

    #[test]
    fn cost_is_always_at_least_distance_times_distance_multiplier() {
        let edge = plain_edge(10.0, bare_attrs("footway"));
        for &c in &Criterion::CANONICAL_ORDER {
            let m = criteria_multipliers(c);
            assert!(cost(&edge, c, None) >= 10.0 * m.distance - 1e-9);
        }
    }

    #[test]
    fn height_block_is_strict_inequality() {
        let mut attrs = bare_attrs("primary");
        attrs.maxheight_m = Some(4.0);
        let edge = plain_edge(5.0, attrs);

        let exactly_equal = VehicleProfile::Truck {
            height_m: Some(4.0),
            weight_t: None,
        };
        let over = VehicleProfile::Truck {
            height_m: Some(4.01),
            weight_t: None,
        };

        assert!(cost(&edge, Criterion::TruckCompatible, Some(&exactly_equal)).is_finite());
        assert!(cost(&edge, Criterion::TruckCompatible, Some(&over)).is_infinite());
    }

    #[test]
    fn hgv_no_blocks_regardless_of_dimensions() {
        let mut attrs = bare_attrs("primary");
        attrs.hgv = Some("no".to_string());
        let edge = plain_edge(5.0, attrs);
        let truck = VehicleProfile::Truck {
            height_m: None,
            weight_t: None,
        };
        assert!(cost(&edge, Criterion::TruckCompatible, Some(&truck)).is_infinite());
    }

    #[test]
    fn hgv_destination_and_delivery_access_compound() {
        let mut attrs = bare_attrs("primary");
        attrs.hgv = Some("destination".to_string());
        attrs.access = Some("delivery".to_string());
        let edge = plain_edge(1.0, attrs.clone());
        let unrestricted_edge = plain_edge(1.0, bare_attrs("primary"));
        let truck = VehicleProfile::Truck {
            height_m: None,
            weight_t: None,
        };

        let penalized = cost(&edge, Criterion::TruckCompatible, Some(&truck));
        let baseline = cost(&unrestricted_edge, Criterion::TruckCompatible, Some(&truck));
        assert!((penalized - baseline * 3.0).abs() < 1e-9);
    }

    #[test]
    fn non_truck_criteria_never_consult_truck_gating() {
        let mut attrs = bare_attrs("primary");
        attrs.hgv = Some("no".to_string());
        let edge = plain_edge(5.0, attrs);
        assert!(cost(&edge, Criterion::Fastest, None).is_finite());
    }
}
