//! Route Planner (§4.6): for each requested criterion, searches the graph under that criterion's
//! weighted view, reconstructs geometry, pools and deduplicates alerts, and assembles the
//! canonically-ordered response.

use crate::alerts::{deduplicate_and_summarize, generate_alerts_for_edge, Alert};
use crate::coordinate::Coordinate;
use crate::cost;
use crate::err::Error;
use crate::network::{EdgeIdx, Graph, NodeIdx};
use crate::routing::dijkstra::{Dijkstra, WeightedView};
use crate::vehicle::{Criterion, VehicleProfile};
use rayon::prelude::*;
use serde::Serialize;

/// One computed route in the response (§6.2).
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    #[serde(rename = "type")]
    pub criterion: Criterion,
    pub distance_km: f64,
    pub geometry: Vec<[f64; 2]>,
    pub alerts: Vec<Alert>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub routes: Vec<Route>,
    pub origin_coords: Coordinate,
    pub destination_coords: Coordinate,
}

struct CriterionView<'g> {
    graph: &'g Graph,
    criterion: Criterion,
    vehicle: &'g VehicleProfile,
}

impl<'g> WeightedView for CriterionView<'g> {
    fn weight(&self, edge: EdgeIdx) -> Option<f64> {
        let weight = cost::cost(self.graph.edge(edge), self.criterion, Some(self.vehicle));
        if weight.is_infinite() {
            None
        } else {
            Some(weight)
        }
    }
}

/// Runs the full per-criterion search + alert pipeline for one criterion. Returns `None` if no
/// path exists under this criterion, per §4.6 step 3 ("skip this criterion silently").
fn plan_one(
    graph: &Graph,
    origin_idx: NodeIdx,
    destination_idx: NodeIdx,
    criterion: Criterion,
    vehicle: &VehicleProfile,
) -> Option<Route> {
    let view = CriterionView {
        graph,
        criterion,
        vehicle,
    };
    let mut dijkstra = Dijkstra::new();
    let path = dijkstra.compute_best_path(graph, origin_idx, destination_idx, &view)?;

    let mut total_distance_km = 0.0;
    let mut geometry = Vec::with_capacity(path.edges().len() + 1);
    let mut pooled_alerts = Vec::new();

    if let Some(&first_edge) = path.edges().first() {
        let start = graph.node(graph.edge(first_edge).src).coord;
        geometry.push([start.lon, start.lat]);
    } else {
        let start = graph.node(path.src_idx()).coord;
        geometry.push([start.lon, start.lat]);
    }

    for &edge_idx in path.edges() {
        let edge = graph.edge(edge_idx);
        total_distance_km += edge.length_km;
        let terminus = graph.node(edge.dst).coord;
        geometry.push([terminus.lon, terminus.lat]);

        if !edge.is_connector {
            pooled_alerts.extend(generate_alerts_for_edge(edge, terminus, vehicle));
        }
    }

    let (alerts, summary) = deduplicate_and_summarize(pooled_alerts);

    Some(Route {
        criterion,
        distance_km: (total_distance_km * 100.0).round() / 100.0,
        geometry,
        alerts,
        summary,
    })
}

/// Computes routes for every criterion in `criteria` against `graph`, in canonical order (§4.6).
/// Per-criterion searches run in parallel (§5); `Error::NoRoutes` iff every criterion fails.
pub fn plan_routes(
    graph: &Graph,
    origin_idx: NodeIdx,
    destination_idx: NodeIdx,
    origin_coords: Coordinate,
    destination_coords: Coordinate,
    vehicle: &VehicleProfile,
) -> Result<RouteResponse, Error> {
    let criteria = Criterion::default_set_for(vehicle);

    let mut by_criterion: Vec<Option<Route>> = criteria
        .par_iter()
        .map(|&criterion| plan_one(graph, origin_idx, destination_idx, criterion, vehicle))
        .collect();

    let routes: Vec<Route> = Criterion::CANONICAL_ORDER
        .iter()
        .filter_map(|c| {
            let pos = criteria.iter().position(|x| x == c)?;
            by_criterion[pos].take()
        })
        .collect();

    if routes.is_empty() {
        return Err(Error::NoRoutes);
    }

    Ok(RouteResponse {
        routes,
        origin_coords,
        destination_coords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Edge, EdgeAttrs, Node};

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

    fn two_node_graph() -> (Graph, NodeIdx, NodeIdx) {
        let mut graph = Graph::new();
        let a = graph.push_node(Node {
            id: -1,
            coord: Coordinate::new(-5.7945, -35.2110),
            is_terminal: true,
        });
        let b = graph.push_node(Node {
            id: -2,
            coord: Coordinate::new(-5.8822, -35.1767),
            is_terminal: true,
        });
        let length = crate::units::length::haversine_distance(
            &graph.node(a).coord,
            &graph.node(b).coord,
        )
        .0;
        graph.push_edge(Edge {
            src: a,
            dst: b,
            length_km: length,
            is_connector: false,
            attrs: Some(bare_attrs("residential")),
        });
        graph.push_edge(Edge {
            src: b,
            dst: a,
            length_km: length,
            is_connector: false,
            attrs: Some(bare_attrs("residential")),
        });
        (graph, a, b)
    }

    #[test]
    fn simple_corridor_yields_three_clear_routes_for_a_car() {
        let (graph, a, b) = two_node_graph();
        let response = plan_routes(
            &graph,
            a,
            b,
            graph.node(a).coord,
            graph.node(b).coord,
            &VehicleProfile::Car,
        )
        .unwrap();

        assert_eq!(response.routes.len(), 3);
        for route in &response.routes {
            assert!((route.distance_km - 10.39).abs() < 0.05);
            assert_eq!(route.summary, "Route is clear with no warnings");
            assert!(route.alerts.is_empty());
        }
        assert!(!response
            .routes
            .iter()
            .any(|r| r.criterion == Criterion::TruckCompatible));
    }

    #[test]
    fn disconnected_destination_yields_no_routes_error() {
        let mut graph = Graph::new();
        let a = graph.push_node(Node {
            id: -1,
            coord: Coordinate::new(0.0, 0.0),
            is_terminal: true,
        });
        let b = graph.push_node(Node {
            id: -2,
            coord: Coordinate::new(1.0, 1.0),
            is_terminal: true,
        });
        let err = plan_routes(
            &graph,
            a,
            b,
            graph.node(a).coord,
            graph.node(b).coord,
            &VehicleProfile::Car,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NoRoutes));
    }
}
