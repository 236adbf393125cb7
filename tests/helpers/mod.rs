// Shared fixture builders for integration tests, mirroring how the reference engine's own
// `tests/helpers/mod.rs` centralizes test-graph construction.
#![allow(dead_code)]

use std::collections::HashMap;
use waygraph::coordinate::Coordinate;
use waygraph::network::GraphBuilder;
use waygraph::overpass::{OsmElement, OverpassResponse};
use waygraph::{Graph, RouteResponse, VehicleProfile};

pub fn node(id: i64, lat: f64, lon: f64) -> OsmElement {
    OsmElement::Node { id, lat, lon }
}

pub fn way(id: i64, nodes: Vec<i64>, tags: &[(&str, &str)]) -> OsmElement {
    OsmElement::Way {
        id,
        nodes,
        tags: tags.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
}

/// Builds a graph from a raw element list plus terminal coordinates, using the engine's own
/// public `GraphBuilder`, exactly as the fetch pipeline would.
pub fn build_graph(
    elements: Vec<OsmElement>,
    origin: Coordinate,
    destination: Coordinate,
) -> Graph {
    let response = OverpassResponse { elements };
    GraphBuilder::new(&response, origin, destination, 5).build()
}

pub fn plan(graph: &Graph, origin: Coordinate, destination: Coordinate, vehicle: &VehicleProfile) -> RouteResponse {
    waygraph::planner::plan_routes(
        graph,
        waygraph::network::NodeIdx(0),
        waygraph::network::NodeIdx(1),
        origin,
        destination,
        vehicle,
    )
    .expect("fixture scenarios always yield at least one route")
}

pub fn tags_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// A handful of nodes a few meters from `near`, chained into their own dead-end spur so they
/// materialize into the graph without joining the real route. Real bbox extracts always have
/// several junction nodes within a few meters of any terminal; a fixture with only the two route
/// endpoints would let terminal snapping connect straight past the route's real edges via a raw
/// connector (connectors are exempt from every cost and restriction, per `cost::cost`). Padding
/// the terminal's nearest neighbors with this spur keeps the route's own edges in play.
pub fn decoy_cluster(start_id: i64, near: (f64, f64), count: usize) -> Vec<OsmElement> {
    let mut elements = Vec::new();
    let mut ids = Vec::new();
    for i in 0..count {
        let offset = (i as f64 + 1.0) * 0.000005;
        elements.push(node(start_id + i as i64, near.0 + offset, near.1 + offset));
        ids.push(start_id + i as i64);
    }
    elements.push(way(start_id + 10_000, ids, &[("highway", "service")]));
    elements
}
