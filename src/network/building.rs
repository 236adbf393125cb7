//! Graph Builder (§4.3): turns a raw OSM payload plus two terminal coordinates into the directed
//! multigraph defined in §3, including terminal-to-network connector snapping.

use crate::coordinate::Coordinate;
use crate::overpass::{OsmElement, OverpassResponse};
use crate::tags;
use crate::units::length::haversine_distance;
use std::collections::HashMap;

use super::{Edge, EdgeAttrs, Graph, Node, NodeIdx, DESTINATION_ID, ORIGIN_ID};

/// Intermediate node record kept only while the graph is under construction (§3).
struct ProtoNode {
    lat: f64,
    lon: f64,
}

/// Consumes an Overpass payload and two terminal coordinates, producing a [`Graph`].
pub struct GraphBuilder<'a> {
    response: &'a OverpassResponse,
    origin: Coordinate,
    destination: Coordinate,
    terminal_candidates: usize,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(
        response: &'a OverpassResponse,
        origin: Coordinate,
        destination: Coordinate,
        terminal_candidates: usize,
    ) -> Self {
        GraphBuilder {
            response,
            origin,
            destination,
            terminal_candidates,
        }
    }

    pub fn build(self) -> Graph {
        let mut graph = Graph::new();

        // 1. transient id -> (lat, lon) map over all received node elements.
        let mut proto_nodes: HashMap<i64, ProtoNode> = HashMap::new();
        for element in &self.response.elements {
            if let OsmElement::Node { id, lat, lon } = element {
                proto_nodes.insert(*id, ProtoNode { lat: *lat, lon: *lon });
            }
        }

        // id -> NodeIdx for every OSM node actually materialized into the graph (i.e. that
        // belongs to at least one way). OSM nodes that are never referenced by a way are never
        // added (matches the reference implementation, which only ever calls `G.add_node` for
        // nodes it is about to connect with an edge).
        let mut node_idx: HashMap<i64, NodeIdx> = HashMap::new();

        let get_or_insert_node = |graph: &mut Graph,
                                  node_idx: &mut HashMap<i64, NodeIdx>,
                                  id: i64|
         -> Option<NodeIdx> {
            if let Some(idx) = node_idx.get(&id) {
                return Some(*idx);
            }
            let proto = proto_nodes.get(&id)?;
            let idx = graph.push_node(Node {
                id,
                coord: Coordinate::new(proto.lat, proto.lon),
                is_terminal: false,
            });
            node_idx.insert(id, idx);
            Some(idx)
        };

        // 2. two terminal nodes, ORIGIN and DESTINATION.
        let origin_idx = graph.push_node(Node {
            id: ORIGIN_ID,
            coord: self.origin,
            is_terminal: true,
        });
        let destination_idx = graph.push_node(Node {
            id: DESTINATION_ID,
            coord: self.destination,
            is_terminal: true,
        });

        // 3. ways -> directed edge pairs.
        for element in &self.response.elements {
            let OsmElement::Way { nodes, tags, .. } = element else {
                continue;
            };
            let attrs = normalize_tags(tags);

            for window in nodes.windows(2) {
                let (a, b) = (window[0], window[1]);
                let (Some(a_idx), Some(b_idx)) = (
                    get_or_insert_node(&mut graph, &mut node_idx, a),
                    get_or_insert_node(&mut graph, &mut node_idx, b),
                ) else {
                    // missing endpoint -> malformed fragment, skipped silently (§7).
                    continue;
                };

                let length_km = haversine_distance(&graph.node(a_idx).coord, &graph.node(b_idx).coord).0;

                graph.push_edge(Edge {
                    src: a_idx,
                    dst: b_idx,
                    length_km,
                    is_connector: false,
                    attrs: Some(attrs.clone()),
                });

                if !attrs.oneway {
                    graph.push_edge(Edge {
                        src: b_idx,
                        dst: a_idx,
                        length_km,
                        is_connector: false,
                        attrs: Some(attrs.clone()),
                    });
                }
            }
        }

        // 4. terminal snapping: connect each terminal to its k nearest OSM nodes. If no OSM nodes
        // were materialized (e.g. an empty payload), this is a no-op and both terminals stay
        // isolated; the planner then reports "no valid routes found" rather than failing here.
        snap_terminal(&mut graph, origin_idx, &node_idx, self.terminal_candidates);
        snap_terminal(&mut graph, destination_idx, &node_idx, self.terminal_candidates);

        graph
    }
}

fn snap_terminal(
    graph: &mut Graph,
    terminal_idx: NodeIdx,
    node_idx: &HashMap<i64, NodeIdx>,
    k: usize,
) {
    let terminal_coord = graph.node(terminal_idx).coord;

    let mut distances: Vec<(NodeIdx, f64)> = node_idx
        .values()
        .map(|&idx| {
            let dist = haversine_distance(&terminal_coord, &graph.node(idx).coord).0;
            (idx, dist)
        })
        .collect();
    distances.sort_by(|a, b| a.1.total_cmp(&b.1));

    for &(node, dist) in distances.iter().take(k) {
        graph.push_edge(Edge {
            src: terminal_idx,
            dst: node,
            length_km: dist,
            is_connector: true,
            attrs: None,
        });
        graph.push_edge(Edge {
            src: node,
            dst: terminal_idx,
            length_km: dist,
            is_connector: true,
            attrs: None,
        });
    }
}

fn normalize_tags(tags: &HashMap<String, String>) -> EdgeAttrs {
    let get = |key: &str| tags.get(key).map(String::as_str);

    EdgeAttrs {
        highway_class: get("highway").unwrap_or("unclassified").to_string(),
        surface: get("surface").map(String::from),
        smoothness: get("smoothness").map(String::from),
        tracktype: get("tracktype").map(String::from),
        lit: get("lit").map(String::from),
        traffic_signals: get("traffic_signals").is_some(),
        maxspeed_kmh: get("maxspeed").and_then(tags::parse_maxspeed),
        maxheight_m: get("maxheight").and_then(tags::parse_metric),
        maxweight_t: get("maxweight").and_then(tags::parse_metric),
        hgv: get("hgv").map(String::from),
        access: get("access").map(String::from),
        lanes: get("lanes").and_then(tags::parse_int),
        oneway: tags::parse_oneway(get("oneway")),
        name: get("name").unwrap_or("Unnamed").to_string(),
    }
}
