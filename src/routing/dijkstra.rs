//! Single-source single-destination Dijkstra over a per-criterion weighted view (§4.6 step 2),
//! grounded on the teacher's `BinaryHeap<Reverse<CostNode>>` search shape, simplified to one
//! direction since the engine never needs bidirectional/contracted search.

use super::paths::Path;
use crate::network::{EdgeIdx, Graph, NodeIdx};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A weight function over edges, `None` meaning the edge is omitted from this view (§4.4 +∞
/// sentinel collapsed to "not offered to the search").
pub trait WeightedView {
    fn weight(&self, edge: EdgeIdx) -> Option<f64>;
}

pub struct Dijkstra {
    queue: BinaryHeap<std::cmp::Reverse<CostNode>>,
    costs: Vec<f64>,
    predecessors: Vec<Option<EdgeIdx>>,
    visited: Vec<bool>,
}

impl Dijkstra {
    pub fn new() -> Dijkstra {
        Dijkstra {
            queue: BinaryHeap::new(),
            costs: Vec::new(),
            predecessors: Vec::new(),
            visited: Vec::new(),
        }
    }

    fn init_query(&mut self, node_count: usize) {
        self.costs.clear();
        self.costs.resize(node_count, f64::INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(node_count, None);
        self.visited.clear();
        self.visited.resize(node_count, false);
        self.queue.clear();
    }

    /// Finds the minimum-weight path from `src` to `dst` under `view`, or `None` if unreachable.
    pub fn compute_best_path(
        &mut self,
        graph: &Graph,
        src: NodeIdx,
        dst: NodeIdx,
        view: &dyn WeightedView,
    ) -> Option<Path> {
        self.init_query(graph.node_count());

        self.costs[src.0] = 0.0;
        self.queue.push(std::cmp::Reverse(CostNode {
            idx: src,
            cost: 0.0,
        }));

        while let Some(std::cmp::Reverse(current)) = self.queue.pop() {
            if self.visited[current.idx.0] {
                continue;
            }
            self.visited[current.idx.0] = true;

            if current.idx == dst {
                break;
            }

            for edge_idx in graph.out_edges(current.idx) {
                let Some(edge_weight) = view.weight(edge_idx) else {
                    continue;
                };
                let edge = graph.edge(edge_idx);
                let new_cost = current.cost + edge_weight;
                if new_cost < self.costs[edge.dst.0] {
                    self.costs[edge.dst.0] = new_cost;
                    self.predecessors[edge.dst.0] = Some(edge_idx);
                    self.queue.push(std::cmp::Reverse(CostNode {
                        idx: edge.dst,
                        cost: new_cost,
                    }));
                }
            }
        }

        if self.costs[dst.0].is_infinite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut cur = dst;
        while let Some(edge_idx) = self.predecessors[cur.0] {
            edges.push(edge_idx);
            cur = graph.edge(edge_idx).src;
        }
        edges.reverse();

        Some(Path::new(src, dst, edges, self.costs[dst.0]))
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
struct CostNode {
    idx: NodeIdx,
    cost: f64,
}

impl Eq for CostNode {}

impl PartialEq for CostNode {
    fn eq(&self, other: &CostNode) -> bool {
        self.idx == other.idx && self.cost == other.cost
    }
}

impl Ord for CostNode {
    fn cmp(&self, other: &CostNode) -> Ordering {
        self.cost
            .partial_cmp(&other.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for CostNode {
    fn partial_cmp(&self, other: &CostNode) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
