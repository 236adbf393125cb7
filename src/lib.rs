//! Multi-criteria road routing engine over live OpenStreetMap data.
//!
//! The public entry point is [`plan`]: given an [`EngineConfig`], a vehicle profile, and resolved
//! origin/destination coordinates, it fetches the relevant OSM road network, builds a graph, and
//! computes one route per applicable criterion.

pub mod alerts;
pub mod config;
pub mod coordinate;
pub mod cost;
pub mod err;
pub mod helpers;
pub mod network;
pub mod overpass;
pub mod planner;
pub mod routing;
pub mod tags;
pub mod units;
pub mod vehicle;
pub mod weights;

pub use config::EngineConfig;
pub use coordinate::Coordinate;
pub use err::Error;
pub use network::{Graph, ORIGIN_ID, DESTINATION_ID};
pub use planner::{Route, RouteResponse};
pub use vehicle::{Criterion, VehicleProfile};

use network::GraphBuilder;

/// Fetches the road network around `origin`/`destination` and computes one route per applicable
/// criterion for `vehicle`. This is the single call the CLI (and any future HTTP surface) makes.
pub fn plan(
    cfg: &EngineConfig,
    origin: Coordinate,
    destination: Coordinate,
    vehicle: &VehicleProfile,
) -> Result<RouteResponse, Error> {
    let response = overpass::fetch(cfg, origin, destination)?;
    let graph = GraphBuilder::new(&response, origin, destination, cfg.terminal_candidates).build();

    // the builder always pushes the origin terminal first, destination second (§4.3).
    let origin_idx = network::NodeIdx(0);
    let destination_idx = network::NodeIdx(1);

    planner::plan_routes(&graph, origin_idx, destination_idx, origin, destination, vehicle)
}
