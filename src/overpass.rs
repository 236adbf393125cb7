//! OSM Fetcher (§6.3): builds a bbox-restricted Overpass QL query, POSTs it to the configured
//! endpoint, and decodes the raw element stream for the Graph Builder.

use crate::config::EngineConfig;
use crate::coordinate::Coordinate;
use crate::err::Error;
use serde::Deserialize;
use std::collections::HashMap;

/// One raw OSM element as Overpass returns it — either a node or a way. Deliberately permissive
/// about tags (always `Option<HashMap<...>>`), since nodes never carry tags this engine cares
/// about and malformed/missing tag maps are common in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OsmElement {
    Node {
        id: i64,
        lat: f64,
        lon: f64,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    /// Overpass can also emit relations; this engine has no use for them but must not fail to
    /// decode a response that includes some.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OsmElement>,
}

/// Bounding box as (min_lat, min_lon, max_lat, max_lon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

/// Bbox derived from origin/destination extremes, padded on every side (§6.3).
pub fn calculate_bbox(origin: Coordinate, destination: Coordinate, padding_deg: f64) -> BoundingBox {
    BoundingBox {
        min_lat: origin.lat.min(destination.lat) - padding_deg,
        min_lon: origin.lon.min(destination.lon) - padding_deg,
        max_lat: origin.lat.max(destination.lat) + padding_deg,
        max_lon: origin.lon.max(destination.lon) + padding_deg,
    }
}

/// Bit-exact Overpass QL query for the given bbox and timeout (§6.3).
pub fn build_query(bbox: BoundingBox, timeout_secs: u64) -> String {
    format!(
        "[out:json][timeout:{timeout}];\n\
         (\n\
         \u{20} way[\"highway\"]\n\
         \u{20}    [\"highway\"!=\"footway\"]\n\
         \u{20}    [\"highway\"!=\"path\"]\n\
         \u{20}    [\"highway\"!=\"steps\"]\n\
         \u{20}    [\"highway\"!=\"cycleway\"]\n\
         \u{20}    [\"highway\"!=\"bridleway\"]\n\
         \u{20}    [\"highway\"!=\"construction\"]\n\
         \u{20}    [\"highway\"!=\"proposed\"]\n\
         \u{20}    ({min_lat},{min_lon},{max_lat},{max_lon});\n\
         );\n\
         out body;\n\
         >;\n\
         out skel qt;\n",
        timeout = timeout_secs,
        min_lat = bbox.min_lat,
        min_lon = bbox.min_lon,
        max_lat = bbox.max_lat,
        max_lon = bbox.max_lon,
    )
}

/// Fetches the road network for the given origin/destination pair from the configured Overpass
/// endpoint. This is the single blocking point with user-visible latency in the whole pipeline
/// (§5): one HTTP POST, bounded by `cfg.timeout`.
pub fn fetch(
    cfg: &EngineConfig,
    origin: Coordinate,
    destination: Coordinate,
) -> Result<OverpassResponse, Error> {
    let bbox = calculate_bbox(origin, destination, cfg.bbox_padding_deg);
    let query = build_query(bbox, cfg.timeout_secs);

    log::info!(
        "Fetching OSM data for bbox ({:.5},{:.5},{:.5},{:.5})",
        bbox.min_lat,
        bbox.min_lon,
        bbox.max_lat,
        bbox.max_lon
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(cfg.timeout())
        .build()?;

    let response = client
        .post(&cfg.overpass_url)
        .form(&[("data", query.as_str())])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(Error::OverpassStatus {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text()?;
    let parsed: OverpassResponse = serde_json::from_str(&body)?;
    log::info!("Fetched {} OSM elements", parsed.elements.len());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_padding_applied_on_every_side() {
        let origin = Coordinate::new(-5.7945, -35.2110);
        let destination = Coordinate::new(-5.8822, -35.1767);
        let bbox = calculate_bbox(origin, destination, 0.05);

        assert!((bbox.min_lat - (-5.8822 - 0.05)).abs() < 1e-9);
        assert!((bbox.max_lat - (-5.7945 + 0.05)).abs() < 1e-9);
        assert!((bbox.min_lon - (-35.2110 - 0.05)).abs() < 1e-9);
        assert!((bbox.max_lon - (-35.1767 + 0.05)).abs() < 1e-9);
    }

    #[test]
    fn query_has_exact_shape() {
        let bbox = BoundingBox {
            min_lat: 1.0,
            min_lon: 2.0,
            max_lat: 3.0,
            max_lon: 4.0,
        };
        let query = build_query(bbox, 60);
        assert!(query.starts_with("[out:json][timeout:60];"));
        assert!(query.contains("(1,2,3,4);"));
        assert!(query.contains("out body;"));
        assert!(query.contains("out skel qt;"));
        assert!(query.contains("[\"highway\"!=\"footway\"]"));
    }

    #[test]
    fn decodes_nodes_ways_and_ignores_relations() {
        let raw = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 1.0, "lon": 2.0},
                {"type": "way", "id": 2, "nodes": [1, 2], "tags": {"highway": "residential"}},
                {"type": "relation", "id": 3}
            ]
        }"#;
        let parsed: OverpassResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.elements.len(), 3);
        assert!(matches!(parsed.elements[2], OsmElement::Other));
    }
}
