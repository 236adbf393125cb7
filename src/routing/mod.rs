pub mod dijkstra;
pub mod paths;

pub use dijkstra::Dijkstra;
pub use paths::Path;
