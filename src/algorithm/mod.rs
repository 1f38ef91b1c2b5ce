//! Graph algorithms
mod path;
pub use self::path::*;
mod traversal;
pub use self::traversal::*;
mod dijkstra;
pub use self::dijkstra::*;
