//! Directed graphs of labeled vertices, with and without weights.
//!
//! # Dense vertex ID's
//!
//! Vertices are addressed by [VertexId]'s, which are essentially `usize`.
//! A graph of $n$ vertices always uses ID's $0..n$, in the order vertices were added.
//! Algorithm authors may feel free to copy these ID's and to index plain vectors by them.
//!
//! The price is paid on removal:
//! removing a vertex shifts every higher ID down by one,
//! in labels and in edge endpoints alike, within the same call.
//! ID's obtained before a removal must not be used after it.
//!
//! # Labels
//!
//! Every vertex carries a unique label, e.g. an airport name.
//! [VertexIndex] translates labels to ID's and back.
//!
//! # Capabilities
//!
//! Algorithms are written against traits rather than concrete graphs:
//!
//! ```plain
//! QueryableWeightedGraph   LabeledGraph <---- Growable
//!          |                  |     ^
//!          v                  |     +-------- VertexShrinkable ---> EdgeShrinkable
//!    QueryableGraph  <--------+
//! ```
//!
//! Both [AdjacencyGraph] and [WeightedGraph] implement all of them,
//! except that only [WeightedGraph] is a [QueryableWeightedGraph].

mod vertex;
pub use self::vertex::*;
mod vertex_index;
pub use self::vertex_index::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;

pub mod directed;
pub use self::directed::{AdjacencyGraph, WeightedGraph};
