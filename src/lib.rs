//! Directed route graphs with fewest-hops and fastest/cheapest path search.
//!
//! * [graph] holds the data structures: labeled vertices with dense ID's,
//!   an unweighted [AdjacencyGraph](graph::AdjacencyGraph)
//!   and a [WeightedGraph](graph::WeightedGraph) whose edges carry time and cost.
//! * [algorithm] holds searches over them,
//!   written as extension traits implemented for every graph with the needed capabilities.
//! * [network] wraps a weighted graph of airports into an owned session
//!   that front ends query by airport names.
//!
//! ```
//! use routegraph::{graph::*, network::*};
//!
//! let mut net = RouteNetwork::new();
//! for name in ["KUL", "PEN", "BKI"] {
//!     net.add_airport(name, Position::default());
//! }
//! net.add_route("KUL", "PEN", Weights::new(40.0, 100.0).unwrap());
//! net.add_route("PEN", "BKI", Weights::new(40.0, 100.0).unwrap());
//! net.add_route("KUL", "BKI", Weights::new(150.0, 500.0).unwrap());
//!
//! assert_eq!(net.fewest_hops("KUL", "BKI"), vec!["KUL", "BKI"]);
//! assert_eq!(
//!     net.shortest_path("KUL", "BKI", Metric::from_selector("time")),
//!     vec!["KUL", "PEN", "BKI"],
//! );
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod network;

pub use self::error::{Error, Result};
