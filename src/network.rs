//! An owned route network: airports with display positions and weighted routes.
//!
//! [RouteNetwork] is what front ends hold on to.
//! It answers queries by airport names and keeps positions in step with
//! vertex ID's through every mutation.
use crate::{
    algorithm::*,
    error::{Error, Result},
    graph::*,
};
use ahash::RandomState;
use std::collections::HashMap;

/// Where an airport is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A route between airports given by their positions in the airport list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRecord {
    pub from: usize,
    pub to: usize,
    pub time: f64,
    pub cost: f64,
}

/// A resolved least-weight route.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub stops: Vec<String>,
    pub metric: Metric,
    pub total: f64,
}

#[derive(Clone, Default)]
pub struct RouteNetwork {
    graph: WeightedGraph<String>,
    positions: Vec<Position>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from an airport list and routes indexing into it.
    ///
    /// Unlike single mutations, a bad record fails the whole batch.
    pub fn from_records<A, R>(airports: A, routes: R) -> Result<Self>
    where
        A: IntoIterator<Item = (String, Position)>,
        R: IntoIterator<Item = RouteRecord>,
    {
        let mut res = Self::new();
        for (label, position) in airports {
            if res.graph.index_of(&label).is_some() {
                return Err(Error::DuplicateVertex(label));
            }
            res.add_airport(label, position);
        }
        let size = res.airport_size();
        for record in routes {
            for index in [record.from, record.to] {
                if index >= size {
                    return Err(Error::VertexOutOfRange { index, size });
                }
            }
            let weights = Weights::new(record.time, record.cost)?;
            res.graph.add_edge(
                &VertexId::new(record.from),
                &VertexId::new(record.to),
                weights,
            );
        }
        tracing::debug!(
            airports = res.airport_size(),
            routes = res.route_size(),
            "loaded a route network"
        );
        Ok(res)
    }

    pub fn graph(&self) -> &WeightedGraph<String> {
        &self.graph
    }

    pub fn airport_size(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn route_size(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn index_of(&self, airport: &str) -> Option<VertexId> {
        self.graph.index_of(&airport.to_owned())
    }

    pub fn position_of(&self, airport: &str) -> Option<Position> {
        self.index_of(airport)
            .and_then(|v| self.positions.get(v.to_raw()).copied())
    }

    /// Airports in the order of their ID's.
    pub fn airports(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.graph
            .vertex_index()
            .iter()
            .zip(self.positions.iter())
            .map(|((_, label), position)| (label.as_str(), *position))
    }

    pub fn routes(&self) -> impl Iterator<Item = (&str, &str, Weights)> + '_ {
        self.graph.iter_edges().map(move |e| {
            (
                self.graph.label_of(&e.source).as_str(),
                self.graph.label_of(&e.sink).as_str(),
                e.weights,
            )
        })
    }

    /// Returns `false` if the airport is already present.
    pub fn add_airport(&mut self, airport: impl Into<String>, position: Position) -> bool {
        if !self.graph.add_vertex(airport.into()) {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Removes an airport, its position and every route from or to it.
    ///
    /// Airports after it move one ID down.
    /// Returns `false` if the airport is unknown.
    pub fn remove_airport(&mut self, airport: &str) -> bool {
        let Some(vid) = self.index_of(airport) else {
            return false;
        };
        if self.graph.remove_vertex(&vid).is_none() {
            return false;
        }
        self.positions.remove(vid.to_raw());
        tracing::debug!(airport, "removed an airport");
        true
    }

    /// Appends a route, even if another one between the same airports exists.
    ///
    /// Returns `false` if either airport is unknown.
    pub fn add_route(&mut self, from: &str, to: &str, weights: Weights) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(s), Some(t)) => self.graph.add_edge(&s, &t, weights),
            _ => false,
        }
    }

    /// Removes all routes from `from` to `to`.
    ///
    /// Returns `false` if there is none.
    pub fn remove_route(&mut self, from: &str, to: &str) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(s), Some(t)) => self.graph.remove_edge(&s, &t) > 0,
            _ => false,
        }
    }

    /// A path with the fewest legs.
    ///
    /// Empty if either airport is unknown or `to` is unreachable.
    pub fn fewest_hops(&self, from: &str, to: &str) -> Vec<String> {
        match (self.index_of(from), self.index_of(to)) {
            (Some(s), Some(t)) => self.resolve(&self.graph.bfs(&s).path_to(&t)),
            _ => vec![],
        }
    }

    /// A fastest or cheapest path.
    ///
    /// Empty if either airport is unknown or `to` is unreachable.
    pub fn shortest_path(&self, from: &str, to: &str, metric: Metric) -> Vec<String> {
        let path = self
            .graph
            .shortest_path(&from.to_owned(), &to.to_owned(), metric);
        self.resolve(&path)
    }

    /// Like [RouteNetwork::shortest_path], with the total time or cost.
    pub fn shortest_route(&self, from: &str, to: &str, metric: Metric) -> Option<Route> {
        let (s, t) = (self.index_of(from)?, self.index_of(to)?);
        let tree = self.graph.dijkstra(&s, metric);
        let total = tree.distance(&t)?;
        Some(Route {
            stops: self.resolve(&tree.path_to(&t)),
            metric,
            total,
        })
    }

    /// The network without weights and with parallel routes merged.
    pub fn unweighted(&self) -> AdjacencyGraph<String> {
        AdjacencyGraph::from(&self.graph)
    }

    /// Display text of routes, such as `50min, RM120`, keyed by endpoints.
    ///
    /// Of parallel routes, the last added one is shown.
    pub fn edge_labels(&self) -> HashMap<(VertexId, VertexId), String, RandomState> {
        let mut res = HashMap::with_hasher(RandomState::new());
        for e in self.graph.iter_edges() {
            res.insert(
                (e.source, e.sink),
                format!("{}min, RM{}", e.weights.time(), e.weights.cost()),
            );
        }
        res
    }

    fn resolve(&self, path: &Path) -> Vec<String> {
        path.labels(&self.graph).into_iter().cloned().collect()
    }
}

impl std::fmt::Debug for RouteNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.graph)
    }
}
