use super::Path;
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::{Ordering, Reverse};

/// Single-source shortest paths w.r.t. a [Metric].
///
/// Edge weights are non-negative, which [Weights] guarantees.
pub trait ShortestPath
where
    Self: QueryableWeightedGraph + Sized,
{
    /// Settles every vertex reachable from `source` with its least total weight.
    #[tracing::instrument(level = "debug", skip(self))]
    fn dijkstra(&self, source: &VertexId, metric: Metric) -> ShortestPathTree {
        let n = self.vertex_size();
        let mut res = ShortestPathTree {
            source: *source,
            metric,
            dist: vec![None; n],
            prev: vec![None; n],
        };
        if !self.contains_vertex(source) {
            return res;
        }
        let mut settled = vec![false; n];
        let mut frontier: KeyedPriorityQueue<VertexId, Reverse<(Distance, VertexId)>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(n, RandomState::new());
        res.dist[source.to_raw()] = Some(0.0);
        frontier.push(*source, Reverse((Distance(0.0), *source)));
        let mut relaxed = 0usize;
        while let Some((u, Reverse((Distance(du), _)))) = frontier.pop() {
            settled[u.to_raw()] = true;
            for e in self.out_edges(&u) {
                let v = e.sink.to_raw();
                if settled[v] {
                    continue;
                }
                let alt = du + e.weight(metric);
                if res.dist[v].map_or(true, |dv| alt < dv) {
                    res.dist[v] = Some(alt);
                    res.prev[v] = Some(u);
                    // decreases the key if `v` is already in the frontier
                    frontier.push(e.sink, Reverse((Distance(alt), e.sink)));
                    relaxed += 1;
                }
            }
        }
        tracing::trace!(
            settled = settled.iter().filter(|x| **x).count(),
            relaxed,
            "dijkstra finished"
        );
        res
    }

    /// A least-weight path from `source` to `target`.
    ///
    /// Empty if either is out of range or `target` is unreachable.
    fn shortest_path_between(&self, source: &VertexId, target: &VertexId, metric: Metric) -> Path {
        if !self.contains_vertex(target) {
            return Path::empty();
        }
        self.dijkstra(source, metric).path_to(target)
    }

    /// A least-weight path between two labeled vertices.
    ///
    /// Empty if either label is unknown or `target` is unreachable.
    /// These two cases are not told apart.
    fn shortest_path(
        &self,
        source: &<Self as LabeledGraph>::Label,
        target: &<Self as LabeledGraph>::Label,
        metric: Metric,
    ) -> Path
    where
        Self: LabeledGraph,
    {
        match (self.index_of(source), self.index_of(target)) {
            (Some(s), Some(t)) => {
                let path = self.shortest_path_between(&s, &t, metric);
                if path.is_empty() {
                    tracing::debug!(source = %s, target = %t, %metric, "unreachable target");
                }
                path
            }
            _ => {
                tracing::debug!(%metric, "unknown source or target");
                Path::empty()
            }
        }
    }
}

impl<G: QueryableWeightedGraph> ShortestPath for G {}

/// Result of [ShortestPath::dijkstra].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: VertexId,
    metric: Metric,
    dist: Vec<Option<f64>>,
    prev: Vec<Option<VertexId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Least total weight from the source, `None` if `v` is unreachable.
    pub fn distance(&self, v: &VertexId) -> Option<f64> {
        self.dist.get(v.to_raw()).copied().flatten()
    }

    pub fn predecessor(&self, v: &VertexId) -> Option<VertexId> {
        self.prev.get(v.to_raw()).copied().flatten()
    }

    pub fn path_to(&self, target: &VertexId) -> Path {
        if self.distance(target).is_none() {
            return Path::empty();
        }
        Path::backtrack(*target, |v| self.predecessor(v))
    }
}

/// A tentative distance, totally ordered.
#[derive(Debug, Clone, Copy)]
struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
