use crate::graph::*;
use std::hash::Hash;

/// A directed, unweighted graph of labeled vertices.
///
/// Each vertex keeps its out-neighbors in the order they were added.
/// Adding an edge twice is a no-op.
///
/// |                 | Complexity                  |
/// | --------------- | --------------------------- |
/// | `add_vertex`    | $O(1)$ expected             |
/// | `add_edge`      | $O(d)$, $d$ the out-degree  |
/// | `remove_edge`   | $O(d)$                      |
/// | `remove_vertex` | $O(\|V\| + \|E\|)$          |
/// | `neighbors`     | $O(1)$ per neighbor         |
#[derive(Clone)]
pub struct AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    index: VertexIndex<V>,
    neighbors: Vec<Vec<VertexId>>,
    edge_size: usize,
}

impl<V> Default for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            index: VertexIndex::new(),
            neighbors: vec![],
            edge_size: 0,
        }
    }

    /// Builds a graph from labels and `(source, sink)` index pairs.
    ///
    /// Duplicated labels and edges out of range are skipped.
    pub fn from_records<L, E>(labels: L, edges: E) -> Self
    where
        L: IntoIterator<Item = V>,
        E: IntoIterator<Item = (usize, usize)>,
    {
        let mut res = Self::new();
        for label in labels {
            if !res.add_vertex(label) {
                tracing::warn!("skipped a duplicated vertex");
            }
        }
        for (source, sink) in edges {
            let (source, sink) = (VertexId::new(source), VertexId::new(sink));
            if !res.contains_vertex(&source) || !res.contains_vertex(&sink) {
                tracing::warn!(%source, %sink, "skipped an edge out of range");
                continue;
            }
            res.add_edge(&source, &sink);
        }
        res
    }

    /// Adds an edge from `source` to `sink`.
    ///
    /// Returns `false` without touching the graph
    /// if either endpoint is out of range or the edge is present.
    pub fn add_edge(&mut self, source: &VertexId, sink: &VertexId) -> bool {
        if !self.contains_vertex(source) || !self.contains_vertex(sink) {
            return false;
        }
        let out = &mut self.neighbors[source.to_raw()];
        if out.contains(sink) {
            return false;
        }
        out.push(*sink);
        self.edge_size += 1;
        true
    }

    /// Out-neighbors of `v`, empty if `v` is out of range.
    pub fn neighbors_of(&self, v: &VertexId) -> &[VertexId] {
        self.neighbors
            .get(v.to_raw())
            .map(|x| x.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(raw, out)| {
            let source = VertexId::new(raw);
            out.iter().map(move |sink| Edge {
                source,
                sink: *sink,
            })
        })
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.neighbors.clear();
        self.edge_size = 0;
    }
}

impl<V> QueryableGraph for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    fn vertex_size(&self) -> usize {
        self.index.len()
    }

    fn edge_size(&self) -> usize {
        self.edge_size
    }

    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.neighbors_of(v).iter().copied())
    }

    fn degree(&self, v: &VertexId) -> usize {
        self.neighbors_of(v).len()
    }
}

impl<V> LabeledGraph for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    type Label = V;

    fn vertex_index(&self) -> &VertexIndex<V> {
        &self.index
    }
}

impl<V> GrowableGraph for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    fn add_vertex(&mut self, label: V) -> bool {
        if !self.index.add(label) {
            return false;
        }
        self.neighbors.push(vec![]);
        true
    }
}

impl<V> EdgeShrinkableGraph for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> usize {
        let Some(out) = self.neighbors.get_mut(source.to_raw()) else {
            return 0;
        };
        let before = out.len();
        out.retain(|w| w != sink);
        let removed = before - out.len();
        self.edge_size -= removed;
        removed
    }
}

impl<V> VertexShrinkableGraph for AdjacencyGraph<V>
where
    V: Hash + Eq,
{
    fn remove_vertex(&mut self, vertex: &VertexId) -> Option<V> {
        let label = self.index.remove(vertex)?;
        self.neighbors.remove(vertex.to_raw());
        for out in self.neighbors.iter_mut() {
            *out = out
                .iter()
                .filter_map(|w| w.shifted_after_removal(vertex))
                .collect();
        }
        self.edge_size = self.neighbors.iter().map(|out| out.len()).sum();
        tracing::debug!(
            %vertex,
            vertex_size = self.index.len(),
            edge_size = self.edge_size,
            "removed a vertex"
        );
        Some(label)
    }
}

impl<V> From<&WeightedGraph<V>> for AdjacencyGraph<V>
where
    V: Hash + Eq + Clone,
{
    /// Forgets weights and merges parallel edges.
    fn from(weighted: &WeightedGraph<V>) -> Self {
        let mut res = Self::new();
        for (_, label) in weighted.vertex_index().iter() {
            res.add_vertex(label.clone());
        }
        for e in weighted.iter_edges() {
            res.add_edge(&e.source, &e.sink);
        }
        res
    }
}

impl<V> std::fmt::Debug for AdjacencyGraph<V>
where
    V: Hash + Eq + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyGraph {{")?;
        write!(f, "{:?}", self.debug().indent(2))?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    fn abcd() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_records(["A", "B", "C", "D"], [(0, 3), (1, 2)])
    }

    fn labeled_edges(g: &AdjacencyGraph<&'static str>) -> Vec<(&'static str, &'static str)> {
        g.iter_edges()
            .map(|e| (*g.label_of(&e.source), *g.label_of(&e.sink)))
            .collect()
    }

    #[test]
    fn edges_are_deduplicated() {
        let mut g = abcd();
        let (a, d) = (VertexId::new(0), VertexId::new(3));
        assert!(!g.add_edge(&a, &d));
        assert_eq!(g.neighbors_of(&a), &[d]);
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn edges_out_of_range_are_rejected() {
        let mut g = abcd();
        assert!(!g.add_edge(&VertexId::new(0), &VertexId::new(4)));
        assert!(!g.add_edge(&VertexId::new(7), &VertexId::new(1)));
        assert_eq!(g.edge_size(), 2);
        assert!(g.neighbors_of(&VertexId::new(7)).is_empty());
    }

    #[test]
    fn duplicated_vertex_is_noop() {
        let mut g = abcd();
        assert!(!g.add_vertex("C"));
        assert_eq!(g.vertex_size(), 4);
        assert!(g.add_vertex("E"));
        assert_eq!(g.index_of(&"E"), Some(VertexId::new(4)));
        assert_eq!(g.degree(&VertexId::new(4)), 0);
    }

    #[test]
    fn remove_vertex_renumbers_edges() {
        let mut g = abcd();
        assert_eq!(g.remove_vertex(&VertexId::new(1)), Some("B"));
        let labels: Vec<_> = g.vertex_index().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, vec!["A", "C", "D"]);
        let edges: Vec<_> = g
            .iter_edges()
            .map(|e| (e.source.to_raw(), e.sink.to_raw()))
            .collect();
        assert_eq!(edges, vec![(0, 2)]);
        assert_eq!(labeled_edges(&g), vec![("A", "D")]);
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn remove_vertex_out_of_range_is_noop() {
        let mut g = abcd();
        assert_eq!(g.remove_vertex(&VertexId::new(4)), None);
        assert_eq!(g.vertex_size(), 4);
        assert_eq!(g.edge_size(), 2);
    }

    #[test]
    fn remove_edge() {
        let mut g = abcd();
        assert_eq!(g.remove_edge(&VertexId::new(0), &VertexId::new(3)), 1);
        assert_eq!(g.remove_edge(&VertexId::new(0), &VertexId::new(3)), 0);
        assert_eq!(g.remove_edge(&VertexId::new(9), &VertexId::new(3)), 0);
        assert_eq!(labeled_edges(&g), vec![("B", "C")]);
    }

    #[test]
    fn clear() {
        let mut g = abcd();
        g.clear();
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
        assert!(g.add_vertex("A"));
    }

    #[test]
    fn print_edges() {
        let mut g = abcd();
        g.add_edge(&VertexId::new(0), &VertexId::new(1));
        let trial = format!("{:?}", g.debug());
        assert_eq!(trial, "A -> D B\nB -> C\nC ->\nD ->\n");
    }

    #[test]
    fn from_weighted_merges_parallel_edges() {
        let w = Weights::new(1.0, 1.0).unwrap();
        let mut wg: WeightedGraph<&str> = ["A", "B"].into_iter().collect();
        let (a, b) = (VertexId::new(0), VertexId::new(1));
        wg.add_edge(&a, &b, w);
        wg.add_edge(&a, &b, w);
        wg.add_edge(&b, &a, w);
        let g = AdjacencyGraph::from(&wg);
        assert_eq!(g.neighbors_of(&a), &[b]);
        assert_eq!(g.neighbors_of(&b), &[a]);
        assert_eq!(g.edge_size(), 2);
    }

    #[quickcheck]
    fn follows_naive_graph(ops: Ops) {
        let mut oracle = NaiveGraph::default();
        let mut trial = AdjacencyGraph::new();
        for op in ops.iter() {
            oracle.apply(op);
            let n = trial.vertex_size();
            match *op {
                Op::AddVertex(label) => {
                    trial.add_vertex(label);
                }
                Op::RemoveVertex(v) => {
                    trial.remove_vertex(&VertexId::new(pick(v, n)));
                }
                Op::AddEdge((src, snk, _, _)) => {
                    trial.add_edge(&VertexId::new(pick(src, n)), &VertexId::new(pick(snk, n)));
                }
                Op::RemoveEdge((src, snk)) => {
                    trial.remove_edge(&VertexId::new(pick(src, n)), &VertexId::new(pick(snk, n)));
                }
            }
        }
        let labels: Vec<_> = trial.vertex_index().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, oracle.labels);
        for v in trial.iter_vertices() {
            let sinks: Vec<_> = trial.neighbors(&v).map(|w| w.to_raw()).collect();
            assert_eq!(sinks, oracle.distinct_sinks(v.to_raw()));
        }
        assert_eq!(trial.edge_size(), trial.iter_edges().count());
    }
}
