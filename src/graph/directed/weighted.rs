use crate::graph::*;
use std::hash::Hash;

/// A directed graph whose edges carry travel time and cost.
///
/// Unlike [AdjacencyGraph], parallel edges are kept:
/// adding the same edge twice leaves two out-edges.
#[derive(Clone)]
pub struct WeightedGraph<V>
where
    V: Hash + Eq,
{
    index: VertexIndex<V>,
    out_edges: Vec<Vec<WeightedEdge>>,
    edge_size: usize,
}

impl<V> Default for WeightedGraph<V>
where
    V: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for WeightedGraph<V>
where
    V: Hash + Eq,
{
    /// Creates a graph of the given vertices and no edges.
    fn from_iter<I: IntoIterator<Item = V>>(labels: I) -> Self {
        let mut res = Self::new();
        for label in labels {
            res.add_vertex(label);
        }
        res
    }
}

impl<V> WeightedGraph<V>
where
    V: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            index: VertexIndex::new(),
            out_edges: vec![],
            edge_size: 0,
        }
    }

    /// Appends an edge from `source` to `sink`.
    ///
    /// Returns `false` without touching the graph if either endpoint is out of range.
    pub fn add_edge(&mut self, source: &VertexId, sink: &VertexId, weights: Weights) -> bool {
        if !self.contains_vertex(source) || !self.contains_vertex(sink) {
            return false;
        }
        self.out_edges[source.to_raw()].push(WeightedEdge {
            source: *source,
            sink: *sink,
            weights,
        });
        self.edge_size += 1;
        true
    }

    /// Out-edges of `v`, empty if `v` is out of range.
    pub fn edges_from(&self, v: &VertexId) -> &[WeightedEdge] {
        self.out_edges
            .get(v.to_raw())
            .map(|x| x.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.out_edges.iter().flatten()
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.out_edges.clear();
        self.edge_size = 0;
    }
}

impl<V> QueryableGraph for WeightedGraph<V>
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
        Box::new(self.edges_from(v).iter().map(|e| e.sink))
    }

    fn degree(&self, v: &VertexId) -> usize {
        self.edges_from(v).len()
    }
}

impl<V> QueryableWeightedGraph for WeightedGraph<V>
where
    V: Hash + Eq,
{
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_> {
        Box::new(self.edges_from(v).iter().copied())
    }
}

impl<V> LabeledGraph for WeightedGraph<V>
where
    V: Hash + Eq,
{
    type Label = V;

    fn vertex_index(&self) -> &VertexIndex<V> {
        &self.index
    }
}

impl<V> GrowableGraph for WeightedGraph<V>
where
    V: Hash + Eq,
{
    fn add_vertex(&mut self, label: V) -> bool {
        if !self.index.add(label) {
            return false;
        }
        self.out_edges.push(vec![]);
        true
    }
}

impl<V> EdgeShrinkableGraph for WeightedGraph<V>
where
    V: Hash + Eq,
{
    /// Removes all parallel edges from `source` to `sink`.
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> usize {
        let Some(out) = self.out_edges.get_mut(source.to_raw()) else {
            return 0;
        };
        let before = out.len();
        out.retain(|e| e.sink != *sink);
        let removed = before - out.len();
        self.edge_size -= removed;
        removed
    }
}

impl<V> VertexShrinkableGraph for WeightedGraph<V>
where
    V: Hash + Eq,
{
    fn remove_vertex(&mut self, vertex: &VertexId) -> Option<V> {
        let label = self.index.remove(vertex)?;
        self.out_edges.remove(vertex.to_raw());
        for out in self.out_edges.iter_mut() {
            *out = out
                .iter()
                .filter_map(|e| {
                    let source = e.source.shifted_after_removal(vertex)?;
                    let sink = e.sink.shifted_after_removal(vertex)?;
                    Some(WeightedEdge {
                        source,
                        sink,
                        weights: e.weights,
                    })
                })
                .collect();
        }
        self.edge_size = self.out_edges.iter().map(|out| out.len()).sum();
        tracing::debug!(
            %vertex,
            vertex_size = self.index.len(),
            edge_size = self.edge_size,
            "removed a vertex"
        );
        Some(label)
    }
}

impl<V> std::fmt::Debug for WeightedGraph<V>
where
    V: Hash + Eq + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WeightedGraph {{")?;
        for (vid, label) in self.index.iter() {
            writeln!(f, "  {}:", label)?;
            for e in self.edges_from(&vid) {
                writeln!(
                    f,
                    "    -> {} ({}min, {} cost)",
                    self.label_of(&e.sink),
                    e.weights.time(),
                    e.weights.cost()
                )?;
            }
        }
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    fn w(time: f64, cost: f64) -> Weights {
        Weights::new(time, cost).unwrap()
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g: WeightedGraph<_> = ["KUL", "PEN"].into_iter().collect();
        let (kul, pen) = (VertexId::new(0), VertexId::new(1));
        assert!(g.add_edge(&kul, &pen, w(50.0, 120.0)));
        assert!(g.add_edge(&kul, &pen, w(50.0, 120.0)));
        assert_eq!(g.edges_from(&kul).len(), 2);
        assert_eq!(g.edge_size(), 2);
        assert_eq!(g.degree(&kul), 2);
        let sinks: Vec<_> = g.neighbors(&kul).collect();
        assert_eq!(sinks, vec![pen, pen]);
    }

    #[test]
    fn edges_out_of_range_are_rejected() {
        let mut g: WeightedGraph<_> = ["KUL"].into_iter().collect();
        assert!(!g.add_edge(&VertexId::new(0), &VertexId::new(1), w(1.0, 1.0)));
        assert_eq!(g.edge_size(), 0);
        assert!(g.edges_from(&VertexId::new(3)).is_empty());
    }

    #[test]
    fn remove_edge_drops_parallel_edges() {
        let mut g: WeightedGraph<_> = ["A", "B", "C"].into_iter().collect();
        let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
        g.add_edge(&a, &b, w(1.0, 2.0));
        g.add_edge(&a, &c, w(3.0, 4.0));
        g.add_edge(&a, &b, w(5.0, 6.0));
        assert_eq!(g.remove_edge(&a, &b), 2);
        assert_eq!(g.remove_edge(&a, &b), 0);
        let sinks: Vec<_> = g.neighbors(&a).collect();
        assert_eq!(sinks, vec![c]);
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn remove_vertex_keeps_weights_with_renumbered_edges() {
        let mut g: WeightedGraph<_> = ["A", "B", "C", "D"].into_iter().collect();
        let v = VertexId::new;
        g.add_edge(&v(0), &v(3), w(10.0, 20.0));
        g.add_edge(&v(1), &v(2), w(30.0, 40.0));
        g.add_edge(&v(3), &v(1), w(50.0, 60.0));
        assert_eq!(g.remove_vertex(&v(1)), Some("B"));
        let edges: Vec<_> = g
            .iter_edges()
            .map(|e| (e.source.to_raw(), e.sink.to_raw(), e.weights.time()))
            .collect();
        assert_eq!(edges, vec![(0, 2, 10.0)]);
        assert_eq!(g.index_of(&"D"), Some(v(2)));
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn clear() {
        let mut g: WeightedGraph<_> = ["A", "B"].into_iter().collect();
        g.add_edge(&VertexId::new(0), &VertexId::new(1), w(1.0, 1.0));
        g.clear();
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
    }

    #[quickcheck]
    fn follows_naive_graph(ops: Ops) {
        let (trial, oracle) = ops.replay_weighted();
        let labels: Vec<_> = trial.vertex_index().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, oracle.labels);
        let edges: Vec<_> = trial
            .iter_vertices()
            .flat_map(|v| trial.out_edges(&v).collect::<Vec<_>>())
            .map(|e| {
                (
                    e.source.to_raw(),
                    e.sink.to_raw(),
                    e.weights.time() as u8,
                    e.weights.cost() as u8,
                )
            })
            .collect();
        let mut expected = oracle.edges.clone();
        expected.sort_by_key(|(src, _, _, _)| *src);
        assert_eq!(edges, expected);
        assert_eq!(trial.edge_size(), edges.len());
    }
}
