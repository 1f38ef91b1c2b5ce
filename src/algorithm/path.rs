use crate::graph::*;

/// Vertices from a source to a target, both inclusive.
///
/// An empty path means there is no path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<VertexId>);

impl Path {
    pub fn empty() -> Self {
        Self(vec![])
    }

    /// Walks `predecessor` backward from `target` until a vertex without one.
    pub(crate) fn backtrack<F>(target: VertexId, predecessor: F) -> Self
    where
        F: Fn(&VertexId) -> Option<VertexId>,
    {
        let mut res: Vec<_> = std::iter::successors(Some(target), predecessor).collect();
        res.reverse();
        Self(res)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges, `None` for the empty path.
    pub fn hops(&self) -> Option<usize> {
        self.0.len().checked_sub(1)
    }

    pub fn source(&self) -> Option<VertexId> {
        self.0.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.0.last().copied()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    pub fn iter_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.0.windows(2).map(|w| Edge {
            source: w[0],
            sink: w[1],
        })
    }

    /// Labels along the path in `graph`.
    ///
    /// # Panics
    ///
    /// If the path was computed on another graph, or on this one before a vertex removal.
    pub fn labels<'a, G>(&self, graph: &'a G) -> Vec<&'a G::Label>
    where
        G: LabeledGraph,
    {
        self.0.iter().map(|v| graph.label_of(v)).collect()
    }
}

impl From<Path> for Vec<VertexId> {
    fn from(path: Path) -> Self {
        path.0
    }
}
