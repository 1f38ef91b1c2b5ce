use crate::graph::*;
use std::hash::Hash;

pub trait GrowableGraph: LabeledGraph {
    /// Appends a vertex without out-edges.
    /// Returns `false` if `label` is already present.
    fn add_vertex(&mut self, label: Self::Label) -> bool;
}

pub trait EdgeShrinkableGraph {
    /// Removes edges from `source` to `sink` and returns how many are gone.
    fn remove_edge(&mut self, source: &VertexId, sink: &VertexId) -> usize;
}

pub trait VertexShrinkableGraph: EdgeShrinkableGraph + LabeledGraph {
    /// Removes a vertex and every edge incident to it.
    /// Vertices and edge endpoints above it are shifted down by one.
    fn remove_vertex(&mut self, vertex: &VertexId) -> Option<Self::Label>;
}

pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size()
    }
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size()).map(VertexId::new))
    }

    fn edge_size(&self) -> usize;
    /// Sinks of out-edges of `v` in the order they were added.
    fn neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn degree(&self, v: &VertexId) -> usize {
        self.neighbors(v).count()
    }
}

pub trait QueryableWeightedGraph: QueryableGraph {
    /// Out-edges of `v` in the order they were added.
    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = WeightedEdge> + '_>;
}

/// Graphs whose vertices are labeled through a [VertexIndex].
pub trait LabeledGraph: QueryableGraph {
    type Label: Hash + Eq;

    fn vertex_index(&self) -> &VertexIndex<Self::Label>;

    fn index_of(&self, label: &Self::Label) -> Option<VertexId> {
        self.vertex_index().index_of(label)
    }

    /// # Panics
    ///
    /// If `vid` is not in this graph.
    fn label_of(&self, vid: &VertexId) -> &Self::Label {
        self.vertex_index().label_of(vid)
    }

    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
