/// Position of a vertex in its graph, which is essentially `usize`.
///
/// Vertex ID's are dense: a graph of `n` vertices uses exactly `0..n`.
/// Removing a vertex renumbers every higher ID down by one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const MIN: VertexId = VertexId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The ID this one takes after the vertex `removed` is dropped,
    /// or `None` if it is `removed` itself.
    pub fn shifted_after_removal(&self, removed: &VertexId) -> Option<Self> {
        match self.0.cmp(&removed.0) {
            std::cmp::Ordering::Less => Some(*self),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(Self(self.0 - 1)),
        }
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
