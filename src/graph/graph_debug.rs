use crate::graph::*;

/// Prints each vertex followed by its neighbors, one vertex per line.
///
/// ```text
/// KUL -> PEN BKI
/// PEN -> KUL
/// BKI ->
/// ```
pub struct GraphDebug<'a, G>
where
    G: LabeledGraph,
{
    graph: &'a G,
    init_indent: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: LabeledGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
        }
    }

    pub fn indent(mut self, init: usize) -> Self {
        self.init_indent = init;
        self
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: LabeledGraph,
    G::Label: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.iter_vertices() {
            write!(f, "{:indent$}", "", indent = self.init_indent)?;
            write!(f, "{} ->", self.graph.label_of(&v))?;
            for w in self.graph.neighbors(&v) {
                write!(f, " {}", self.graph.label_of(&w))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
