use super::Path;
use crate::graph::*;
use std::collections::VecDeque;

/// A spanning tree grown by a traversal from its root.
///
/// Vertices unreachable from the root have no parent and are absent from the search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: VertexId,
    parent: Vec<Option<VertexId>>,
    search_order: Vec<VertexId>,
}

impl Tree {
    fn grow<I>(root: VertexId, vertex_size: usize, walk: I) -> Self
    where
        I: Iterator<Item = (VertexId, Option<VertexId>)>,
    {
        let mut parent = vec![None; vertex_size];
        let mut search_order = Vec::with_capacity(vertex_size);
        for (v, p) in walk {
            parent[v.to_raw()] = p;
            search_order.push(v);
        }
        tracing::trace!(
            %root,
            reached = search_order.len(),
            vertex_size,
            "grew a spanning tree"
        );
        Self {
            root,
            parent,
            search_order,
        }
    }

    pub fn root(&self) -> VertexId {
        self.root
    }

    /// The vertex from which `v` was discovered.
    ///
    /// `None` for the root, for unreached vertices and for ID's out of range.
    pub fn parent(&self, v: &VertexId) -> Option<VertexId> {
        self.parent.get(v.to_raw()).copied().flatten()
    }

    /// Reached vertices in the order they were visited.
    pub fn search_order(&self) -> &[VertexId] {
        &self.search_order
    }

    pub fn is_reached(&self, v: &VertexId) -> bool {
        self.parent(v).is_some() || (*v == self.root && !self.search_order.is_empty())
    }

    /// Tree path from the root to `v`, empty if `v` is not reached.
    pub fn path_to(&self, v: &VertexId) -> Path {
        if !self.is_reached(v) {
            return Path::empty();
        }
        Path::backtrack(*v, |x| self.parent(x))
    }
}

/// Breadth-first search.
///
/// Paths in the resulting [Tree] have the fewest edges possible.
pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    fn bfs(&self, root: &VertexId) -> Tree {
        Tree::grow(*root, self.vertex_size(), BfsIter::new(self, root))
    }

    /// Iterates over reached vertices, with their parents, in breadth-first order.
    fn bfs_iter(
        &self,
        root: &VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, Option<VertexId>)> + '_> {
        Box::new(BfsIter::new(self, root))
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}

/// Depth-first search in pre-order.
///
/// Neighbors are explored in their insertion order,
/// exactly as a recursive search would do, but without recursion.
pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    fn dfs(&self, root: &VertexId) -> Tree {
        Tree::grow(*root, self.vertex_size(), DfsIter::new(self, root))
    }

    /// Iterates over reached vertices, with their parents, in depth-first pre-order.
    fn dfs_iter(
        &self,
        root: &VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, Option<VertexId>)> + '_> {
        Box::new(DfsIter::new(self, root))
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

struct BfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
    queue: VecDeque<VertexId>,
}

impl<'a, G> BfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, root: &VertexId) -> Self {
        let n = graph.vertex_size();
        let mut res = Self {
            graph,
            visited: vec![false; n],
            parent: vec![None; n],
            queue: VecDeque::new(),
        };
        if graph.contains_vertex(root) {
            // marked on enqueue, so that no vertex is enqueued twice
            res.visited[root.to_raw()] = true;
            res.queue.push_back(*root);
        }
        res
    }
}

impl<'a, G> Iterator for BfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = (VertexId, Option<VertexId>);

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for w in self.graph.neighbors(&u) {
            if !self.visited[w.to_raw()] {
                self.visited[w.to_raw()] = true;
                self.parent[w.to_raw()] = Some(u);
                self.queue.push_back(w);
            }
        }
        Some((u, self.parent[u.to_raw()]))
    }
}

struct DfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    visited: Vec<bool>,
    root: Option<VertexId>,
    stack: Vec<(VertexId, Box<dyn Iterator<Item = VertexId> + 'a>)>,
}

impl<'a, G> DfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G, root: &VertexId) -> Self {
        Self {
            graph,
            visited: vec![false; graph.vertex_size()],
            root: Some(*root).filter(|r| graph.contains_vertex(r)),
            stack: vec![],
        }
    }

    fn enter(&mut self, v: VertexId) {
        let graph = self.graph;
        self.visited[v.to_raw()] = true;
        self.stack.push((v, graph.neighbors(&v)));
    }
}

impl<'a, G> Iterator for DfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = (VertexId, Option<VertexId>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.enter(root);
            return Some((root, None));
        }
        loop {
            let (u, next) = match self.stack.last_mut() {
                None => return None,
                Some((u, neighbors)) => (*u, neighbors.next()),
            };
            match next {
                Some(w) if !self.visited[w.to_raw()] => {
                    self.enter(w);
                    return Some((w, Some(u)));
                }
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
