//! Graph instance contract consumed by the engine.
//!
//! The engine never reads graph files itself; it only needs a vertex
//! count, an adjacency predicate and enumerable edge lists. Any loader
//! or generator that can produce a [`MatrixInstance`] (or its own
//! [`GraphInstance`] implementation) can drive a run.

/// A directed listing of one undirected adjacency.
///
/// Edges may appear in either direction in an edge list; adjacency is
/// always symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

/// Read-only view of a fixed graph to be colored.
pub trait GraphInstance {
    /// Number of vertices.
    fn size(&self) -> usize;

    /// Whether vertices `i` and `j` are adjacent. Symmetric.
    fn are_connected(&self, i: usize, j: usize) -> bool;

    /// Every undirected edge exactly once.
    fn all_edges(&self) -> &[Edge];

    /// Edges leaving `vertex`, one per neighbor, with `from == vertex`.
    fn adjacent_edges(&self, vertex: usize) -> &[Edge];
}

/// Adjacency-matrix backed [`GraphInstance`] built from an in-memory
/// edge list.
///
/// Duplicate and reversed listings of the same pair are collapsed;
/// self-loops are ignored.
#[derive(Debug, Clone)]
pub struct MatrixInstance {
    size: usize,
    matrix: Vec<Vec<bool>>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Edge>>,
}

impl MatrixInstance {
    pub fn new(size: usize, edge_pairs: &[(usize, usize)]) -> Self {
        let mut matrix = vec![vec![false; size]; size];
        let mut edges = Vec::new();
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); size];

        for &(from, to) in edge_pairs {
            if from == to || matrix[from][to] {
                continue;
            }
            matrix[from][to] = true;
            matrix[to][from] = true;
            edges.push(Edge::new(from, to));
            adjacency[from].push(Edge::new(from, to));
            adjacency[to].push(Edge::new(to, from));
        }

        Self {
            size,
            matrix,
            edges,
            adjacency,
        }
    }
}

impl GraphInstance for MatrixInstance {
    fn size(&self) -> usize {
        self.size
    }

    fn are_connected(&self, i: usize, j: usize) -> bool {
        self.matrix[i][j]
    }

    fn all_edges(&self) -> &[Edge] {
        &self.edges
    }

    fn adjacent_edges(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }
}
