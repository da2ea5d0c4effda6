//! The [`WeightedGraph`] type, a dense, symmetric cost matrix.
//!
//! Every declared node has an entry against every other node. An entry is
//! `None` when there is no direct edge, so a zero-cost edge is distinct from
//! a missing one. The diagonal is never stored: self distance is always 0.
//!
//! Each node also keeps an adjacency list sorted by node index, so that
//! neighbour iteration costs O(degree) instead of a full matrix row.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cost::{Cost, UNREACHABLE, is_valid_edge_cost};
use crate::error::GraphError;

/// An undirected weighted graph over arbitrary node identifiers.
///
/// Nodes keep their insertion order, which is also the order in which
/// searches break ties.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    costs: Vec<Vec<Option<Cost>>>,
    adjacency: Vec<Vec<(usize, Cost)>>,
    total_cost: Cost,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            costs: Vec::new(),
            adjacency: Vec::new(),
            total_cost: 0.0,
        }
    }
}

impl<N> WeightedGraph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node list and `(a, b, cost)` edge triples.
    ///
    /// All nodes are declared first; each edge is then applied in both
    /// directions. Fails if an edge references a node missing from `nodes`.
    pub fn from_parts<I, E>(nodes: I, edges: E) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = N>,
        E: IntoIterator<Item = (N, N, Cost)>,
    {
        let mut g = Self::new();
        for n in nodes {
            g.append_node(n);
        }
        for (a, b, cost) in edges {
            g.append_edge(&a, &b, cost)?;
        }
        Ok(g)
    }

    /// Declare a new node with no edges.
    ///
    /// Adding a node that already exists is a no-op: its edges are kept and
    /// `false` is returned.
    pub fn append_node(&mut self, n: N) -> bool {
        if self.index.contains_key(&n) {
            log::debug!("node {n:?} already declared, keeping its edges");
            return false;
        }
        let idx = self.nodes.len();
        for row in self.costs.iter_mut() {
            row.push(None);
        }
        self.costs.push(vec![None; idx + 1]);
        self.adjacency.push(Vec::new());
        self.index.insert(n.clone(), idx);
        self.nodes.push(n);
        true
    }

    /// Set the cost of the undirected edge `a -- b`, replacing any previous
    /// cost.
    ///
    /// The sum of all edge costs must stay finite, which keeps every path
    /// distance finite; an edge that would break this fails with
    /// [`GraphError::CostOverflow`].
    pub fn append_edge(&mut self, a: &N, b: &N, cost: Cost) -> Result<(), GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if ia == ib {
            return Err(GraphError::SelfLoop(format!("{a:?}")));
        }
        if !is_valid_edge_cost(cost) {
            return Err(GraphError::InvalidCost {
                a: format!("{a:?}"),
                b: format!("{b:?}"),
                cost,
            });
        }
        let previous = self.costs[ia][ib].unwrap_or(0.0);
        let total = self.total_cost - previous + cost;
        if !total.is_finite() {
            return Err(GraphError::CostOverflow {
                a: format!("{a:?}"),
                b: format!("{b:?}"),
                cost,
            });
        }
        self.total_cost = total;
        self.costs[ia][ib] = Some(cost);
        self.costs[ib][ia] = Some(cost);
        self.link(ia, ib, cost);
        self.link(ib, ia, cost);
        Ok(())
    }

    /// Set `j` in the sorted adjacency list of `i`.
    fn link(&mut self, i: usize, j: usize, cost: Cost) {
        let list = &mut self.adjacency[i];
        match list.binary_search_by_key(&j, |&(k, _)| k) {
            Ok(pos) => list[pos].1 = cost,
            Err(pos) => list.insert(pos, (j, cost)),
        }
    }

    /// Cost of moving directly from `a` to `b`.
    ///
    /// Returns 0 when `a == b`, the edge cost when an edge exists and
    /// [`UNREACHABLE`] otherwise.
    pub fn cost(&self, a: &N, b: &N) -> Result<Cost, GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.cost_at(ia, ib))
    }

    /// The raw table entry for `a -- b`: `None` when there is no direct edge.
    pub fn edge(&self, a: &N, b: &N) -> Result<Option<Cost>, GraphError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        Ok(self.costs[ia][ib])
    }

    /// Direct neighbours of `n` with their edge costs, in insertion order.
    pub fn neighbors<'g>(
        &'g self,
        n: &N,
    ) -> Result<impl Iterator<Item = (&'g N, Cost)> + use<'g, N>, GraphError> {
        let i = self.index_of(n)?;
        Ok(self
            .neighbor_indices(i)
            .map(move |(j, cost)| (&self.nodes[j], cost)))
    }

    /// Whether `n` is declared.
    #[inline]
    pub fn contains(&self, n: &N) -> bool {
        self.index.contains_key(n)
    }

    /// Declared nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of declared nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Read-only view of the whole cost matrix.
    pub fn table(&self) -> CostTable<'_, N> {
        CostTable { graph: self }
    }

    // -----------------------------------------------------------------------
    // Index helpers used by the search strategies
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn index_of(&self, n: &N) -> Result<usize, GraphError> {
        self.index
            .get(n)
            .copied()
            .ok_or_else(|| GraphError::undeclared(n))
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &N {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn cost_at(&self, i: usize, j: usize) -> Cost {
        if i == j {
            return 0.0;
        }
        self.costs[i][j].unwrap_or(UNREACHABLE)
    }

    /// Neighbours of node `i` in index order.
    pub(crate) fn neighbor_indices(&self, i: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.adjacency[i].iter().copied()
    }
}

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Borrowed, read-only view of a [`WeightedGraph`]'s cost matrix.
///
/// `Display` prints a tab-separated matrix with `-` for missing edges.
pub struct CostTable<'a, N> {
    graph: &'a WeightedGraph<N>,
}

impl<'a, N> CostTable<'a, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Table entry for `a -- b`; the outer `None` means a node is undeclared.
    pub fn get(&self, a: &N, b: &N) -> Option<Option<Cost>> {
        self.graph.edge(a, b).ok()
    }

    /// The full row of `n`, in insertion order.
    pub fn row(&self, n: &N) -> Option<impl Iterator<Item = (&'a N, Option<Cost>)> + use<'a, N>> {
        let graph = self.graph;
        let i = graph.index_of(n).ok()?;
        Some(
            graph
                .nodes
                .iter()
                .zip(graph.costs[i].iter().copied()),
        )
    }

    /// Row labels, in insertion order.
    pub fn nodes(&self) -> &'a [N] {
        &self.graph.nodes
    }
}

impl<N> fmt::Display for CostTable<'_, N>
where
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes = &self.graph.nodes;
        for n in nodes {
            write!(f, "\t{n}")?;
        }
        writeln!(f)?;
        for (i, n) in nodes.iter().enumerate() {
            write!(f, "{n}")?;
            for (j, c) in self.graph.costs[i].iter().enumerate() {
                match c {
                    Some(cost) => write!(f, "\t{cost}")?,
                    None if i == j => write!(f, "\t0")?,
                    None => write!(f, "\t-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
