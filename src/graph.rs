// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Graph construction from pairwise connection records.
//!
//! A [`ConnectionGraph`] is built once from `"A-B"` records and never mutated
//! afterwards; the analyses in [`crate::triangles`] and [`crate::clique`] are
//! read-only over it. Internally the analyses run on [`RankedAdjacency`],
//! which re-expresses the graph as dense `u32` ranks assigned in lexicographic
//! name order, so that numerically sorted rank sequences double as canonical
//! clique keys.

use foldhash::{HashMap, HashMapExt, HashSet, HashSetExt};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::error::GraphError;

/// An immutable undirected graph over named nodes.
///
/// Adjacency is symmetric by construction, there are no self-loops and no
/// parallel edges, and a node exists only if at least one record mentions it.
#[derive(Debug)]
pub struct ConnectionGraph {
    graph: UnGraph<Box<str>, ()>,
    indices: HashMap<Box<str>, NodeIndex>,
}

impl ConnectionGraph {
    /// Build a graph from `"A-B"` connection records.
    ///
    /// Each record must split on `-` into exactly two non-empty identifiers;
    /// surrounding whitespace is trimmed. Duplicate records are a no-op.
    /// A malformed record (wrong separator count, empty or whitespace-bearing
    /// identifier, or an identifier connected to itself) fails the whole
    /// build with [`GraphError::Parse`].
    pub fn from_records<I, S>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = UnGraph::default();
        let mut indices: HashMap<Box<str>, NodeIndex> = HashMap::new();
        for (num, record) in records.into_iter().enumerate() {
            let record = record.as_ref();
            let (a, b) = split_record(record).ok_or_else(|| GraphError::Parse {
                line: num + 1,
                record: record.to_string(),
            })?;
            let a = intern(&mut graph, &mut indices, a);
            let b = intern(&mut graph, &mut indices, b);
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, ());
            }
        }
        Ok(Self { graph, indices })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterate over node identifiers in unspecified order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|name| name.as_ref())
    }

    /// Neighbors of `name`; empty if the node is unknown.
    pub fn neighbors_of<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.indices
            .get(name)
            .into_iter()
            .flat_map(move |&idx| self.graph.neighbors(idx))
            .map(move |neighbor| self.graph[neighbor].as_ref())
    }

    /// Whether `a` and `b` are directly connected.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.indices.get(a), self.indices.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub(crate) fn petgraph(&self) -> &UnGraph<Box<str>, ()> {
        &self.graph
    }
}

/// Split a record into its two identifiers, or `None` if malformed.
fn split_record(record: &str) -> Option<(&str, &str)> {
    let mut parts = record.split('-');
    let a = parts.next()?.trim();
    let b = parts.next()?.trim();
    if parts.next().is_some() {
        return None;
    }
    if a.is_empty() || b.is_empty() || a == b {
        return None;
    }
    if a.contains(char::is_whitespace) || b.contains(char::is_whitespace) {
        return None;
    }
    Some((a, b))
}

fn intern(
    graph: &mut UnGraph<Box<str>, ()>,
    indices: &mut HashMap<Box<str>, NodeIndex>,
    name: &str,
) -> NodeIndex {
    if let Some(&idx) = indices.get(name) {
        return idx;
    }
    let idx = graph.add_node(Box::from(name));
    indices.insert(Box::from(name), idx);
    idx
}

/// Rank-indexed adjacency shared by both analyses.
///
/// Ranks are assigned in ascending lexicographic name order, so rank order
/// and name order agree and a sorted rank sequence is a canonical key for a
/// node set.
pub(crate) struct RankedAdjacency {
    names: Vec<Box<str>>,
    neighbors: Vec<HashSet<u32>>,
}

impl RankedAdjacency {
    pub(crate) fn new(graph: &ConnectionGraph) -> Self {
        let g = graph.petgraph();
        let mut order: Vec<NodeIndex> = g.node_indices().collect();
        order.sort_unstable_by(|&a, &b| g[a].cmp(&g[b]));

        // Node indices are dense (the graph never removes nodes), so a flat
        // index -> rank table suffices.
        let mut rank_by_index = vec![0u32; g.node_count()];
        let mut names: Vec<Box<str>> = Vec::with_capacity(order.len());
        for (rank, &idx) in order.iter().enumerate() {
            rank_by_index[idx.index()] = rank as u32;
            names.push(g[idx].clone());
        }

        let mut neighbors: Vec<HashSet<u32>> = vec![HashSet::new(); names.len()];
        for edge in g.edge_references() {
            let s = rank_by_index[edge.source().index()];
            let t = rank_by_index[edge.target().index()];
            neighbors[s as usize].insert(t);
            neighbors[t as usize].insert(s);
        }
        Self { names, neighbors }
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn name(&self, rank: u32) -> &str {
        &self.names[rank as usize]
    }

    pub(crate) fn neighbors(&self, rank: u32) -> &HashSet<u32> {
        &self.neighbors[rank as usize]
    }

    pub(crate) fn are_adjacent(&self, a: u32, b: u32) -> bool {
        self.neighbors[a as usize].contains(&b)
    }

    /// Map a sorted rank sequence back to identifiers (ascending, since rank
    /// order is name order).
    pub(crate) fn names_of(&self, ranks: &[u32]) -> Vec<String> {
        ranks
            .iter()
            .map(|&rank| self.names[rank as usize].to_string())
            .collect()
    }
}
