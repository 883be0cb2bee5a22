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

//! Exact maximum-clique search by exhaustive clique expansion.
//!
//! Every node seeds a singleton clique which is grown one member at a time.
//! Candidates are drawn only from the neighborhood of the clique's smallest
//! member (any extension must be adjacent to every member, the smallest one
//! included, so nothing is lost), and each grown clique is canonicalized to
//! its sorted rank sequence and checked against a visited set, so a clique
//! reachable through many insertion orders is expanded exactly once. This
//! prunes the bulk of redundant work while staying exact: the search still
//! reaches every clique of the graph.

use foldhash::{HashSet, HashSetExt};
use rayon::prelude::*;

use crate::error::GraphError;
use crate::graph::{ConnectionGraph, RankedAdjacency};

/// Find a maximum clique of the graph.
///
/// Returns the member identifiers in ascending lexicographic order; empty
/// for an empty graph. If several cliques tie for the maximum size, any one
/// of them may be returned.
pub fn max_clique(graph: &ConnectionGraph) -> Vec<String> {
    let adj = RankedAdjacency::new(graph);
    let mut search = Search::new(&adj, None);
    search.run();
    adj.names_of(&search.best)
}

/// Like [`max_clique`], but give up after `max_steps` clique expansions.
///
/// A truncated search surfaces [`GraphError::SearchIncomplete`] carrying the
/// largest clique seen so far, so callers cannot mistake a lower bound for a
/// proven maximum.
pub fn max_clique_bounded(
    graph: &ConnectionGraph,
    max_steps: usize,
) -> Result<Vec<String>, GraphError> {
    let adj = RankedAdjacency::new(graph);
    let mut search = Search::new(&adj, Some(max_steps));
    if search.run() {
        Ok(adj.names_of(&search.best))
    } else {
        Err(GraphError::SearchIncomplete {
            steps: search.steps,
            best: adj.names_of(&search.best),
        })
    }
}

/// [`max_clique`] parallelized across starting nodes.
///
/// Each starting node explores with its own visited set, so branches never
/// synchronize; the per-branch results are reduced by cardinality at the
/// end. The partitioned visited sets re-expand cliques shared between
/// branches, trading some repeated work for lock freedom. The result is a
/// valid maximum clique either way, though which of several tied maxima wins
/// depends on the reduction order.
pub fn max_clique_parallel(graph: &ConnectionGraph) -> Vec<String> {
    let adj = RankedAdjacency::new(graph);
    let best = (0..adj.len() as u32)
        .into_par_iter()
        .map(|start| {
            let mut search = Search::new(&adj, None);
            search.best.push(start);
            search.expand(&mut vec![start]);
            search.best
        })
        .reduce(Vec::new, |a, b| if b.len() > a.len() { b } else { a });
    adj.names_of(&best)
}

/// One search invocation: the visited cache, the best clique so far, and the
/// optional step budget. Discarded once the result is produced.
struct Search<'a> {
    adj: &'a RankedAdjacency,
    visited: HashSet<Vec<u32>>,
    best: Vec<u32>,
    steps: usize,
    max_steps: Option<usize>,
}

impl<'a> Search<'a> {
    fn new(adj: &'a RankedAdjacency, max_steps: Option<usize>) -> Self {
        Self {
            adj,
            visited: HashSet::new(),
            best: Vec::new(),
            steps: 0,
            max_steps,
        }
    }

    /// Expand from every singleton. Returns false if the budget ran out.
    fn run(&mut self) -> bool {
        let mut current: Vec<u32> = Vec::with_capacity(4);
        for start in 0..self.adj.len() as u32 {
            if self.best.is_empty() {
                self.best.push(start);
            }
            current.clear();
            current.push(start);
            if !self.expand(&mut current) {
                return false;
            }
        }
        true
    }

    /// Grow `current` (sorted ranks) by every acceptable candidate in turn.
    /// Returns false as soon as the budget is exhausted.
    fn expand(&mut self, current: &mut Vec<u32>) -> bool {
        let adj = self.adj;
        let anchor = current[0];
        for &candidate in adj.neighbors(anchor) {
            let pos = match current.binary_search(&candidate) {
                Ok(_) => continue, // already a member
                Err(pos) => pos,
            };
            if !current
                .iter()
                .all(|&member| adj.are_adjacent(candidate, member))
            {
                continue;
            }
            current.insert(pos, candidate);
            // The same grown clique is reachable by inserting its members in
            // any order; only its first construction is expanded.
            if self.visited.insert(current.clone()) {
                if self.max_steps == Some(self.steps) {
                    current.remove(pos);
                    return false;
                }
                self.steps += 1;
                if current.len() > self.best.len() {
                    self.best = current.clone();
                }
                if !self.expand(current) {
                    current.remove(pos);
                    return false;
                }
            }
            current.remove(pos);
        }
        true
    }
}
