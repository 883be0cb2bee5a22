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

//! Triangle counting restricted by a node predicate.

use foldhash::{HashSet, HashSetExt};

use crate::graph::{ConnectionGraph, RankedAdjacency};

/// Count distinct triangles with at least one member satisfying `predicate`.
///
/// A triangle is an unordered set of three nodes that are pairwise connected.
/// Each qualifying triangle is counted exactly once no matter how many of its
/// members match the predicate: every found triple is canonicalized to its
/// sorted rank key before insertion into the dedup set.
///
/// Work is bounded by the degree sum over predicate nodes and their
/// neighbors, which stays cheap as long as predicate matches are a small
/// fraction of the graph.
pub fn count_triangles<F>(graph: &ConnectionGraph, predicate: F) -> usize
where
    F: Fn(&str) -> bool,
{
    let adj = RankedAdjacency::new(graph);
    let mut seen: HashSet<[u32; 3]> = HashSet::new();
    for a in 0..adj.len() as u32 {
        if !predicate(adj.name(a)) {
            continue;
        }
        for &b in adj.neighbors(a) {
            for &c in adj.neighbors(b) {
                // c == b is impossible (no self-loops); c == a closes back
                // onto the start and is not a triangle.
                if c != a && adj.are_adjacent(a, c) {
                    let mut key = [a, b, c];
                    key.sort_unstable();
                    seen.insert(key);
                }
            }
        }
    }
    seen.len()
}
