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

//! End-to-end checks over small graphs with known triangle counts and
//! maximum cliques.

use netscan::{count_triangles, max_clique, max_clique_parallel, ConnectionGraph, GraphError};

fn graph(records: &[&str]) -> ConnectionGraph {
    ConnectionGraph::from_records(records).unwrap()
}

#[test]
fn one_triangle() {
    let g = graph(&["A-B", "B-C", "A-C"]);
    assert_eq!(count_triangles(&g, |_| true), 1);
    assert_eq!(max_clique(&g), vec!["A", "B", "C"]);
}

#[test]
fn open_path() {
    let g = graph(&["A-B", "B-C"]);
    assert_eq!(count_triangles(&g, |_| true), 0);
    let clique = max_clique(&g);
    assert!(clique == vec!["A", "B"] || clique == vec!["B", "C"]);
}

#[test]
fn two_disjoint_triangles() {
    let g = graph(&["A-B", "B-C", "A-C", "X-Y", "Y-Z", "X-Z"]);
    assert_eq!(count_triangles(&g, |_| true), 2);
    let clique = max_clique(&g);
    assert!(clique == vec!["A", "B", "C"] || clique == vec!["X", "Y", "Z"]);
}

#[test]
fn complete_four_graph() {
    let g = graph(&["A-B", "A-C", "A-D", "B-C", "B-D", "C-D"]);
    assert_eq!(count_triangles(&g, |_| true), 4);
    assert_eq!(max_clique(&g), vec!["A", "B", "C", "D"]);
    assert_eq!(max_clique_parallel(&g), vec!["A", "B", "C", "D"]);
}

#[test]
fn malformed_records_abort_the_build() {
    for bad in ["A-B-C", "A-"] {
        match ConnectionGraph::from_records(["A-B", bad]) {
            Err(GraphError::Parse { line, record }) => {
                assert_eq!(line, 2);
                assert_eq!(record, bad);
            }
            other => panic!("expected parse failure for {bad:?}, got {other:?}"),
        }
    }
}

// The worked example from the source domain: a 13-node connection map with
// seven t-triangles and a known largest clique of four.
const SAMPLE: &[&str] = &[
    "kh-tc", "qp-kh", "de-cg", "ka-co", "yn-aq", "qp-ub", "cg-tb", "vc-aq", "tb-ka", "wh-tc",
    "yn-cg", "kh-ub", "ta-co", "de-co", "tc-td", "tb-wq", "wh-td", "ta-ka", "td-qp", "aq-cg",
    "wq-ub", "ub-vc", "de-ta", "wq-aq", "wq-vc", "wh-yn", "ka-de", "kh-ta", "co-tc", "wh-qp",
    "tb-vc", "td-yn",
];

#[test]
fn sample_map_triangles() {
    let g = graph(SAMPLE);
    assert_eq!(count_triangles(&g, |name| name.starts_with('t')), 7);
}

#[test]
fn sample_map_max_clique() {
    let g = graph(SAMPLE);
    let clique = max_clique(&g);
    assert_eq!(clique, vec!["co", "de", "ka", "ta"]);
    assert_eq!(clique.join(","), "co,de,ka,ta");
    assert_eq!(max_clique_parallel(&g), vec!["co", "de", "ka", "ta"]);
}

#[test]
fn analyses_are_order_insensitive() {
    let mut reversed: Vec<&str> = SAMPLE.to_vec();
    reversed.reverse();
    let g = graph(SAMPLE);
    let r = graph(&reversed);
    assert_eq!(
        count_triangles(&g, |n| n.starts_with('t')),
        count_triangles(&r, |n| n.starts_with('t'))
    );
    assert_eq!(max_clique(&g), max_clique(&r));
}
