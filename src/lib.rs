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

//! Clique analysis over pairwise connection maps.
//!
//! The crate builds an undirected graph from `"A-B"` connection records and
//! answers two questions about it: how many distinct triangles have at least
//! one member matching a naming predicate, and which fully-connected subgraph
//! is the largest.
//!
//! ```
//! use netscan::{count_triangles, max_clique, ConnectionGraph};
//!
//! let graph = ConnectionGraph::from_records(["ta-co", "co-de", "ta-de", "de-ka"])?;
//! assert_eq!(count_triangles(&graph, |name| name.starts_with('t')), 1);
//! assert_eq!(max_clique(&graph), vec!["co", "de", "ta"]);
//! # Ok::<(), netscan::GraphError>(())
//! ```

pub mod clique;
pub mod error;
pub mod graph;
pub mod triangles;

pub use clique::{max_clique, max_clique_bounded, max_clique_parallel};
pub use error::GraphError;
pub use graph::ConnectionGraph;
pub use triangles::count_triangles;
