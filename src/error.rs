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

use thiserror::Error;

/// Errors produced while building a graph or running the bounded clique search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A connection record did not decompose into exactly two non-empty
    /// identifiers. The build aborts; there is no partial graph to fall
    /// back to.
    #[error("record {line}: expected `<id>-<id>`, got {record:?}")]
    Parse { line: usize, record: String },

    /// The step-bounded clique search stopped before exhausting all
    /// candidates. `best` holds the largest clique found so far and is a
    /// lower bound, not a guaranteed maximum.
    #[error("clique search stopped after {steps} steps; best clique so far has {} members", best.len())]
    SearchIncomplete { steps: usize, best: Vec<String> },
}
