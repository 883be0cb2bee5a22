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

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use netscan::{count_triangles, max_clique, max_clique_bounded, ConnectionGraph};

/// Analyze a pairwise connection map: count triangles touching a name prefix
/// and report the largest fully-connected group.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Input file with one `<id>-<id>` connection record per line.
    input: PathBuf,

    /// Count only triangles with at least one member starting with this prefix.
    #[arg(long, default_value = "t")]
    predicate_prefix: String,

    /// Stop the clique search after this many expansions instead of running
    /// it to completion.
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let records: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    tracing::debug!(lines = records.len(), "input loaded");

    let graph = ConnectionGraph::from_records(&records)?;
    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    let prefix = args.predicate_prefix.as_str();
    let triangles = count_triangles(&graph, |name| name.starts_with(prefix));
    println!("Triangles with a {prefix:?} member: {triangles}");

    let clique = match args.max_steps {
        Some(limit) => max_clique_bounded(&graph, limit)
            .context("clique search did not finish within --max-steps")?,
        None => max_clique(&graph),
    };
    println!("Largest clique: {}", clique.join(","));
    Ok(())
}
