//! Command implementation and argument parsing for the provgraph CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use provgraph_core::{
    GeneratorParams, GraphError, GraphModel, RootPolicy, ShortestPathTree, StructuralSummary,
    components, generate_random_graph, metadata, multi_source_bfs_with_policy, seed_from_clock,
    shortest_path_trees,
};
use provgraph_providers_gml::{GmlError, LabelPolicy, read_path, write_path};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "provgraph",
    about = "Generate or load an undirected graph, trace shortest paths, and annotate it."
)]
#[command(group(ArgGroup::new("graph_source").required(true).args(["input", "random"])))]
pub struct Cli {
    /// GML file to load.
    #[arg(long, value_name = "FILE.gml")]
    pub input: Option<PathBuf>,

    /// Generate an Erdős–Rényi graph with `N` nodes and density coefficient
    /// `C` (edge probability `C * ln(N) / N`).
    #[arg(long, num_args = 2, value_names = ["N", "C"])]
    pub random: Option<Vec<String>>,

    /// Seed for `--random`; defaults to one derived from the clock.
    #[arg(long, requires = "random", conflicts_with = "input")]
    pub seed: Option<u64>,

    /// Root node identities for the shortest-path search.
    #[arg(long, num_args = 1.., value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Analyse structure and attach the results as attributes.
    #[arg(long)]
    pub analyze: bool,

    /// Write the annotated graph to this GML file.
    #[arg(long, value_name = "FILE.gml")]
    pub output: Option<PathBuf>,

    /// Accept non-numeric node labels from `--input` and skip the numeric
    /// root checks.
    #[arg(long)]
    pub allow_any_labels: bool,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither `--input` nor `--random` was supplied.
    #[error("either `--input` or `--random` must be supplied")]
    MissingSource,
    /// A `--random` argument failed to parse.
    #[error("`--random` {name} must be {expected} (got `{value}`)")]
    InvalidRandomArgument {
        /// `N` or `C`.
        name: &'static str,
        /// Human description of the accepted values.
        expected: &'static str,
        /// Raw value supplied by the user.
        value: String,
    },
    /// A root was not a non-negative integer.
    #[error("root `{root}` is not a non-negative integer")]
    InvalidRoot {
        /// Raw value supplied by the user.
        root: String,
    },
    /// Roots fell outside `0..node_count`.
    #[error("roots {} are outside the node range 0..{node_count}", .roots.join(", "))]
    RootOutOfRange {
        /// Offending roots in the order given.
        roots: Vec<String>,
        /// Nodes in the graph.
        node_count: usize,
    },
    /// GML reading or writing failed.
    #[error(transparent)]
    Gml(#[from] GmlError),
    /// Generation, traversal, or analysis failed.
    #[error(transparent)]
    Core(#[from] GraphError),
}

impl CliError {
    /// Stable machine-readable code for errors raised by the libraries.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Gml(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
            _ => None,
        }
    }
}

/// Where the graph came from.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphOrigin {
    /// Loaded from a GML file.
    File(PathBuf),
    /// Generated at random.
    Random {
        /// Requested node count.
        node_count: usize,
        /// Density coefficient.
        coefficient: f64,
        /// Seed actually used.
        seed: u64,
    },
}

/// Outcome of a CLI run.
#[derive(Clone, Debug)]
pub struct ExecutionSummary {
    /// Source of the graph.
    pub origin: GraphOrigin,
    /// The graph, carrying any attached metadata.
    pub graph: GraphModel,
    /// One shortest-path tree per root, in the order given.
    pub trees: Vec<ShortestPathTree>,
    /// Structural summary when `--analyze` was set.
    pub analysis: Option<StructuralSummary>,
    /// File the annotated graph was written to.
    pub output: Option<PathBuf>,
}

/// Executes the CLI request represented by `cli`.
///
/// The graph is loaded or generated, each root gets its own shortest-path
/// tree, and with `--analyze` the multi-source search results and the
/// structural summary are attached before the graph is written.
///
/// # Errors
/// Returns [`CliError`] when an argument is invalid or a library call fails.
///
/// # Examples
/// ```
/// use provgraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli {
///     random: Some(vec!["12".into(), "2".into()]),
///     seed: Some(7),
///     roots: vec!["0".into()],
///     analyze: true,
///     ..Cli::default()
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graph.node_count(), 12);
/// assert_eq!(summary.trees.len(), 1);
/// assert!(summary.analysis.is_some());
/// # Ok::<(), provgraph_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(source = field::Empty, roots = cli.roots.len(), analyze = cli.analyze),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let label_policy = if cli.allow_any_labels {
        LabelPolicy::Any
    } else {
        LabelPolicy::Numeric
    };
    let (origin, mut graph) = match (&cli.input, &cli.random) {
        (Some(path), _) => {
            Span::current().record("source", field::display("file"));
            let graph = read_path(path, label_policy)?;
            if let Ok(previous) = metadata::read_summary(&graph) {
                debug!(
                    components = previous.component_count,
                    has_cycle = previous.has_cycle,
                    "input already carries a structural summary"
                );
            }
            (GraphOrigin::File(path.clone()), graph)
        }
        (None, Some(values)) => {
            Span::current().record("source", field::display("random"));
            generate(values, cli.seed)?
        }
        (None, None) => return Err(CliError::MissingSource),
    };

    let trees = if cli.roots.is_empty() {
        Vec::new()
    } else {
        if label_policy == LabelPolicy::Numeric {
            validate_roots(&cli.roots, graph.node_count())?;
        }
        trace_roots(&mut graph, &cli.roots, cli.analyze)?
    };

    let analysis = cli.analyze.then(|| analyse(&mut graph));

    if let Some(path) = &cli.output {
        write_path(&graph, path)?;
        info!(path = %path.display(), "graph saved");
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        trees = trees.len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        origin,
        graph,
        trees,
        analysis,
        output: cli.output,
    })
}

#[instrument(name = "cli.generate", err, skip(values, seed), fields(seed = field::Empty))]
pub(super) fn generate(
    values: &[String],
    seed: Option<u64>,
) -> Result<(GraphOrigin, GraphModel), CliError> {
    let (node_count, coefficient) = parse_random_args(values)?;
    let seed = seed.unwrap_or_else(seed_from_clock);
    Span::current().record("seed", seed);
    info!(seed, node_count, coefficient, "generating random graph");
    let params = GeneratorParams::new(node_count, coefficient)?.with_seed(seed);
    let graph = generate_random_graph(&params);
    Ok((
        GraphOrigin::Random {
            node_count,
            coefficient,
            seed,
        },
        graph,
    ))
}

pub(super) fn parse_random_args(values: &[String]) -> Result<(usize, f64), CliError> {
    let [raw_nodes, raw_coefficient] = values else {
        return Err(CliError::InvalidRandomArgument {
            name: "arguments",
            expected: "exactly `N C`",
            value: values.join(" "),
        });
    };
    let node_count = raw_nodes
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&count| count > 0)
        .ok_or_else(|| CliError::InvalidRandomArgument {
            name: "N",
            expected: "a positive integer",
            value: raw_nodes.clone(),
        })?;
    let coefficient = raw_coefficient
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| CliError::InvalidRandomArgument {
            name: "C",
            expected: "a non-negative number",
            value: raw_coefficient.clone(),
        })?;
    Ok((node_count, coefficient))
}

/// Checks that every root is a decimal integer in `0..node_count`.
pub(super) fn validate_roots(roots: &[String], node_count: usize) -> Result<(), CliError> {
    let mut out_of_range = Vec::new();
    for root in roots {
        if root.is_empty() || !root.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CliError::InvalidRoot { root: root.clone() });
        }
        let in_range = root.parse::<usize>().is_ok_and(|index| index < node_count);
        if !in_range {
            out_of_range.push(root.clone());
        }
    }
    if out_of_range.is_empty() {
        Ok(())
    } else {
        Err(CliError::RootOutOfRange {
            roots: out_of_range,
            node_count,
        })
    }
}

#[instrument(name = "cli.trace_roots", err, skip(graph, roots))]
fn trace_roots(
    graph: &mut GraphModel,
    roots: &[String],
    attach: bool,
) -> Result<Vec<ShortestPathTree>, CliError> {
    let trees = shortest_path_trees(graph, roots, RootPolicy::Strict)?;
    if attach {
        let result = multi_source_bfs_with_policy(graph, roots, RootPolicy::Strict)?;
        metadata::attach_bfs(graph, &result);
    }
    Ok(trees)
}

#[instrument(name = "cli.analyse", skip(graph))]
fn analyse(graph: &mut GraphModel) -> StructuralSummary {
    let assignment = components(graph);
    let summary = StructuralSummary::from_components(graph, &assignment);
    metadata::attach_analysis(graph, &assignment, &summary);
    summary
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// Each root's paths are listed as `target: root -> ... -> target`, followed
/// by the analysis lines when present.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let graph = &summary.graph;
    let label = |node| graph.label(node).unwrap_or("?");
    match &summary.origin {
        GraphOrigin::File(path) => writeln!(writer, "Loaded graph from {}", path.display())?,
        GraphOrigin::Random {
            node_count,
            coefficient,
            seed,
        } => writeln!(
            writer,
            "Generated random graph: n={node_count} c={coefficient} seed={seed}"
        )?,
    }
    writeln!(
        writer,
        "Nodes: {}, edges: {}",
        graph.node_count(),
        graph.edge_count()
    )?;

    for tree in &summary.trees {
        writeln!(writer, "Shortest paths from {}:", label(tree.root()))?;
        for (target, path) in tree.paths() {
            let hops: Vec<&str> = path.into_iter().map(label).collect();
            writeln!(writer, "  {}: {}", label(target), hops.join(" -> "))?;
        }
    }

    if let Some(analysis) = &summary.analysis {
        writeln!(
            writer,
            "Number of connected components: {}",
            analysis.component_count
        )?;
        if analysis.has_cycle {
            writeln!(writer, "This graph has a cycle.")?;
        } else {
            writeln!(writer, "This graph is acyclic (a forest).")?;
        }
        if analysis.isolates.is_empty() {
            writeln!(writer, "No isolated nodes.")?;
        } else {
            let isolates: Vec<&str> = analysis.isolates.iter().copied().map(label).collect();
            writeln!(writer, "Graph has isolated nodes: [{}]", isolates.join(", "))?;
        }
        writeln!(writer, "Density: {}", analysis.density)?;
        match analysis.average_shortest_path {
            Some(average) => writeln!(writer, "Average shortest path length: {average}")?,
            None => writeln!(
                writer,
                "This graph is not connected; average shortest path length is undefined."
            )?,
        }
    }

    if let Some(path) = &summary.output {
        writeln!(writer, "Graph saved to {}", path.display())?;
    }
    Ok(())
}
