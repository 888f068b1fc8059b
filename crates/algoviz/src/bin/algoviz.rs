use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use algoviz::tracing_setup::{init_subscriber, Verbosity};
use algoviz::{
    input, run_measured, Algorithm, AlgorithmConfig, AlgorithmKind, Catalog, Trace, TraceError,
    TraceMetrics, TraceRequest,
};
use algoviz_frames::{Graph, NodeId};
use algoviz_random::{node_ids, Generator, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "algoviz", version, about = "Record step-by-step frames of classic algorithms")]
struct Cli {
    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Generator settings (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for random input, overrides `seed` in the config file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a sorting algorithm.
    Sort(SortArgs),
    /// Trace a search over an array.
    Search(SearchArgs),
    /// Trace a graph traversal or shortest path.
    Graph(GraphArgs),
    /// Trace tree insertions, or a BST lookup.
    Tree(TreeArgs),
    /// List catalog entries or show one.
    Catalog(CatalogArgs),
    /// Print generated sample input.
    Random(RandomArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Pretty-print JSON.
    #[arg(long)]
    pretty: bool,

    /// Wrap the frames with operation counts and timing.
    #[arg(long)]
    metrics: bool,
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Catalog id or name.
    #[arg(short, long, default_value = "quick-sort")]
    algorithm: String,

    /// Comma separated numbers; random when omitted.
    #[arg(long)]
    values: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(short, long, default_value = "binary-search")]
    algorithm: String,

    /// Comma separated numbers; a random sorted array when omitted.
    #[arg(long)]
    values: Option<String>,

    /// Value to look for; picked from the array when omitted.
    #[arg(long)]
    target: Option<String>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct GraphArgs {
    #[arg(short, long, default_value = "dijkstra")]
    algorithm: String,

    /// Graph JSON (`{"nodes": [...], "edges": [...]}`); random when omitted.
    #[arg(long)]
    graph: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    start: NodeId,

    /// Defaults to the last node.
    #[arg(long)]
    end: Option<NodeId>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct TreeArgs {
    #[arg(short, long, default_value = "bst")]
    algorithm: String,

    /// Comma separated integer keys; the configured keys when omitted.
    #[arg(long)]
    keys: Option<String>,

    /// Use random keys instead of the configured ones.
    #[arg(long, conflicts_with = "keys")]
    random: bool,

    /// Build a BST from the keys and trace a lookup of this key.
    #[arg(long)]
    search: Option<i64>,

    /// Print the finished tree as an indented outline instead of frames.
    #[arg(long, conflicts_with_all = ["search", "metrics"])]
    dump: bool,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Entry id or name to show.
    query: Option<String>,

    /// Only list this family.
    #[arg(long)]
    kind: Option<AlgorithmKind>,

    /// Extra entries (TOML, same schema as the built-in catalog).
    #[arg(long)]
    extend: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Sample {
    Array,
    Sorted,
    Graph,
    Keys,
}

#[derive(Args, Debug)]
struct RandomArgs {
    #[arg(value_enum)]
    sample: Sample,

    /// Overrides the configured size (array length, node count or key count).
    #[arg(long)]
    size: Option<usize>,

    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.cmd {
        Command::Sort(args) => cmd_sort(args, &config),
        Command::Search(args) => cmd_search(args, &config),
        Command::Graph(args) => cmd_graph(args, &config),
        Command::Tree(args) => cmd_tree(args, &config),
        Command::Catalog(args) => cmd_catalog(args),
        Command::Random(args) => cmd_random(args, &config),
    }
}

fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    GeneratorConfig::from_toml_str(&text)
        .with_context(|| format!("parse config '{}'", path.display()))
}

/// Resolves `query` in the built-in catalog and checks it traces `kind` input.
fn resolve(query: &str, kind: AlgorithmKind) -> anyhow::Result<Algorithm> {
    let catalog = Catalog::builtin().context("load built-in catalog")?;
    let Some(entry) = catalog.resolve(query) else {
        bail!("no algorithm named {query:?} in the catalog");
    };
    if entry.kind != kind {
        bail!("{} is a {} algorithm, not {kind}", entry.name, entry.kind);
    }
    let algorithm = Algorithm::from_config(entry)
        .ok_or_else(|| TraceError::Unsupported(entry.name.clone()))?;
    Ok(algorithm)
}

fn cmd_sort(args: SortArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let algorithm = resolve(&args.algorithm, AlgorithmKind::Sorting)?;
    let values = match &args.values {
        Some(text) => input::parse_values(text)?,
        None => config
            .generator()
            .array(config.array_size, config.max_value),
    };
    emit(algorithm, TraceRequest::Sort { values }, &args.output)
}

fn cmd_search(args: SearchArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let algorithm = resolve(&args.algorithm, AlgorithmKind::Search)?;
    let mut generator = config.generator();
    let values = match &args.values {
        Some(text) => input::parse_values(text)?,
        None => generator.sorted_array(config.array_size, config.max_value),
    };
    let target = match &args.target {
        Some(text) => input::parse_number(text)?,
        None => pick(&mut generator, &values),
    };
    emit(algorithm, TraceRequest::Search { values, target }, &args.output)
}

fn pick(generator: &mut Generator, values: &[f64]) -> f64 {
    // `keys` draws from 1..=max, so shift to a 0-based index
    let drawn = generator.keys(1, values.len() as i64);
    drawn
        .first()
        .and_then(|&k| values.get(k as usize - 1))
        .copied()
        .unwrap_or_default()
}

fn cmd_graph(args: GraphArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let algorithm = resolve(&args.algorithm, AlgorithmKind::Graph)?;
    let graph: Graph = match &args.graph {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read graph '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse graph '{}'", path.display()))?
        }
        None => config.generator().connected_graph(
            config.node_count,
            config.edge_density,
            config.radius,
        ),
    };
    let end = args.end.or_else(|| node_ids(&graph).last().copied());
    let request = TraceRequest::Graph {
        graph,
        start: args.start,
        end,
    };
    emit(algorithm, request, &args.output)
}

fn cmd_tree(args: TreeArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let algorithm = resolve(&args.algorithm, AlgorithmKind::Tree)?;
    let keys = match &args.keys {
        Some(text) => input::parse_keys(text)?,
        None if args.random => config
            .generator()
            .keys(config.tree_keys.len(), i64::from(config.max_value)),
        None => config.tree_keys.clone(),
    };
    if let Some(target) = args.search {
        if algorithm != Algorithm::Bst {
            bail!("--search traces a lookup in a plain BST, not a {algorithm}");
        }
        let frames = algoviz::trace_bst_search(&keys, target);
        return write_json(&frames, args.output.pretty);
    }
    if args.dump {
        let trace = algoviz::run(algorithm, TraceRequest::Tree { keys })?;
        let Some(tree) = trace.final_tree() else {
            bail!("{algorithm} did not produce a tree");
        };
        write!(std::io::stdout().lock(), "{tree}").context("write output")?;
        return Ok(());
    }
    emit(algorithm, TraceRequest::Tree { keys }, &args.output)
}

#[derive(Serialize)]
struct Measured<'a> {
    algorithm: Algorithm,
    metrics: &'a TraceMetrics,
    trace: &'a Trace,
}

fn emit(algorithm: Algorithm, request: TraceRequest, output: &OutputArgs) -> anyhow::Result<()> {
    let (trace, metrics) = run_measured(algorithm, request)?;
    tracing::info!(%algorithm, frames = metrics.frames, "trace recorded");
    if output.metrics {
        let measured = Measured {
            algorithm,
            metrics: &metrics,
            trace: &trace,
        };
        return write_json(&measured, output.pretty);
    }
    match &trace {
        Trace::Sort(frames) => write_json(frames, output.pretty),
        Trace::Search(frames) => write_json(frames, output.pretty),
        Trace::Graph(frames) => write_json(frames, output.pretty),
        Trace::Tree(frames) => write_json(frames, output.pretty),
    }
}

#[derive(Serialize)]
struct EntryView<'a> {
    #[serde(flatten)]
    entry: &'a AlgorithmConfig,
    traced: bool,
    /// Ids of related entries that are themselves in the catalog.
    linked: Vec<&'a str>,
}

fn view(entry: &AlgorithmConfig) -> EntryView<'_> {
    EntryView {
        entry,
        traced: Algorithm::from_config(entry).is_some(),
        linked: Vec::new(),
    }
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let mut catalog = Catalog::builtin().context("load built-in catalog")?;
    if let Some(path) = &args.extend {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog '{}'", path.display()))?;
        let added = catalog
            .extend_from_toml(&text)
            .with_context(|| format!("extend catalog from '{}'", path.display()))?;
        tracing::info!(added, "catalog extended");
    }

    if let Some(query) = &args.query {
        let Some(entry) = catalog.resolve(query) else {
            bail!("no algorithm named {query:?} in the catalog");
        };
        let mut shown = view(entry);
        shown.linked = catalog
            .related(entry)
            .into_iter()
            .filter_map(|(_, linked)| linked.map(|c| c.id.as_str()))
            .collect();
        return write_json(&shown, args.pretty);
    }

    let entries: Vec<EntryView<'_>> = match args.kind {
        Some(kind) => catalog.by_kind(kind).map(view).collect(),
        None => catalog.iter().map(view).collect(),
    };
    write_json(&entries, args.pretty)
}

fn cmd_random(args: RandomArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let mut generator = config.generator();
    tracing::debug!(seed = ?generator.seed, "generator seeded");
    match args.sample {
        Sample::Array => {
            let size = args.size.unwrap_or(config.array_size);
            write_json(&generator.array(size, config.max_value), args.pretty)
        }
        Sample::Sorted => {
            let size = args.size.unwrap_or(config.array_size);
            write_json(&generator.sorted_array(size, config.max_value), args.pretty)
        }
        Sample::Graph => {
            let count = match args.size {
                Some(n) => u32::try_from(n).context("node count out of range")?,
                None => config.node_count,
            };
            let graph = generator.connected_graph(count, config.edge_density, config.radius);
            write_json(&graph, args.pretty)
        }
        Sample::Keys => {
            let count = args.size.unwrap_or(config.tree_keys.len());
            let keys = generator.keys(count, i64::from(config.max_value));
            write_json(&keys, args.pretty)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)
    } else {
        serde_json::to_writer(&mut out, value)
    }
    .context("serialize output")?;
    writeln!(out).context("write output")?;
    Ok(())
}
