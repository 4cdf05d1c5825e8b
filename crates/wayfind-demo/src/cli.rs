use clap::Parser;

/// Compare the wayfind strategies on a random planar graph.
#[derive(Debug, Clone, Parser)]
#[command(name = "wayfind-demo", version)]
pub struct Args {
    /// Number of nodes.
    #[arg(long, default_value_t = 10_000)]
    pub nodes: u32,

    /// Number of random arcs to draw. Duplicates collapse.
    #[arg(long, default_value_t = 35_000)]
    pub arcs: usize,

    /// Seed for graph generation. Defaults to the current time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Width of the area nodes are placed in.
    #[arg(long, default_value_t = 1000.0)]
    pub width: f64,

    /// Height of the area nodes are placed in.
    #[arg(long, default_value_t = 1000.0)]
    pub height: f64,

    /// Arc weight as a multiple of the Euclidean arc length. Values below 1
    /// make the heuristic inadmissible.
    #[arg(long, default_value_t = 1.1)]
    pub weight_factor: f64,

    /// Source node. Random when omitted.
    #[arg(long)]
    pub source: Option<u32>,

    /// Target node. Random when omitted.
    #[arg(long)]
    pub target: Option<u32>,

    /// Slack factor of the probabilistic walker.
    #[arg(long, default_value_t = wayfind_paths::DEFAULT_SLACK_FACTOR)]
    pub slack: f64,

    /// Seed for the probabilistic walker.
    #[arg(long)]
    pub walk_seed: Option<u64>,

    /// Print every path node by node.
    #[arg(long)]
    pub print_paths: bool,
}
