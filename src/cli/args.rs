//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};

use crate::config::schema::DEFAULT_DOMAIN;
use crate::config::{AreaConfig, OutputFormat};
use crate::factory::area::parse_area_spec;
use crate::factory::{gen_random_str, DaemonConfigOptions};

/// Default length of identifiers printed by `random-id`.
pub const DEFAULT_ID_LEN: usize = 16;

#[derive(Parser, Debug)]
#[command(name = "routing-testkit")]
#[command(about = "Generate routing daemon configs for tests", long_about = None)]
pub struct Cli {
    /// Log every built value (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a generated daemon config
    Show {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output format (toml or json)
        #[arg(short, long, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Print a random alphanumeric identifier
    RandomId {
        #[arg(default_value_t = DEFAULT_ID_LEN)]
        len: usize,
    },
    /// Compare a generated config against the default config
    Compare {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Daemon config parameters; unset flags keep the factory defaults.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(long, default_value = "")]
    pub node_name: String,

    /// Use a random node name of this length instead of --node-name
    #[arg(long, value_name = "LEN")]
    pub random_node_name: Option<usize>,

    #[arg(long, default_value = DEFAULT_DOMAIN)]
    pub domain: String,

    /// ID[:NEIGHBOR_RE,..[:IFACE_RE,..[:POLICY[:adj-labels]]]] (repeatable)
    #[arg(long = "area", value_name = "SPEC", value_parser = parse_area_spec)]
    pub areas: Vec<AreaConfig>,

    #[arg(long)]
    pub disable_v4: bool,

    #[arg(long)]
    pub segment_routing: bool,

    /// Allow the daemon to program forwarding state
    #[arg(long)]
    pub no_dryrun: bool,

    #[arg(long)]
    pub v4_over_v6_nexthop: bool,

    #[arg(long)]
    pub adj_labels: bool,

    #[arg(long)]
    pub prepend_labels: bool,
}

impl ConfigArgs {
    pub fn to_options(&self) -> DaemonConfigOptions {
        let node_name = match self.random_node_name {
            Some(len) => gen_random_str(len),
            None => self.node_name.clone(),
        };

        DaemonConfigOptions::default()
            .with_node_name(node_name)
            .with_domain(self.domain.clone())
            .with_areas(self.areas.iter().cloned())
            .with_v4(!self.disable_v4)
            .with_segment_routing(self.segment_routing)
            .with_dryrun(!self.no_dryrun)
            .with_v4_over_v6_nexthop(self.v4_over_v6_nexthop)
            .with_adj_labels(self.adj_labels)
            .with_prepend_labels(self.prepend_labels)
    }
}
