//! Configuration schema definitions.
//!
//! This module defines the configuration values handed to the routing daemon
//! under test. All types derive Serde traits so a generated config can be
//! rendered in the same shape the daemon's loader consumes.

use serde::{Deserialize, Serialize};

/// Placeholder administrative domain used when a test does not care.
pub const DEFAULT_DOMAIN: &str = "domain";

/// Root configuration for a routing daemon instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Identity of the node under test. May be empty.
    pub node_name: String,

    /// Administrative domain the node belongs to.
    pub domain: String,

    /// Allow IPv4 routes.
    pub enable_v4: bool,

    /// Program IPv4 routes with IPv6 nexthops.
    pub v4_over_v6_nexthop: bool,

    /// Enable MPLS segment-routing features.
    pub enable_segment_routing: bool,

    /// Compute state without touching the system forwarding tables.
    pub dryrun: bool,

    /// Allocate per-adjacency labels.
    pub enable_adj_labels: bool,

    /// Push prepend labels ahead of the existing label stack.
    pub enable_prepend_labels: bool,

    /// Routing areas, in declaration order. Not deduplicated.
    pub areas: Vec<AreaConfig>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            node_name: String::new(),
            domain: DEFAULT_DOMAIN.to_string(),
            enable_v4: true,
            v4_over_v6_nexthop: false,
            enable_segment_routing: false,
            // Tests must never program real forwarding state.
            dryrun: true,
            enable_adj_labels: false,
            enable_prepend_labels: false,
            areas: Vec::new(),
        }
    }
}

/// A logical partition of the routing topology.
///
/// Neighbors and interfaces join an area by matching one of its regexes.
/// Patterns are carried as plain strings; compiling them is the consumer's
/// job.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AreaConfig {
    /// Area identifier. Expected to be non-empty.
    pub area_id: String,

    /// Patterns selecting discovered neighbors.
    pub neighbor_regexes: Vec<String>,

    /// Patterns selecting local interfaces.
    pub include_interface_regexes: Vec<String>,

    /// Policy applied to routes crossing the area boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_policy_name: Option<String>,

    /// Allocate adjacency labels for links in this area.
    pub enable_adj_labels: bool,
}

impl AreaConfig {
    /// Area with no policy and adjacency labels disabled.
    pub fn new<N, I>(area_id: impl Into<String>, neighbor_regexes: N, interface_regexes: I) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            area_id: area_id.into(),
            neighbor_regexes: neighbor_regexes.into_iter().map(Into::into).collect(),
            include_interface_regexes: interface_regexes.into_iter().map(Into::into).collect(),
            import_policy_name: None,
            enable_adj_labels: false,
        }
    }

    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.import_policy_name = Some(policy.into());
        self
    }

    pub fn with_adj_labels(mut self, enabled: bool) -> Self {
        self.enable_adj_labels = enabled;
        self
    }
}
