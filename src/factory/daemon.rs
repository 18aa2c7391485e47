//! Daemon configuration construction.

use crate::config::schema::DEFAULT_DOMAIN;
use crate::config::{AreaConfig, DaemonConfig};

/// Parameters for [`basic_daemon_config`].
///
/// `Default` carries the documented defaults, so callers only name what they
/// override:
///
/// ```
/// use routing_testkit::factory::{basic_daemon_config, DaemonConfigOptions};
///
/// let config = basic_daemon_config(DaemonConfigOptions {
///     node_name: "node-1".into(),
///     enable_segment_routing: true,
///     ..Default::default()
/// });
/// assert!(config.dryrun);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonConfigOptions {
    pub node_name: String,
    pub domain: String,
    pub areas: Vec<AreaConfig>,
    pub enable_v4: bool,
    pub enable_segment_routing: bool,
    pub dryrun: bool,
    pub v4_over_v6_nexthop: bool,
    pub enable_adj_labels: bool,
    pub enable_prepend_labels: bool,
}

impl Default for DaemonConfigOptions {
    fn default() -> Self {
        Self {
            node_name: String::new(),
            domain: DEFAULT_DOMAIN.to_string(),
            areas: Vec::new(),
            enable_v4: true,
            enable_segment_routing: false,
            dryrun: true,
            v4_over_v6_nexthop: false,
            enable_adj_labels: false,
            enable_prepend_labels: false,
        }
    }
}

impl DaemonConfigOptions {
    pub fn with_node_name(mut self, node_name: impl Into<String>) -> Self {
        self.node_name = node_name.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Append one area, keeping earlier ones.
    pub fn with_area(mut self, area: AreaConfig) -> Self {
        self.areas.push(area);
        self
    }

    pub fn with_areas(mut self, areas: impl IntoIterator<Item = AreaConfig>) -> Self {
        self.areas = areas.into_iter().collect();
        self
    }

    pub fn with_v4(mut self, enabled: bool) -> Self {
        self.enable_v4 = enabled;
        self
    }

    pub fn with_segment_routing(mut self, enabled: bool) -> Self {
        self.enable_segment_routing = enabled;
        self
    }

    pub fn with_dryrun(mut self, enabled: bool) -> Self {
        self.dryrun = enabled;
        self
    }

    pub fn with_v4_over_v6_nexthop(mut self, enabled: bool) -> Self {
        self.v4_over_v6_nexthop = enabled;
        self
    }

    pub fn with_adj_labels(mut self, enabled: bool) -> Self {
        self.enable_adj_labels = enabled;
        self
    }

    pub fn with_prepend_labels(mut self, enabled: bool) -> Self {
        self.enable_prepend_labels = enabled;
        self
    }
}

/// Build a daemon config for a unit-test environment.
///
/// Flags are copied as given. Combinations the daemon would reject (labels
/// without segment routing, duplicate area ids) are passed through so tests
/// can exercise the daemon's own validation.
pub fn basic_daemon_config(options: DaemonConfigOptions) -> DaemonConfig {
    let DaemonConfigOptions {
        node_name,
        domain,
        areas,
        enable_v4,
        enable_segment_routing,
        dryrun,
        v4_over_v6_nexthop,
        enable_adj_labels,
        enable_prepend_labels,
    } = options;

    let config = DaemonConfig {
        node_name,
        domain,
        enable_v4,
        v4_over_v6_nexthop,
        enable_segment_routing,
        dryrun,
        enable_adj_labels,
        enable_prepend_labels,
        areas,
    };

    tracing::debug!(
        node_name = %config.node_name,
        domain = %config.domain,
        areas = config.areas.len(),
        enable_v4 = config.enable_v4,
        enable_segment_routing = config.enable_segment_routing,
        dryrun = config.dryrun,
        "Built daemon config"
    );

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_area_config;

    #[test]
    fn test_no_arguments_matches_schema_default() {
        let config = basic_daemon_config(DaemonConfigOptions::default());
        assert_eq!(config, DaemonConfig::default());
        assert_eq!(config.domain, "domain");
        assert!(config.areas.is_empty());
        assert!(config.enable_v4);
        assert!(config.dryrun);
        assert!(!config.enable_segment_routing);
        assert!(!config.v4_over_v6_nexthop);
        assert!(!config.enable_adj_labels);
        assert!(!config.enable_prepend_labels);
    }

    #[test]
    fn test_every_field_overridable() {
        let area = create_area_config("0", [".*"], [".*"], None, false);
        let config = basic_daemon_config(
            DaemonConfigOptions::default()
                .with_node_name("node-1")
                .with_domain("lab")
                .with_area(area.clone())
                .with_v4(false)
                .with_segment_routing(true)
                .with_dryrun(false)
                .with_v4_over_v6_nexthop(true)
                .with_adj_labels(true)
                .with_prepend_labels(true),
        );

        assert_eq!(config.node_name, "node-1");
        assert_eq!(config.domain, "lab");
        assert_eq!(config.areas, vec![area]);
        assert!(!config.enable_v4);
        assert!(config.enable_segment_routing);
        assert!(!config.dryrun);
        assert!(config.v4_over_v6_nexthop);
        assert!(config.enable_adj_labels);
        assert!(config.enable_prepend_labels);
    }

    #[test]
    fn test_no_cross_field_validation() {
        // Adjacency labels without segment routing is passed through.
        let config = basic_daemon_config(DaemonConfigOptions {
            enable_adj_labels: true,
            enable_prepend_labels: true,
            ..Default::default()
        });
        assert!(!config.enable_segment_routing);
        assert!(config.enable_adj_labels);
        assert!(config.enable_prepend_labels);
    }

    #[test]
    fn test_with_areas_replaces() {
        let a = create_area_config("a", ["x"], ["y"], None, false);
        let b = create_area_config("b", ["x"], ["y"], None, false);
        let options = DaemonConfigOptions::default()
            .with_area(a)
            .with_areas([b.clone()]);
        assert_eq!(options.areas, vec![b]);
    }
}
