//! Field-by-field comparison of two daemon configs.
//!
//! # Responsibilities
//! - Report every differing field, not just the first
//! - Name each difference by its path (`domain`, `areas[1].neighbor_regexes`)
//! - Compare areas positionally; order is significant
//!
//! # Design Decisions
//! - Pure function: (DaemonConfig, DaemonConfig) → Vec<ConfigDifference>
//! - Empty result means the configs are equal

use std::fmt;

use crate::config::schema::{AreaConfig, DaemonConfig};

/// Placeholder for a side that has no value at a path.
const ABSENT: &str = "<absent>";

/// One field whose value differs between two configs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDifference {
    pub path: String,
    pub left: String,
    pub right: String,
}

impl fmt::Display for ConfigDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.path, self.left, self.right)
    }
}

struct DiffCollector {
    differences: Vec<ConfigDifference>,
}

impl DiffCollector {
    fn field<T: PartialEq + fmt::Debug>(&mut self, path: impl Into<String>, left: &T, right: &T) {
        if left != right {
            self.differences.push(ConfigDifference {
                path: path.into(),
                left: format!("{:?}", left),
                right: format!("{:?}", right),
            });
        }
    }

    fn area(&mut self, idx: usize, left: Option<&AreaConfig>, right: Option<&AreaConfig>) {
        match (left, right) {
            (Some(l), Some(r)) => {
                let prefix = format!("areas[{}]", idx);
                self.field(format!("{prefix}.area_id"), &l.area_id, &r.area_id);
                self.field(
                    format!("{prefix}.neighbor_regexes"),
                    &l.neighbor_regexes,
                    &r.neighbor_regexes,
                );
                self.field(
                    format!("{prefix}.include_interface_regexes"),
                    &l.include_interface_regexes,
                    &r.include_interface_regexes,
                );
                self.field(
                    format!("{prefix}.import_policy_name"),
                    &l.import_policy_name,
                    &r.import_policy_name,
                );
                self.field(
                    format!("{prefix}.enable_adj_labels"),
                    &l.enable_adj_labels,
                    &r.enable_adj_labels,
                );
            }
            (l, r) => {
                let describe = |a: Option<&AreaConfig>| {
                    a.map(|a| format!("{:?}", a.area_id))
                        .unwrap_or_else(|| ABSENT.to_string())
                };
                self.differences.push(ConfigDifference {
                    path: format!("areas[{}]", idx),
                    left: describe(l),
                    right: describe(r),
                });
            }
        }
    }
}

/// Compare two configs and return every differing field.
pub fn diff_configs(left: &DaemonConfig, right: &DaemonConfig) -> Vec<ConfigDifference> {
    let mut diff = DiffCollector {
        differences: Vec::new(),
    };

    diff.field("node_name", &left.node_name, &right.node_name);
    diff.field("domain", &left.domain, &right.domain);
    diff.field("enable_v4", &left.enable_v4, &right.enable_v4);
    diff.field("v4_over_v6_nexthop", &left.v4_over_v6_nexthop, &right.v4_over_v6_nexthop);
    diff.field(
        "enable_segment_routing",
        &left.enable_segment_routing,
        &right.enable_segment_routing,
    );
    diff.field("dryrun", &left.dryrun, &right.dryrun);
    diff.field("enable_adj_labels", &left.enable_adj_labels, &right.enable_adj_labels);
    diff.field(
        "enable_prepend_labels",
        &left.enable_prepend_labels,
        &right.enable_prepend_labels,
    );

    diff.field("areas.len", &left.areas.len(), &right.areas.len());
    for idx in 0..left.areas.len().max(right.areas.len()) {
        diff.area(idx, left.areas.get(idx), right.areas.get(idx));
    }

    tracing::debug!(differences = diff.differences.len(), "Compared daemon configs");
    diff.differences
}
