//! Area descriptor construction.
//!
//! # Responsibilities
//! - Build an `AreaConfig` verbatim from test inputs
//! - Parse the compact `--area` form used by the CLI
//!
//! # Design Decisions
//! - Regex syntax is not checked here; whatever compiles the patterns does that
//! - Pattern order is preserved exactly as given

use crate::config::AreaConfig;
use crate::error::{Result, TestkitError};

/// Marker accepted as the fifth field of an area spec.
pub const ADJ_LABELS_FLAG: &str = "adj-labels";

/// Construct an area config populated verbatim from the inputs.
pub fn create_area_config<N, I>(
    area_id: impl Into<String>,
    neighbor_regexes: N,
    interface_regexes: I,
    policy: Option<String>,
    enable_adj_labels: bool,
) -> AreaConfig
where
    N: IntoIterator,
    N::Item: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    let area = AreaConfig {
        import_policy_name: policy,
        enable_adj_labels,
        ..AreaConfig::new(area_id, neighbor_regexes, interface_regexes)
    };

    tracing::debug!(
        area_id = %area.area_id,
        neighbor_regexes = area.neighbor_regexes.len(),
        interface_regexes = area.include_interface_regexes.len(),
        policy = ?area.import_policy_name,
        enable_adj_labels = area.enable_adj_labels,
        "Built area config"
    );

    area
}

/// Parse `ID[:NEIGHBOR_RE,..[:IFACE_RE,..[:POLICY[:adj-labels]]]]`.
///
/// Empty list segments yield empty lists and an empty policy segment yields
/// no policy. Patterns containing `:` or `,` cannot be expressed here.
pub fn parse_area_spec(spec: &str) -> Result<AreaConfig> {
    let invalid = |reason: &str| TestkitError::InvalidAreaSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = spec.split(':').collect();
    if fields.len() > 5 {
        return Err(invalid("too many ':'-separated fields"));
    }

    let area_id = fields[0];
    if area_id.is_empty() {
        return Err(invalid("area id must not be empty"));
    }

    let list = |idx: usize| -> Vec<String> {
        match fields.get(idx) {
            Some(field) if !field.is_empty() => field.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        }
    };

    let policy = fields
        .get(3)
        .filter(|p| !p.is_empty())
        .map(|p| p.to_string());

    let enable_adj_labels = match fields.get(4) {
        None => false,
        Some(&flag) if flag == ADJ_LABELS_FLAG => true,
        Some(_) => return Err(invalid("fifth field must be 'adj-labels'")),
    };

    Ok(create_area_config(area_id, list(1), list(2), policy, enable_adj_labels))
}
