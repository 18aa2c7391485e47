//! Shared fixtures for integration tests.

use routing_testkit::{create_area_config, gen_random_str, AreaConfig};

/// Two-area topology used across tests: a fabric area and a spine area.
#[allow(dead_code)]
pub fn fabric_areas() -> Vec<AreaConfig> {
    vec![
        create_area_config("fabric", ["fsw.*", "rsw.*"], ["po.*"], None, false),
        create_area_config(
            "spine",
            ["ssw.*"],
            ["eth[0-9]+"],
            Some("spine_import".to_string()),
            true,
        ),
    ]
}

/// Node name that will not clash with other tests in the same run.
#[allow(dead_code)]
pub fn unique_node_name(prefix: &str) -> String {
    format!("{}-{}", prefix, gen_random_str(8))
}
