//! Integration tests for the configuration factory.

mod common;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use routing_testkit::config::diff_configs;
use routing_testkit::{
    basic_daemon_config, create_area_config, gen_random_str, gen_random_str_with, DaemonConfig,
    DaemonConfigOptions,
};

#[rstest]
#[case(0)]
#[case(1)]
#[case(16)]
#[case(255)]
#[case(4096)]
fn random_str_has_exact_length_and_safe_alphabet(#[case] len: usize) {
    let id = gen_random_str(len);
    assert_eq!(id.chars().count(), len);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn random_str_usable_as_literal_pattern() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let id = gen_random_str_with(&mut rng, 24);
        assert!(!id.contains(|c: char| "/\\.*+?()[]{}|^$ \t\n".contains(c)));
    }
}

#[test]
fn random_str_from_threads_is_independent() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| gen_random_str(32)))
        .collect();
    let mut ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn area_config_reads_back_inputs() {
    let area = create_area_config("area1", ["eth.*"], Vec::<&str>::new(), None, false);

    assert_eq!(area.area_id, "area1");
    assert_eq!(area.neighbor_regexes, vec!["eth.*"]);
    assert!(area.include_interface_regexes.is_empty());
    assert!(area.import_policy_name.is_none());
    assert!(!area.enable_adj_labels);
}

#[test]
fn daemon_config_without_arguments() {
    let config = basic_daemon_config(Default::default());

    assert_eq!(config.node_name, "");
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
fn daemon_config_preserves_area_order_and_content() {
    let areas = common::fabric_areas();
    let reversed: Vec<_> = areas.iter().rev().cloned().collect();

    let config = basic_daemon_config(DaemonConfigOptions {
        areas: reversed.clone(),
        ..Default::default()
    });

    assert_eq!(config.areas, reversed);
    assert_eq!(config.areas[0].area_id, "spine");
    // Inputs are untouched.
    assert_eq!(areas, common::fabric_areas());
}

#[test]
fn daemon_config_keeps_duplicate_area_ids() {
    let area = create_area_config("0", [".*"], [".*"], None, false);
    let config = basic_daemon_config(DaemonConfigOptions {
        areas: vec![area.clone(), area.clone()],
        ..Default::default()
    });
    assert_eq!(config.areas, vec![area.clone(), area]);
}

#[test]
fn builders_are_idempotent() {
    let build = || {
        basic_daemon_config(DaemonConfigOptions {
            node_name: "node-1".into(),
            areas: common::fabric_areas(),
            enable_segment_routing: true,
            enable_adj_labels: true,
            ..Default::default()
        })
    };

    let (a, b) = (build(), build());
    assert_eq!(a, b);
    assert!(diff_configs(&a, &b).is_empty());
}

#[test]
fn unique_node_names_flow_through() {
    let node_name = common::unique_node_name("node");
    let config =
        basic_daemon_config(DaemonConfigOptions::default().with_node_name(node_name.clone()));

    assert_eq!(config.node_name, node_name);
    let expected = DaemonConfig {
        node_name,
        ..DaemonConfig::default()
    };
    assert_eq!(config, expected);
}
