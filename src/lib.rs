//! Configuration fixtures for routing daemon tests.
//!
//! Builders produce complete `DaemonConfig` / `AreaConfig` values with
//! override-able defaults, plus random identifiers for collision-free names.

pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod observability;

pub use config::{AreaConfig, DaemonConfig};
pub use error::{Result, TestkitError};
pub use factory::{
    basic_daemon_config, create_area_config, gen_random_str, gen_random_str_with,
    DaemonConfigOptions,
};
