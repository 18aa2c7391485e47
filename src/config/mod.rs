//! Configuration values produced for the daemon under test.
//!
//! # Data Flow
//! ```text
//! factory (builders with defaults)
//!     → schema.rs (DaemonConfig / AreaConfig, immutable values)
//!     → render.rs (TOML or JSON text, same shape the daemon loads)
//!     → diff.rs (field-by-field comparison of two configs)
//! ```
//!
//! # Design Decisions
//! - Configs are plain values; tests own them and drop them when done
//! - All fields have defaults so a partial config is still complete
//! - No semantic validation: that belongs to the daemon's loader

pub mod diff;
pub mod render;
pub mod schema;

pub use diff::{diff_configs, ConfigDifference};
pub use render::{render, OutputFormat};
pub use schema::AreaConfig;
pub use schema::DaemonConfig;
