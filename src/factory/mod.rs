//! Configuration factory.
//!
//! # Data Flow
//! ```text
//! test code (subset of parameters)
//!     → area.rs (AreaConfig, verbatim from inputs)
//!     → daemon.rs (DaemonConfigOptions with documented defaults)
//!     → DaemonConfig (fully populated, owned by the test)
//!
//! random.rs supplies unique identifiers (node names, area ids) on demand.
//! ```
//!
//! # Design Decisions
//! - Every builder is total: no validation, no cross-field checks
//! - Defaults live in `Default` impls, overrides via struct update or `with_*`
//! - No shared state; the generator draws from the calling thread's RNG

pub mod area;
pub mod daemon;
pub mod random;

pub use area::create_area_config;
pub use daemon::{basic_daemon_config, DaemonConfigOptions};
pub use random::{gen_random_str, gen_random_str_with};
