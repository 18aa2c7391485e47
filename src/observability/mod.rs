//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! factory / config / cli:
//!     → tracing events (debug on every built or rendered value)
//!
//! Consumers:
//!     → logging.rs subscriber installed by the binary (stderr)
//!     → test harness subscriber, if a test installs one
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; it never installs a subscriber
//! - Log level from RUST_LOG first, then the caller's default directive

pub mod logging;
