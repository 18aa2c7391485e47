//! routing-testkit
//!
//! Command-line front end to the configuration factory.
//!
//! ```text
//!   flags ──▶ ConfigArgs ──▶ DaemonConfigOptions ──▶ basic_daemon_config
//!                                                        │
//!                          ┌─────────────────────────────┤
//!                          ▼                             ▼
//!                   render (toml/json)          diff_configs (vs default)
//!                          │                             │
//!                          └──────────▶ stdout ◀─────────┘
//! ```
//!
//! Logs go to stderr so rendered configs can be piped.

use clap::Parser;

use routing_testkit::cli::{execute_command, Cli};
use routing_testkit::observability::logging::{init_logging, DEFAULT_DIRECTIVE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        "routing_testkit=debug"
    } else {
        DEFAULT_DIRECTIVE
    });

    tracing::debug!(command = ?cli.command, "routing-testkit starting");

    let stdout = std::io::stdout();
    execute_command(&cli, &mut stdout.lock())?;
    Ok(())
}
