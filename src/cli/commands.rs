//! Command execution.

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::config::{diff_configs, render, DaemonConfig};
use crate::error::Result;
use crate::factory::{basic_daemon_config, gen_random_str};

/// Run the parsed command, writing its output to `out`.
pub fn execute_command(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Commands::Show { config, format } => {
            let config = basic_daemon_config(config.to_options());
            let text = render(&config, *format)?;
            write!(out, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
        Commands::RandomId { len } => {
            writeln!(out, "{}", gen_random_str(*len))?;
        }
        Commands::Compare { config } => {
            let config = basic_daemon_config(config.to_options());
            let differences = diff_configs(&DaemonConfig::default(), &config);
            if differences.is_empty() {
                writeln!(out, "SAME")?;
            } else {
                writeln!(out, "DIFF FOUND!")?;
                for difference in differences {
                    writeln!(out, "{}", difference)?;
                }
            }
        }
    }
    Ok(())
}
