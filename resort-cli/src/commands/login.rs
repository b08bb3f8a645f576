//! Login command implementation.
//!
//! Every other command already checks `--operator`/`--secret` when a login
//! gate is configured. `login` only checks them, so scripts can validate
//! credentials up front.

use clap::Args;

use resort::OperatorGate;

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};

/// Check operator credentials against the configured account.
#[derive(Args)]
pub struct LoginCommand {}

impl LoginCommand {
    /// Execute the login command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let Some(gate) = OperatorGate::from_config(&config) else {
            if !global.quiet {
                println!("No operator login is configured");
            }
            return Ok(());
        };

        gate.verify(
            global.operator.as_deref().unwrap_or_default(),
            global.secret.as_deref().unwrap_or_default(),
        )?;

        if !global.quiet {
            println!("Login successful");
        }
        Ok(())
    }
}
