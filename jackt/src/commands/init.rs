//! Init command implementation.
//!
//! Writes a `jackt.toml` holding the default settings into a project
//! directory, so the defaults can be edited in place.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{JacktError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to initialize (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Execute the command.
    ///
    /// The output is the path of the configuration file. An existing file
    /// is left untouched unless `force` is set.
    pub fn run(&self) -> Result<CommandResult<PathBuf>> {
        let target_path = match &self.args.path {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };

        if target_path.exists() && !target_path.is_dir() {
            return Err(JacktError::Validation(format!(
                "Target path is not a directory: {}",
                target_path.display()
            )));
        }

        let config_path = target_path.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            let message = format!(
                "Configuration file already exists, skipping: {}",
                config_path.display()
            );
            if self.args.verbose {
                warn!("{}", message);
            }
            return Ok(CommandResult::success(config_path).with_warning(message));
        }

        Config::default().save_to_path(&config_path)?;
        if self.args.verbose {
            info!(path = %config_path.display(), "created configuration file");
        }

        Ok(CommandResult::success(config_path).with_items_processed(1))
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = CommandResult<PathBuf>;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default jackt.toml"
    }
}

/// Run the init command.
pub fn run_init(args: InitArgs) -> Result<()> {
    let command = InitCommand::new(args);
    debug!(command = InitCommand::name(), "{}", InitCommand::description());
    command.execute().map(|_| ())
}
