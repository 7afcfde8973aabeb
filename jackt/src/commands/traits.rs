//! Command trait and common types for the jackt CLI.
//!
//! This module defines the standard command traits that all commands
//! must implement to ensure consistency across the application.

use crate::error::Result;

/// Standard command trait that all jackt commands must implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Trait for providing a one-line command description.
pub trait CommandDescription {
    /// Get a short description of the command.
    fn description() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone)]
pub struct CommandResult<T = ()> {
    /// The command output data.
    pub data: T,

    /// Number of items processed (files, directories, etc.).
    pub items_processed: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,

    /// Warning messages collected during execution.
    pub warnings: Vec<String>,
}

impl<T> CommandResult<T> {
    /// Create a new successful command result.
    pub fn success(data: T) -> Self {
        Self {
            data,
            items_processed: 0,
            execution_time_ms: 0,
            warnings: Vec::new(),
        }
    }

    /// Set the number of items processed.
    pub fn with_items_processed(mut self, count: usize) -> Self {
        self.items_processed = count;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }

    /// Add a warning message.
    pub fn with_warning(mut self, warning: String) -> Self {
        self.warnings.push(warning);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_result_success() {
        let result = CommandResult::success(());
        assert_eq!(result.items_processed, 0);
        assert_eq!(result.execution_time_ms, 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_command_result_with_methods() {
        let result = CommandResult::success(42)
            .with_items_processed(3)
            .with_execution_time_ms(100)
            .with_warning("test warning".to_string());

        assert_eq!(result.data, 42);
        assert_eq!(result.items_processed, 3);
        assert_eq!(result.execution_time_ms, 100);
        assert_eq!(result.warnings, ["test warning"]);
    }
}
