//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the CLI's standard error types
//! and miette's rich diagnostic formatting.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use arbor::GraphError;

use crate::error::{CliError, ConfigError};

/// Adapter giving a [`CliError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl ErrorAdapter<'_> {
    fn graph_error(&self) -> Option<&GraphError> {
        match self.0 {
            CliError::Step { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.graph_error() {
            Some(GraphError::NodeNotFound(_)) => "arbor::node_not_found",
            Some(GraphError::RootDeletionForbidden(_)) => "arbor::root_deletion",
            Some(GraphError::InvariantViolation(_)) => "arbor::invariant",
            None => match self.0 {
                CliError::Io(_) => "arbor::io",
                CliError::Config(_) => "arbor::config",
                _ => "arbor::script",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.graph_error() {
            Some(GraphError::NodeNotFound(_)) => {
                "check that the id was created by an earlier step and not deleted since"
            }
            Some(GraphError::RootDeletionForbidden(_)) => {
                "the root node cannot be deleted; delete its children instead"
            }
            Some(GraphError::InvariantViolation(_)) => {
                "the graph structure is inconsistent; this is a bug worth reporting"
            }
            None => match self.0 {
                CliError::Config(ConfigError::Palette(_)) => {
                    "palette entries must be CSS colors such as \"#1f77b4\" or \"teal\""
                }
                CliError::Script(_) => {
                    "each [[step]] needs an `op` of insert, delete_hard, delete_soft or set_position"
                }
                _ => return None,
            },
        };
        Some(Box::new(help))
    }
}
