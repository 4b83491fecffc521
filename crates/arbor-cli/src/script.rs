//! Editing scripts.
//!
//! A script is a TOML document with an ordered list of `[[step]]` tables,
//! each tagged by `op`:
//!
//! ```toml
//! [[step]]
//! op = "insert"
//! parent = 1
//! name = "services"
//!
//! [[step]]
//! op = "delete_soft"
//! id = 2
//!
//! [[step]]
//! op = "set_position"
//! id = 1
//! x = 10.0
//! y = 20.0
//! ```
//!
//! Steps are replayed in order against a fresh [`Graph`]; the first failing
//! step aborts the replay.

use log::{debug, info};
use serde::Deserialize;

use arbor::{Graph, config::LayoutConfig};
use arbor_core::identifier::NodeId;

use crate::error::CliError;

/// One editing operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Insert {
        parent: NodeId,
        #[serde(default)]
        name: String,
    },
    DeleteHard {
        id: NodeId,
    },
    DeleteSoft {
        id: NodeId,
    },
    SetPosition {
        id: NodeId,
        x: f32,
        y: f32,
    },
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    steps: Vec<Step>,
}

impl Script {
    /// Parses a script from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Script`] if the text is not a valid script.
    pub fn parse(source: &str) -> Result<Self, CliError> {
        toml::from_str(source).map_err(|err| CliError::Script(err.to_string()))
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replays every step against a fresh graph laid out with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Step`] carrying the one-based step number and
    /// the engine error of the first step that fails.
    pub fn replay(&self, config: LayoutConfig) -> Result<Graph, CliError> {
        let mut graph = Graph::with_config(config);
        info!(steps_count = self.steps.len(); "Replaying script");

        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index + 1, op:? = step; "Applying step");
            apply(&mut graph, step).map_err(|source| CliError::Step {
                step: index + 1,
                source,
            })?;
        }

        Ok(graph)
    }
}

fn apply(graph: &mut Graph, step: &Step) -> Result<(), arbor::GraphError> {
    match step {
        Step::Insert { parent, name } => {
            graph.insert_node(*parent, name.as_str())?;
        }
        Step::DeleteHard { id } => {
            graph.delete_node_hard(*id)?;
        }
        Step::DeleteSoft { id } => graph.delete_node_soft(*id)?,
        Step::SetPosition { id, x, y } => graph.set_position(*id, *x, *y)?,
    }
    Ok(())
}
