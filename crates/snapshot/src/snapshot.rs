use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::value::Value;

/// A captured view of a debuggee's variables at one stopped point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    /// Program the capture was taken from, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Captured variables, in capture order.
    #[serde(default)]
    pub variables: Vec<Variable>,
}

/// One captured variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

impl ProcessSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a snapshot file.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(text).map_err(|e| SnapshotError::Parse(e.to_string()))
    }

    /// Add a variable, keeping capture order.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.variables.push(Variable {
            name: name.into(),
            value,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.value)
    }

    /// Captured variable names, for the host's default symbol completion.
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.name.clone()).collect()
    }
}
