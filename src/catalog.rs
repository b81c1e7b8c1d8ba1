//! Tool catalog
//!
//! Insertion-ordered registry of educational tools with lookup by id,
//! category, and curriculum standard. Registration order matters: the
//! ranker's stable sort breaks score ties by catalog order, so storage is a
//! Vec with an id index rather than a bare map.

use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::domain::{Category, Tool};
use crate::error::{Result, ToolrecError};

/// What `register` does when a tool id is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegisterPolicy {
    /// Replace the existing record in place (idempotent re-registration)
    #[default]
    Overwrite,
    /// Fail with DuplicateTool
    Deny,
}

/// JSON file structure for catalog loading
#[derive(Debug, Deserialize)]
struct JsonCatalog {
    tools: Vec<Tool>,
}

/// Catalog of educational tools
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
    policy: RegisterPolicy,
}

impl Catalog {
    /// Create an empty catalog with the default overwrite policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with an explicit duplicate policy
    pub fn with_policy(policy: RegisterPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Load a catalog from a JSON file (`{"tools": [...]}`)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ToolrecError::CatalogLoad(format!("Failed to read catalog file: {}", e)))?;
        Self::from_json_str(&content)
    }

    /// Load a catalog from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: JsonCatalog = serde_json::from_str(content)
            .map_err(|e| ToolrecError::CatalogLoad(format!("Failed to parse catalog JSON: {}", e)))?;

        let mut catalog = Self::new();
        for tool in parsed.tools {
            catalog.register(tool)?;
        }
        Ok(catalog)
    }

    /// Register a tool, validating its invariants first
    ///
    /// With the default policy a duplicate id overwrites in place, keeping
    /// the original catalog position. With `RegisterPolicy::Deny` it fails.
    pub fn register(&mut self, tool: Tool) -> Result<()> {
        validate_tool(&tool)?;

        if let Some(&pos) = self.index.get(&tool.id) {
            if self.policy == RegisterPolicy::Deny {
                return Err(ToolrecError::DuplicateTool(tool.id));
            }
            info!("Re-registered tool: {}", tool.name);
            self.tools[pos] = tool;
            return Ok(());
        }

        info!("Registered tool: {}", tool.name);
        self.index.insert(tool.id.clone(), self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Get a tool by id
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.index.get(id).map(|&pos| &self.tools[pos])
    }

    /// All tools in a category, in registration order
    pub fn by_category(&self, category: Category) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }

    /// All tools addressing a standard code, in registration order
    pub fn by_standard(&self, code: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.addresses_standard(code)).collect()
    }

    /// Iterate all tools in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Validate catalog invariants for a tool record
fn validate_tool(tool: &Tool) -> Result<()> {
    if tool.id.is_empty() {
        return Err(ToolrecError::InvalidInput("tool id must not be empty".to_string()));
    }
    if tool.time_required == 0 {
        return Err(ToolrecError::InvalidInput(format!(
            "tool '{}': time_required must be > 0",
            tool.id
        )));
    }
    for (level, score) in &tool.effectiveness_data {
        if !(0.0..=1.0).contains(score) {
            return Err(ToolrecError::InvalidInput(format!(
                "tool '{}': effectiveness for {} must be in [0, 1], got {}",
                tool.id, level, score
            )));
        }
    }
    Ok(())
}
