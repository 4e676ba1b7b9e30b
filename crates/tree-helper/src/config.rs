//! Field names that link records into a tree

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default name of the record identifier field
pub const DEFAULT_ID: &str = "id";

/// Default name of the field holding child records
pub const DEFAULT_CHILDREN: &str = "children";

/// Default name of the parent identifier field
pub const DEFAULT_PID: &str = "pid";

/// The three structurally significant field names of a record
///
/// Every tree operation reads linkage through this configuration; no field
/// name is hard-coded in the algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeConfig {
    /// Name of the identifier field
    pub id: String,

    /// Name of the field holding the ordered child records
    pub children: String,

    /// Name of the parent identifier field (flat lists only)
    pub pid: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID.to_string(),
            children: DEFAULT_CHILDREN.to_string(),
            pid: DEFAULT_PID.to_string(),
        }
    }
}

impl TreeConfig {
    /// Create a configuration with the default field names
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the identifier field name
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Override the children field name
    pub fn with_children(mut self, children: impl Into<String>) -> Self {
        self.children = children.into();
        self
    }

    /// Override the parent identifier field name
    pub fn with_pid(mut self, pid: impl Into<String>) -> Self {
        self.pid = pid.into();
        self
    }

    /// Load a configuration from a JSON document
    ///
    /// The document may name any subset of `id`, `children` and `pid`;
    /// omitted names use the defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        let partial: PartialTreeConfig = serde_json::from_str(json)?;
        Ok(partial.resolve())
    }
}

/// A caller-supplied override of some of the field names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PartialTreeConfig {
    pub id: Option<String>,
    pub children: Option<String>,
    pub pid: Option<String>,
}

impl PartialTreeConfig {
    /// Fill every omitted name with its default
    pub fn resolve(self) -> TreeConfig {
        TreeConfig {
            id: self.id.unwrap_or_else(|| DEFAULT_ID.to_string()),
            children: self
                .children
                .unwrap_or_else(|| DEFAULT_CHILDREN.to_string()),
            pid: self.pid.unwrap_or_else(|| DEFAULT_PID.to_string()),
        }
    }
}

impl From<PartialTreeConfig> for TreeConfig {
    fn from(partial: PartialTreeConfig) -> Self {
        partial.resolve()
    }
}
