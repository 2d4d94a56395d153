//! Status-update policy and structured status component schemas.
//!
//! The runtime periodically summarizes progress for the user. This module only
//! describes the cadence and the typed payloads it may fill; scheduling belongs
//! to the runtime.
//!
//! # Schema format
//!
//! ```yaml
//! status_components:
//!   - id: task_progress
//!     name: Task Progress
//!     type: progress
//!     schema:
//!       type: object
//!       properties:
//!         stage: { type: string }
//!         progress: { type: number }
//!         standard_ids: { type: array, items: { type: string } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

fn default_true() -> bool {
    true
}

/// How and when the runtime emits progress summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdates {
    /// Whether status updates are emitted at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Emit an update after this many runtime events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_events: Option<u32>,

    /// Emit an update after this many seconds without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_in_seconds: Option<u64>,

    /// Model that writes the summaries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Instructions for the summarizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Structured payloads the summarizer may populate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_components: Vec<StatusComponent>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for StatusUpdates {
    fn default() -> Self {
        Self {
            enabled: true,
            num_events: None,
            time_in_seconds: None,
            model: None,
            prompt: None,
            status_components: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// A typed status payload the summarizer may fill alongside its prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusComponent {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Free-form tag interpreted by the runtime.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub schema: ComponentSchema,
}

impl StatusComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            schema: ComponentSchema::default(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.schema.properties.insert(name.into(), schema);
        self
    }
}

/// Only object schemas are accepted at the top level of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Object,
}

/// Object schema of a status component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSchema {
    #[serde(rename = "type", default)]
    pub kind: SchemaKind,

    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
}

/// Type of a single status property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PropertySchema {
    String,
    Number,
    Boolean,
    Array { items: Box<PropertySchema> },
}

impl PropertySchema {
    pub fn array_of(items: PropertySchema) -> Self {
        PropertySchema::Array {
            items: Box::new(items),
        }
    }
}

impl fmt::Display for PropertySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertySchema::String => write!(f, "string"),
            PropertySchema::Number => write!(f, "number"),
            PropertySchema::Boolean => write!(f, "boolean"),
            PropertySchema::Array { items } => write!(f, "array<{}>", items),
        }
    }
}
