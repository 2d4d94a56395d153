//! Tool binding definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire transport used to reach a remote tool server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Streamable HTTP (default).
    #[default]
    StreamableHttp,
    /// Server-sent events.
    Sse,
}

impl Transport {
    /// Parse a transport from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "streamable_http" => Some(Self::StreamableHttp),
            "sse" => Some(Self::Sse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::StreamableHttp => "streamable_http",
            Transport::Sse => "sse",
        }
    }
}

/// A scoped reference to a remote tool server.
///
/// `active_tools` is the allow-list of remote operations this binding exposes
/// to the agents that reference it. An empty list exposes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolBindingDefinition {
    /// Identifier, unique within the graph's `tools` collection.
    pub id: String,

    /// Human-readable name.
    #[serde(default)]
    pub name: String,

    /// Address of the remote tool server.
    pub server_url: String,

    /// Transport used to reach the server.
    #[serde(default)]
    pub transport: Transport,

    /// Remote operations exposed through this binding.
    #[serde(default)]
    pub active_tools: Vec<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ToolBindingDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, server_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            server_url: server_url.into(),
            ..Default::default()
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_active_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_tools = tools.into_iter().map(Into::into).collect();
        self
    }
}
