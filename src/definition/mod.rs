//! Graph definition documents.
//!
//! A definition is the unvalidated, serde-backed form of a graph: agents and
//! tool bindings reference each other by id. Definitions are usually read
//! from `*.graph.yaml` files and turned into a validated
//! [`Graph`](crate::graph::Graph) with [`GraphDefinition::build`].
//!
//! Every definition is independent. Two files may declare the same graph id;
//! they are built and checked separately and never merged.

mod agent;
mod discovery;
mod graph;
mod status;
mod tool;


pub use agent::AgentDefinition;
pub use discovery::discover_definitions;
pub use graph::GraphDefinition;
pub use status::{ComponentSchema, PropertySchema, SchemaKind, StatusComponent, StatusUpdates};
pub use tool::{ToolBindingDefinition, Transport};
