//! Relay: validator and exporter for declarative conversational agent graphs.
//!
//! A graph is a set of agents with one entry point, tool bindings that scope
//! which remote operations each agent may call, and a delegation relation
//! describing which agent may hand a conversation to which. Relay checks these
//! definitions before they are handed to an orchestration runtime:
//!
//! - [`graph`]: build an immutable [`graph::Graph`] from a definition
//! - [`scope`]: resolve the operations an agent is permitted to invoke
//! - [`delegation`]: reachability, self-delegation, and cycle analysis
//! - [`manifest`]: JSON rendering for the runtime

pub mod config;
pub mod definition;
pub mod delegation;
pub mod error;
pub mod exit_codes;
pub mod graph;
pub mod lint;
pub mod logging;
pub mod manifest;
pub mod scope;
