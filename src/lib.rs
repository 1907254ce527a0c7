//! # flownote
//!
//! Bidirectional translator between a compact textual flow notation and an
//! in-memory directed-graph model.
//!
//! Two surface dialects, auto-detected DSL-first:
//!
//! - arrow-chain shorthand: `Fetch -> Parse -> Render`
//! - numbered-node DSL: `1.Fetch`, `2.Parse`, `1->|ok|2`, with multi-line
//!   labels via continuation lines
//!
//! Parsing is forgiving by policy: unrecognized dialects, malformed hops, and
//! references to undeclared nodes all degrade to a best-effort graph instead
//! of an error. Round-trips (text → graph → text) preserve node identity and
//! edge labels wherever the encoding allows; the exporter picks the output
//! form from identifier shape alone.
//!
//! The rendering surface (canvas, gestures, placement) is an external
//! collaborator: it consumes [`GraphModel`] and feeds label edits back
//! through [`FlowDocument`].

pub mod builder;
pub mod chain_parser;
pub mod document;
pub mod dsl_parser;
pub mod exporter;
pub mod identity;
#[cfg(test)]
mod identity_test;
pub(crate) mod syntax;
#[cfg(test)]
mod syntax_test;
pub mod types;

pub use builder::build_graph;
pub use chain_parser::parse_chain;
pub use document::{FlowDocument, TextEditProvider, parse_flow_text};
pub use dsl_parser::parse_dsl;
pub use exporter::export_text;
pub use identity::IdentityRegistry;
pub use types::{EdgeDef, GraphModel, NodeDef, ParseNote, ParsedGraph, Recognition};
