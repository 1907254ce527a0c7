//! Core data model: rendering-facing node/edge defs and parse-stage forms.

mod edge_def;
#[cfg(test)]
mod edge_def_test;
mod graph_model;
mod node_def;
#[cfg(test)]
mod node_def_test;
mod parsed_graph;
#[cfg(test)]
mod parsed_graph_test;

pub use edge_def::EdgeDef;
pub use graph_model::GraphModel;
pub use node_def::NodeDef;
pub use parsed_graph::{
  DslNode, ParseNote, ParsedChain, ParsedDsl, ParsedEdge, ParsedGraph, Recognition,
};
