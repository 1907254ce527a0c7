//! Resolved node/edge collections consumed by the rendering surface.

use serde::{Deserialize, Serialize};

use super::{EdgeDef, NodeDef};

/// The resolved graph: every edge endpoint references a node present in
/// `nodes`. Rebuilt wholesale on every build-from-text; never diffed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
  pub nodes: Vec<NodeDef>,
  pub edges: Vec<EdgeDef>,
}

impl GraphModel {
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }
}
