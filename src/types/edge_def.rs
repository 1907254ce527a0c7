//! An edge in the flow graph.

use serde::{Deserialize, Serialize};

/// An edge in the flow graph.
///
/// `source` and `target` reference [`NodeDef`](super::NodeDef) ids after
/// resolution, never raw labels. `label` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
  pub source: String,
  pub target: String,
  pub label: String,
}

impl EdgeDef {
  pub fn new(
    source: impl Into<String>,
    target: impl Into<String>,
    label: impl Into<String>,
  ) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      label: label.into(),
    }
  }
}
