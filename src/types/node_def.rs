//! A node in the flow graph, positioned for the rendering surface.

use serde::{Deserialize, Serialize};

/// A node in the flow graph, positioned for the rendering surface.
///
/// `id` is the stable identifier assigned by the builder; `label` is free-form
/// text and may contain embedded newlines (multi-line descriptions). The
/// geometry fields carry the deterministic grid placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
  pub id: String,
  pub label: String,
  pub x: f64,
  pub y: f64,
  pub width: f64,
  pub height: f64,
}

impl NodeDef {
  /// Creates a node at the origin; the builder assigns grid geometry later.
  pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      label: label.into(),
      x: 0.0,
      y: 0.0,
      width: 0.0,
      height: 0.0,
    }
  }
}
