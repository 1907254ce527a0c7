//! Regenerate flow notation text from the live graph model.
//!
//! The form is decided from identifier shape alone: when every node id has
//! the DSL shape (`n_` plus digits) the DSL form is emitted, otherwise the
//! shorthand form. Label lookups go through the identity registry; a missing
//! entry falls back to the empty string, never a panic.

use tracing::trace;

use crate::identity::{DSL_ID_PREFIX, IdentityRegistry};
use crate::syntax;
use crate::types::GraphModel;

/// Serializes the model back to flow notation. An empty model yields an
/// empty string. Line order follows node/edge insertion order, so a
/// round-trip preserves labels and structure, not source line order.
pub fn export_text(model: &GraphModel, registry: &IdentityRegistry) -> String {
  if model.nodes.is_empty() {
    return String::new();
  }
  let dsl_form = model.nodes.iter().all(|n| syntax::DSL_ID.is_match(&n.id));
  trace!(dsl_form, "export form chosen from id shape");
  if dsl_form {
    export_dsl(model, registry)
  } else {
    export_chain(model, registry)
  }
}

fn label_of(registry: &IdentityRegistry, id: &str) -> String {
  registry.label_of(id).unwrap_or_default().to_string()
}

/// DSL form: `token.label` per node, then `src->tgt` / `src->|label|tgt` per
/// edge. Multi-line labels embed their newlines and re-parse as
/// continuation lines.
fn export_dsl(model: &GraphModel, registry: &IdentityRegistry) -> String {
  let mut lines: Vec<String> = Vec::new();
  for node in &model.nodes {
    let token = node.id.strip_prefix(DSL_ID_PREFIX).unwrap_or(&node.id);
    lines.push(format!("{}.{}", token, label_of(registry, &node.id)));
  }
  for edge in &model.edges {
    let src = edge.source.strip_prefix(DSL_ID_PREFIX).unwrap_or(&edge.source);
    let tgt = edge.target.strip_prefix(DSL_ID_PREFIX).unwrap_or(&edge.target);
    if edge.label.is_empty() {
      lines.push(format!("{src}->{tgt}"));
    } else {
      lines.push(format!("{}->|{}|{}", src, edge.label, tgt));
    }
  }
  lines.join("\n")
}

/// Shorthand form: one edge per line. Fan-out degrades to multiple lines and
/// parallel edges stay as separate lines; branching has no compact chain
/// encoding. Nodes with no edges are not representable here.
fn export_chain(model: &GraphModel, registry: &IdentityRegistry) -> String {
  let mut lines: Vec<String> = Vec::new();
  for edge in &model.edges {
    let src = label_of(registry, &edge.source);
    let tgt = label_of(registry, &edge.target);
    if edge.label.is_empty() {
      lines.push(format!("{src} -> {tgt}"));
    } else {
      lines.push(format!("{} -> |{}| {}", src, edge.label, tgt));
    }
  }
  lines.join("\n")
}
