//! Session context owning the identity registry and the current graph.
//!
//! Rebuild-from-text is destructive and total: the previous graph and
//! registry are cleared before repopulating, so a rebuild is idempotent with
//! respect to prior state but never incremental. Edit events from the
//! rendering collaborator update the registry synchronously, so a following
//! export never shows stale labels.

use tracing::debug;

use crate::builder;
use crate::chain_parser;
use crate::dsl_parser;
use crate::exporter;
use crate::identity::IdentityRegistry;
use crate::types::{EdgeDef, GraphModel, NodeDef, ParseNote, ParsedGraph, Recognition};

/// Edit capability provided by the rendering collaborator: given the current
/// text, produce the replacement, or `None` to cancel. How the text is
/// obtained (dialog, inline editor) is the collaborator's concern.
pub trait TextEditProvider {
  fn request_text_edit(&self, current: &str) -> Option<String>;
}

/// Detects the input dialect: DSL first, chain shorthand as the fallback.
/// `NotApplicable` from both means the input describes no graph at all.
pub fn parse_flow_text(text: &str) -> Recognition<ParsedGraph> {
  match dsl_parser::parse_dsl(text) {
    Recognition::Recognized(dsl) => Recognition::Recognized(ParsedGraph::Dsl(dsl)),
    Recognition::NotApplicable => match chain_parser::parse_chain(text) {
      Recognition::Recognized(chain) => Recognition::Recognized(ParsedGraph::Chain(chain)),
      Recognition::NotApplicable => Recognition::NotApplicable,
    },
  }
}

/// One active flow document: the built graph plus its identity registry.
#[derive(Debug, Default)]
pub struct FlowDocument {
  registry: IdentityRegistry,
  model: GraphModel,
}

impl FlowDocument {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the whole graph from `text`. Unrecognized or empty input
  /// yields an empty graph, not an error. Returns the parse notes collected
  /// along the way.
  pub fn rebuild_from_text(&mut self, text: &str) -> Vec<ParseNote> {
    match parse_flow_text(text) {
      Recognition::Recognized(parsed) => {
        let notes = match &parsed {
          ParsedGraph::Dsl(dsl) => dsl.notes.clone(),
          ParsedGraph::Chain(_) => Vec::new(),
        };
        self.model = builder::build_graph(&parsed, &mut self.registry);
        notes
      }
      Recognition::NotApplicable => {
        debug!("input matched no dialect; clearing graph");
        self.registry.clear();
        self.model = GraphModel::default();
        Vec::new()
      }
    }
  }

  /// Serializes the current graph back to flow notation.
  pub fn export_text(&self) -> String {
    exporter::export_text(&self.model, &self.registry)
  }

  pub fn model(&self) -> &GraphModel {
    &self.model
  }

  pub fn nodes(&self) -> &[NodeDef] {
    &self.model.nodes
  }

  pub fn edges(&self) -> &[EdgeDef] {
    &self.model.edges
  }

  pub fn registry(&self) -> &IdentityRegistry {
    &self.registry
  }

  /// Applies a node label edit: the node and both registry directions update
  /// together, before any export can run. False when the id is unknown.
  pub fn node_label_changed(&mut self, id: &str, new_text: &str) -> bool {
    let Some(node) = self.model.nodes.iter_mut().find(|n| n.id == id) else {
      return false;
    };
    node.label = new_text.to_string();
    if !self.registry.rename(id, new_text) {
      self.registry.bind(id, new_text);
    }
    true
  }

  /// Applies an edge label edit by index into [`edges`](Self::edges).
  pub fn edge_label_changed(&mut self, index: usize, new_text: &str) -> bool {
    match self.model.edges.get_mut(index) {
      Some(edge) => {
        edge.label = new_text.to_string();
        true
      }
      None => false,
    }
  }

  /// Runs the collaborator-provided edit flow for a node label. Returns true
  /// when a replacement was applied.
  pub fn edit_node_label(&mut self, id: &str, provider: &dyn TextEditProvider) -> bool {
    let current = match self.model.nodes.iter().find(|n| n.id == id) {
      Some(node) => node.label.clone(),
      None => return false,
    };
    match provider.request_text_edit(&current) {
      Some(new_text) => self.node_label_changed(id, &new_text),
      None => false,
    }
  }

  /// Runs the collaborator-provided edit flow for an edge label.
  pub fn edit_edge_label(&mut self, index: usize, provider: &dyn TextEditProvider) -> bool {
    let current = match self.model.edges.get(index) {
      Some(edge) => edge.label.clone(),
      None => return false,
    };
    match provider.request_text_edit(&current) {
      Some(new_text) => self.edge_label_changed(index, &new_text),
      None => false,
    }
  }
}
