//! Resolve a parsed graph into the final node/edge collections.
//!
//! Rebuilds the identity registry from scratch, materializes placeholder
//! nodes for references to nothing, and assigns the deterministic grid
//! layout the rendering surface uses for initial coordinates.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::identity::{self, IdentityRegistry};
use crate::types::{EdgeDef, GraphModel, NodeDef, ParsedChain, ParsedDsl, ParsedGraph};

/// Cell extent and spacing of the placeholder grid layout.
const CELL_WIDTH: f64 = 160.0;
const CELL_HEIGHT: f64 = 60.0;
const CELL_GAP: f64 = 40.0;

/// Builds the final graph from either parse form, rebuilding `registry` in
/// lockstep. Every edge endpoint in the result resolves to a node in the
/// result, unconditionally.
pub fn build_graph(parsed: &ParsedGraph, registry: &mut IdentityRegistry) -> GraphModel {
  registry.clear();
  let mut model = match parsed {
    ParsedGraph::Chain(chain) => build_chain(chain, registry),
    ParsedGraph::Dsl(dsl) => build_dsl(dsl, registry),
  };
  reconcile_edges(&mut model, registry);
  assign_grid_layout(&mut model.nodes);
  info!(
    nodes = model.nodes.len(),
    edges = model.edges.len(),
    "graph build complete"
  );
  model
}

/// Chain form: every label resolves through the registry, creating on first
/// sight and reusing after, so a label seen as a declared node and again as
/// an edge endpoint collapses to one id.
fn build_chain(chain: &ParsedChain, registry: &mut IdentityRegistry) -> GraphModel {
  let mut model = GraphModel::default();
  for label in &chain.nodes {
    let id = registry.id_for_label(label);
    model.nodes.push(NodeDef::new(id, label.clone()));
  }
  for edge in &chain.edges {
    let source = registry.id_for_label(&edge.source);
    let target = registry.id_for_label(&edge.target);
    model.edges.push(EdgeDef::new(source, target, edge.label.clone()));
  }
  model
}

/// DSL form: declared nodes get `n_<token>` ids (last definition of a token
/// wins); edges reference `n_<token>` directly. Tokens referenced by an edge
/// but never declared are materialized as placeholders labeled with the bare
/// token text, so nothing dangles.
fn build_dsl(dsl: &ParsedDsl, registry: &mut IdentityRegistry) -> GraphModel {
  let mut model = GraphModel::default();
  for node in &dsl.nodes {
    let id = identity::dsl_id(&node.token);
    registry.bind(id.clone(), node.label.clone());
    if let Some(existing) = model.nodes.iter_mut().find(|n| n.id == id) {
      existing.label = node.label.clone();
    } else {
      model.nodes.push(NodeDef::new(id, node.label.clone()));
    }
  }
  for edge in &dsl.edges {
    model.edges.push(EdgeDef::new(
      identity::dsl_id(&edge.source),
      identity::dsl_id(&edge.target),
      edge.label.clone(),
    ));
  }

  let mut known: HashSet<String> = model.nodes.iter().map(|n| n.id.clone()).collect();
  for edge in &dsl.edges {
    for token in [&edge.source, &edge.target] {
      let id = identity::dsl_id(token);
      if known.insert(id.clone()) {
        debug!(id = %id, "materializing placeholder for undeclared token");
        registry.bind(id.clone(), token.clone());
        model.nodes.push(NodeDef::new(id, token.clone()));
      }
    }
  }
  model
}

/// Defensive second pass, independent of the per-form logic: any endpoint id
/// still missing from the node set is materialized with a label recovered
/// from the registry, then from the id's encoding, then the raw id text.
fn reconcile_edges(model: &mut GraphModel, registry: &mut IdentityRegistry) {
  let mut known: HashSet<String> = model.nodes.iter().map(|n| n.id.clone()).collect();
  let endpoints: Vec<String> = model
    .edges
    .iter()
    .flat_map(|e| [e.source.clone(), e.target.clone()])
    .collect();
  for id in endpoints {
    if known.insert(id.clone()) {
      let label = match registry.label_of(&id) {
        Some(label) => label.to_string(),
        None => identity::decode_label(&id).unwrap_or_else(|_| id.clone()),
      };
      debug!(id = %id, label = %label, "reconciling dangling edge endpoint");
      registry.bind(id.clone(), label.clone());
      model.nodes.push(NodeDef::new(id, label));
    }
  }
}

/// Row-major grid in node creation order: ceil(sqrt(n)) columns with fixed
/// cell extent and gap. Placeholder coordinates only; real placement belongs
/// to the rendering collaborator.
fn assign_grid_layout(nodes: &mut [NodeDef]) {
  if nodes.is_empty() {
    return;
  }
  let columns = (nodes.len() as f64).sqrt().ceil() as usize;
  for (i, node) in nodes.iter_mut().enumerate() {
    let column = i % columns;
    let row = i / columns;
    node.x = CELL_GAP + column as f64 * (CELL_WIDTH + CELL_GAP);
    node.y = CELL_GAP + row as f64 * (CELL_HEIGHT + CELL_GAP);
    node.width = CELL_WIDTH;
    node.height = CELL_HEIGHT;
  }
}
