//! Recognizer for the arrow-chain shorthand dialect.
//!
//! `Fetch -> Parse -> Render` is three nodes and two edges. Edge labels are
//! not expressible in this form by design; the DSL dialect carries them.

use std::collections::HashSet;

use tracing::trace;

use crate::syntax;
use crate::types::{ParsedChain, ParsedEdge, Recognition};

/// Recognizes arrow-chain shorthand. Each line is one chain; a label reused
/// across lines names the same node, which is how multi-line fan-out text
/// reconnects into one graph.
///
/// Segments are split on the arrow token, trimmed, and empties dropped. The
/// node list is deduplicated preserving first-seen order; edges follow the
/// raw segment sequence of each line, one per consecutive pair with an empty
/// label, so a repeated label keeps its edges and cycles stay representable.
/// Fewer than two distinct segments, or no edges at all, means the dialect
/// does not apply — this is a recognizer, not a validator.
pub fn parse_chain(text: &str) -> Recognition<ParsedChain> {
  let mut seen: HashSet<String> = HashSet::new();
  let mut nodes: Vec<String> = Vec::new();
  let mut edges: Vec<ParsedEdge> = Vec::new();

  for line in text.lines() {
    let segments: Vec<&str> = syntax::ARROW
      .split(line)
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .collect();
    for &seg in &segments {
      if seen.insert(seg.to_string()) {
        nodes.push(seg.to_string());
      }
    }
    for pair in segments.windows(2) {
      edges.push(ParsedEdge::new(pair[0], pair[1], ""));
    }
  }

  if nodes.len() < 2 || edges.is_empty() {
    return Recognition::NotApplicable;
  }

  trace!(
    nodes = nodes.len(),
    edges = edges.len(),
    "chain shorthand recognized"
  );
  Recognition::Recognized(ParsedChain { nodes, edges })
}
