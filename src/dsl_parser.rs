//! Recognizer for the numbered-node DSL dialect.
//!
//! Three line classes, scanned top to bottom:
//! - definition: `1.Fetch data` — the digit run is the literal id token,
//!   kept as text so leading structure survives;
//! - continuation: any non-empty line that is neither a definition nor a
//!   connection — appended to the previous definition's label with a newline;
//! - connection: any non-empty line carrying an arrow token, e.g.
//!   `1->2->|yes|3`. Connection lines may appear before the definitions they
//!   reference.
//!
//! Anomalies are tolerated, not rejected: a malformed hop degrades to a bare
//! target and a continuation with nothing to attach to is dropped, each
//! leaving a [`ParseNote`] for callers that care.

use tracing::debug;

use crate::syntax;
use crate::types::{DslNode, ParseNote, ParsedDsl, ParsedEdge, Recognition};

/// One hop of a connection line: an optional inline label plus the target
/// token. The label belongs to the edge entering the target.
struct Hop {
  label: String,
  target: String,
}

/// Recognizes the numbered-node DSL.
///
/// Returns `NotApplicable` when no definition line is found, letting the
/// caller fall back to the chain recognizer.
pub fn parse_dsl(text: &str) -> Recognition<ParsedDsl> {
  let mut nodes: Vec<DslNode> = Vec::new();
  let mut edges: Vec<ParsedEdge> = Vec::new();
  let mut notes: Vec<ParseNote> = Vec::new();

  for raw_line in text.lines() {
    let line = raw_line.trim();
    if line.is_empty() {
      continue;
    }
    if let Some(caps) = syntax::DEFINITION.captures(line) {
      nodes.push(DslNode {
        token: caps[1].to_string(),
        label: caps[2].trim().to_string(),
      });
      continue;
    }
    if syntax::contains_arrow(line) {
      parse_connection(line, &mut edges, &mut notes);
      continue;
    }
    match nodes.last_mut() {
      Some(node) if node.label.is_empty() => node.label = line.to_string(),
      Some(node) => {
        node.label.push('\n');
        node.label.push_str(line);
      }
      None => notes.push(ParseNote::OrphanContinuation {
        line: line.to_string(),
      }),
    }
  }

  if nodes.is_empty() {
    return Recognition::NotApplicable;
  }
  debug!(
    nodes = nodes.len(),
    edges = edges.len(),
    notes = notes.len(),
    "dsl recognized"
  );
  Recognition::Recognized(ParsedDsl {
    nodes,
    edges,
    notes,
  })
}

/// Splits a connection line into hops and emits one edge per consecutive
/// pair; the edge label is the label of the hop it points into.
fn parse_connection(line: &str, edges: &mut Vec<ParsedEdge>, notes: &mut Vec<ParseNote>) {
  let hops: Vec<Hop> = syntax::ARROW
    .split(line)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .filter_map(|raw| parse_hop(raw, notes))
    .collect();

  for pair in hops.windows(2) {
    edges.push(ParsedEdge::new(
      pair[0].target.clone(),
      pair[1].target.clone(),
      pair[1].label.clone(),
    ));
  }
}

/// Parses one hop: `|label|target` or a bare target. Anything else degrades
/// to a bare target with an empty label; a hop with no target at all is
/// dropped. Both outcomes leave a note.
fn parse_hop(raw: &str, notes: &mut Vec<ParseNote>) -> Option<Hop> {
  let (label, target) = match raw.strip_prefix('|') {
    Some(rest) => match rest.split_once('|') {
      Some((label, target)) => (label.trim().to_string(), target.trim().to_string()),
      None => {
        notes.push(ParseNote::MalformedHop {
          raw: raw.to_string(),
        });
        (String::new(), rest.trim().to_string())
      }
    },
    None => (String::new(), raw.to_string()),
  };
  if target.is_empty() {
    notes.push(ParseNote::MalformedHop {
      raw: raw.to_string(),
    });
    return None;
  }
  Some(Hop { label, target })
}
