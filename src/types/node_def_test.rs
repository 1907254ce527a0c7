//! Tests for `types::node_def`.

use crate::types::NodeDef;

#[test]
fn new_starts_at_origin_with_zero_extent() {
  let n = NodeDef::new("n_1", "Start");
  assert_eq!(n.id, "n_1");
  assert_eq!(n.label, "Start");
  assert_eq!((n.x, n.y), (0.0, 0.0));
  assert_eq!((n.width, n.height), (0.0, 0.0));
}

#[test]
fn label_keeps_embedded_newlines() {
  let n = NodeDef::new("n_2", "Start\nmore detail");
  assert_eq!(n.label, "Start\nmore detail");
}
