//! Tests for `types::edge_def`.

use crate::types::EdgeDef;

#[test]
fn new_sets_endpoints_and_label() {
  let e = EdgeDef::new("n_1", "n_2", "yes");
  assert_eq!(e.source, "n_1");
  assert_eq!(e.target, "n_2");
  assert_eq!(e.label, "yes");
}
