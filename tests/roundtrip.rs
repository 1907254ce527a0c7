//! Round-trip properties over generated flow texts.
//!
//! The generators stay inside the encodable alphabet (no arrows, pipes, or
//! leading digits in labels); what the encoding cannot carry is covered by
//! the unit tests instead.

use flownote::FlowDocument;
use proptest::prelude::*;

/// Letters and inner spaces only: nothing that could read as an arrow, a
/// definition prefix, a hop delimiter, or a blank continuation.
fn label_strategy() -> impl Strategy<Value = String> {
  proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,10}[A-Za-z]").unwrap()
}

proptest! {
  #[test]
  fn dsl_round_trip_is_structure_preserving(
    labels in proptest::collection::vec(label_strategy(), 1..6),
    raw_edges in proptest::collection::vec(
      (0usize..6, 0usize..6, proptest::option::of(label_strategy())),
      0..8,
    ),
  ) {
    let n = labels.len();
    let mut lines: Vec<String> = labels
      .iter()
      .enumerate()
      .map(|(i, label)| format!("{}.{}", i + 1, label))
      .collect();
    for (s, t, label) in &raw_edges {
      let src = s % n + 1;
      let tgt = t % n + 1;
      match label {
        Some(l) => lines.push(format!("{src}->|{l}|{tgt}")),
        None => lines.push(format!("{src}->{tgt}")),
      }
    }
    let text = lines.join("\n");

    let mut doc = FlowDocument::new();
    doc.rebuild_from_text(&text);
    let exported = doc.export_text();

    let mut reparsed = FlowDocument::new();
    reparsed.rebuild_from_text(&exported);

    prop_assert_eq!(doc.model(), reparsed.model());
    prop_assert_eq!(&reparsed.export_text(), &exported);
  }

  #[test]
  fn chain_round_trip_preserves_linear_chains(
    labels in proptest::collection::hash_set(label_strategy(), 2..6),
  ) {
    let labels: Vec<String> = labels.into_iter().collect();
    let text = labels.join(" -> ");

    let mut doc = FlowDocument::new();
    doc.rebuild_from_text(&text);
    let exported = doc.export_text();

    let mut reparsed = FlowDocument::new();
    reparsed.rebuild_from_text(&exported);

    prop_assert_eq!(doc.model(), reparsed.model());
  }

  #[test]
  fn rebuild_is_idempotent(
    labels in proptest::collection::vec(label_strategy(), 1..5),
  ) {
    let text = labels
      .iter()
      .enumerate()
      .map(|(i, label)| format!("{}.{}", i + 1, label))
      .collect::<Vec<_>>()
      .join("\n");

    let mut first = FlowDocument::new();
    first.rebuild_from_text(&text);
    let mut second = FlowDocument::new();
    second.rebuild_from_text(&text);
    prop_assert_eq!(first.model(), second.model());
  }
}
