//! Tests for `identity`.

use crate::identity::{
  IdentityRegistry, decode_label, dsl_id, encode_label,
};

#[test]
fn encode_is_stable_and_reversible() {
  let id = encode_label("Fetch data");
  assert_eq!(id, encode_label("Fetch data"));
  assert_eq!(decode_label(&id).unwrap(), "Fetch data");
}

#[test]
fn encode_trims_before_encoding() {
  assert_eq!(encode_label("  Fetch data  "), encode_label("Fetch data"));
}

#[test]
fn distinct_labels_get_distinct_ids() {
  assert_ne!(encode_label("Fetch"), encode_label("Parse"));
}

#[test]
fn decode_rejects_garbage() {
  assert!(decode_label("!!not base64!!").is_err());
}

#[test]
fn dsl_id_prefixes_the_literal_token() {
  assert_eq!(dsl_id("3"), "n_3");
  assert_eq!(dsl_id("03"), "n_03");
}

#[test]
fn id_for_label_creates_then_reuses() {
  let mut reg = IdentityRegistry::new();
  let first = reg.id_for_label("Start");
  let second = reg.id_for_label("Start");
  assert_eq!(first, second);
  assert_eq!(reg.len(), 1);
  assert_eq!(reg.label_of(&first), Some("Start"));
  assert_eq!(reg.id_of("Start"), Some(first.as_str()));
}

#[test]
fn bind_replaces_stale_label_pairing() {
  let mut reg = IdentityRegistry::new();
  reg.bind("n_1", "Start");
  reg.bind("n_1", "Begin");
  assert_eq!(reg.label_of("n_1"), Some("Begin"));
  assert_eq!(reg.id_of("Begin"), Some("n_1"));
  assert_eq!(reg.id_of("Start"), None, "old label key must be removed");
  assert_eq!(reg.len(), 1);
}

#[test]
fn rename_updates_both_directions_atomically() {
  let mut reg = IdentityRegistry::new();
  reg.bind("n_1", "Start");
  assert!(reg.rename("n_1", "Begin"));
  assert_eq!(reg.label_of("n_1"), Some("Begin"));
  assert_eq!(reg.id_of("Begin"), Some("n_1"));
  assert_eq!(reg.id_of("Start"), None);
}

#[test]
fn rename_unknown_id_is_refused() {
  let mut reg = IdentityRegistry::new();
  assert!(!reg.rename("n_9", "anything"));
  assert!(reg.is_empty());
}

#[test]
fn clear_drops_everything() {
  let mut reg = IdentityRegistry::new();
  reg.bind("n_1", "Start");
  reg.id_for_label("Loose");
  reg.clear();
  assert!(reg.is_empty());
  assert_eq!(reg.label_of("n_1"), None);
  assert_eq!(reg.id_of("Loose"), None);
}
