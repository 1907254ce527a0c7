//! Tests for `syntax`.

use crate::syntax::{ARROW, DEFINITION, DSL_ID, contains_arrow};

#[test]
fn arrow_matches_dash_runs_and_unicode() {
  assert!(contains_arrow("a -> b"));
  assert!(contains_arrow("a --> b"));
  assert!(contains_arrow("a ----> b"));
  assert!(contains_arrow("a → b"));
  assert!(!contains_arrow("a - b"));
  assert!(!contains_arrow("a > b"));
}

#[test]
fn arrow_split_keeps_surrounding_text() {
  let parts: Vec<&str> = ARROW.split("a-->b→c").collect();
  assert_eq!(parts, vec!["a", "b", "c"]);
}

#[test]
fn definition_captures_token_and_rest() {
  let caps = DEFINITION.captures("12. Fetch data").unwrap();
  assert_eq!(&caps[1], "12");
  assert_eq!(&caps[2], " Fetch data");
}

#[test]
fn definition_rejects_non_numeric_prefix() {
  assert!(DEFINITION.captures("a.Fetch").is_none());
  assert!(DEFINITION.captures("Fetch").is_none());
}

#[test]
fn dsl_id_requires_prefix_and_digits() {
  assert!(DSL_ID.is_match("n_3"));
  assert!(DSL_ID.is_match("n_03"));
  assert!(!DSL_ID.is_match("n_"));
  assert!(!DSL_ID.is_match("n_3x"));
  assert!(!DSL_ID.is_match("QQ"));
}
