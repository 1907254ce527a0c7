//! Stable node identity: inverse id↔label maps plus the id codec.
//!
//! Chain-form ids are a reversible encoding of the trimmed label (URL-safe
//! unpadded base64), so the same label always yields the same id across
//! rebuilds. DSL-form ids are the fixed prefix plus the literal numeric token
//! from the source text, so `3.` always yields `n_3` regardless of label.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use thiserror::Error;

/// Fixed prefix for ids derived from DSL numeric tokens.
pub const DSL_ID_PREFIX: &str = "n_";

/// Error recovering a label from an encoded id. Callers fall back to the raw
/// id text; this never propagates out of the crate.
#[derive(Debug, Error)]
pub enum IdDecodeError {
  #[error("invalid base64: {0}")]
  Base64(#[from] base64::DecodeError),
  #[error("decoded bytes are not utf-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Encodes a trimmed label into its stable id.
pub fn encode_label(label: &str) -> String {
  URL_SAFE_NO_PAD.encode(label.trim().as_bytes())
}

/// Reverses [`encode_label`].
pub fn decode_label(id: &str) -> Result<String, IdDecodeError> {
  let bytes = URL_SAFE_NO_PAD.decode(id.as_bytes())?;
  Ok(String::from_utf8(bytes)?)
}

/// Builds the id for a DSL numeric token (`3` → `n_3`).
pub fn dsl_id(token: &str) -> String {
  format!("{DSL_ID_PREFIX}{token}")
}

/// Bidirectional id↔label mapping scoped to one built graph.
///
/// The two maps are inverses of each other; every update touches both sides
/// in one operation, removing the stale label key before inserting the new
/// pairing. Cleared and rebuilt in lockstep with each full rebuild from text;
/// this is the only state that survives a build-export-edit-rebuild cycle.
#[derive(Debug, Default, Clone)]
pub struct IdentityRegistry {
  id_to_label: HashMap<String, String>,
  label_to_id: HashMap<String, String>,
}

impl IdentityRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Drops every mapping. Called at the start of each full rebuild.
  pub fn clear(&mut self) {
    self.id_to_label.clear();
    self.label_to_id.clear();
  }

  /// Resolves a label to its stable id, creating the entry on first sight and
  /// reusing it on every subsequent sight.
  pub fn id_for_label(&mut self, label: &str) -> String {
    let label = label.trim();
    if let Some(id) = self.label_to_id.get(label) {
      return id.clone();
    }
    let id = encode_label(label);
    self.id_to_label.insert(id.clone(), label.to_string());
    self.label_to_id.insert(label.to_string(), id.clone());
    id
  }

  /// Binds an id to a label, dropping the stale label key when the id was
  /// already paired with a different label.
  pub fn bind(&mut self, id: impl Into<String>, label: impl Into<String>) {
    let id = id.into();
    let label = label.into();
    if let Some(old_label) = self.id_to_label.insert(id.clone(), label.clone()) {
      if old_label != label
        && self.label_to_id.get(&old_label).map(String::as_str) == Some(id.as_str())
      {
        self.label_to_id.remove(&old_label);
      }
    }
    self.label_to_id.insert(label, id);
  }

  /// Renames the node behind `id`, updating both directions as one step.
  /// Returns false when the id is unknown.
  pub fn rename(&mut self, id: &str, new_label: &str) -> bool {
    let Some(old_label) = self.id_to_label.get(id).cloned() else {
      return false;
    };
    if self.label_to_id.get(&old_label).map(String::as_str) == Some(id) {
      self.label_to_id.remove(&old_label);
    }
    self.id_to_label.insert(id.to_string(), new_label.to_string());
    self.label_to_id.insert(new_label.to_string(), id.to_string());
    true
  }

  pub fn label_of(&self, id: &str) -> Option<&str> {
    self.id_to_label.get(id).map(String::as_str)
  }

  pub fn id_of(&self, label: &str) -> Option<&str> {
    self.label_to_id.get(label).map(String::as_str)
  }

  pub fn contains_id(&self, id: &str) -> bool {
    self.id_to_label.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.id_to_label.len()
  }

  pub fn is_empty(&self) -> bool {
    self.id_to_label.is_empty()
  }
}
