//! Shared lexical layer for both notation dialects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Arrow token: one-or-more dashes followed by `>`, or the unicode arrow.
pub(crate) static ARROW: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"-+>|\u{2192}").expect("arrow pattern"));

/// Definition line: a digit run, a dot, then the initial label text.
pub(crate) static DEFINITION: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(\d+)\.(.*)$").expect("definition pattern"));

/// Shape of a DSL-derived node id: the fixed prefix plus the literal token.
pub(crate) static DSL_ID: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^n_\d+$").expect("dsl id pattern"));

/// Returns true if the line carries at least one arrow token.
pub(crate) fn contains_arrow(line: &str) -> bool {
  ARROW.is_match(line)
}
