//! Input normalization applied before encoding.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Compiled pattern for runs of ASCII spaces.
///
/// Only U+0020 is matched; tabs, newlines and carriage returns each have
/// their own code and pass through untouched.
static SPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached space-run pattern.
fn space_run_regex() -> &'static Regex {
    SPACE_RUN.get_or_init(|| Regex::new(r" {2,}").expect("Invalid space-run regex pattern"))
}

/// Collapses every run of consecutive spaces into a single space.
///
/// Text without such runs is returned borrowed.
pub fn normalize(text: &str) -> Cow<'_, str> {
    space_run_regex().replace_all(text, " ")
}
