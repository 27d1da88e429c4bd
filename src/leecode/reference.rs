//! Human-readable listing of the code table.

use std::borrow::Cow;
use std::fmt;

use super::table::{self, Code};

/// One row of the reference listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub code: Code,
    pub character: char,
}

impl ReferenceEntry {
    /// Printable form of the character.
    ///
    /// Whitespace gets a spelled-out name since it would be invisible otherwise.
    pub fn label(&self) -> Cow<'static, str> {
        match self.character {
            ' ' => Cow::Borrowed("SPACE"),
            '\t' => Cow::Borrowed("TAB"),
            '\n' => Cow::Borrowed("NEWLINE"),
            '\r' => Cow::Borrowed("CARRIAGE RETURN"),
            c => Cow::Owned(c.to_string()),
        }
    }

    /// Short description of what kind of character this is.
    pub fn description(&self) -> String {
        let named = match self.character {
            ' ' => Some("Space"),
            '\t' => Some("Tab"),
            '\n' => Some("Newline"),
            '\r' => Some("Carriage Return"),
            '\u{2014}' => Some("Em Dash"),
            '\'' => Some("Apostrophe"),
            '"' => Some("Quote"),
            _ => None,
        };

        match (named, self.character) {
            (Some(name), _) => name.to_string(),
            (None, c) if c.is_ascii_alphabetic() => format!("Letter {}", c),
            (None, c) if c.is_ascii_digit() => format!("Digit {}", c),
            (None, c) => format!("Symbol {}", c),
        }
    }
}

impl fmt::Display for ReferenceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.code, self.label())
    }
}

/// All table entries, sorted by code ascending.
pub fn reference_table() -> Vec<ReferenceEntry> {
    Code::all()
        .map(|code| ReferenceEntry {
            code,
            character: table::backward(code),
        })
        .collect()
}
