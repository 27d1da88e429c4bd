//! The Leecode code table.
//!
//! Each of the 98 supported characters owns one two-digit code in `00..=97`.
//! The forward direction is a constant array indexed by code; the inverse
//! index is built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use log::trace;

/// Number of entries in the table. Codes run from `00` to `CODE_COUNT - 1`.
pub const CODE_COUNT: usize = 98;

/// Characters in code order: `CHARACTERS[n]` is encoded as `n` written with two digits.
const CHARACTERS: [char; CODE_COUNT] = [
    // 00-25
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    // 26-51
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    // 52-61
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    // 62-71
    '.', ',', '?', '!', ';', ':', '\'', '"', '-', '\u{2014}',
    // 72-81
    '(', ')', '[', ']', '{', '}', '/', '\\', '|', '@',
    // 82-93
    '#', '$', '%', '^', '&', '*', '_', '~', '`', '<', '>', '=',
    // 94-97
    ' ', '\t', '\n', '\r',
];

static INVERSE: OnceLock<HashMap<char, Code>> = OnceLock::new();

/// Returns the cached character -> code index.
fn inverse() -> &'static HashMap<char, Code> {
    INVERSE.get_or_init(|| {
        trace!("Building Leecode inverse index ({} entries)", CODE_COUNT);
        CHARACTERS
            .iter()
            .enumerate()
            .map(|(idx, &c)| (c, Code(idx as u8)))
            .collect()
    })
}

/// A valid two-digit Leecode code.
///
/// Only values present in the table can be constructed, so every `Code`
/// maps back to exactly one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u8);

impl Code {
    /// Wraps a numeric code, or `None` if it is outside `0..CODE_COUNT`.
    pub fn new(value: u8) -> Option<Self> {
        ((value as usize) < CODE_COUNT).then_some(Self(value))
    }

    /// Parses a two-digit group such as `"07"`.
    ///
    /// Anything that is not exactly two ASCII digits naming a table entry
    /// yields `None`, including the unused codes `98` and `99`.
    pub fn parse(pair: &str) -> Option<Self> {
        match pair.as_bytes() {
            [tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Self::new((tens - b'0') * 10 + (ones - b'0')),
            _ => None,
        }
    }

    /// The numeric value, `0..=97`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The two ASCII digits of this code.
    pub fn digits(self) -> [char; 2] {
        [char::from(b'0' + self.0 / 10), char::from(b'0' + self.0 % 10)]
    }

    /// Every code in ascending order.
    pub fn all() -> impl Iterator<Item = Code> {
        (0..CODE_COUNT as u8).map(Code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Looks up the code for `c`, or `None` if the character is not supported.
pub fn forward(c: char) -> Option<Code> {
    inverse().get(&c).copied()
}

/// The character a code stands for.
pub fn backward(code: Code) -> char {
    CHARACTERS[code.0 as usize]
}

/// Looks up a raw two-digit group, e.g. `"34"` -> `'i'`.
pub fn lookup(pair: &str) -> Option<char> {
    Code::parse(pair).map(backward)
}

/// Whether `c` has an entry in the table.
pub fn is_supported(c: char) -> bool {
    inverse().contains_key(&c)
}
