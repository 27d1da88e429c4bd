//! Leecode -> text decoding.

use log::debug;

use super::error::DecodeError;
use super::table;

/// Decodes a Leecode string back into text.
///
/// Every character that is not an ASCII digit is dropped before the digits
/// are paired up, so `"07 14"` and `"0714"` decode identically.
/// Empty input yields an empty string.
///
/// # Errors
/// - [`DecodeError::InvalidLength`] if the cleaned digit count is odd
/// - [`DecodeError::UnknownCode`] for the first pair with no table entry
pub fn decode(code: &str) -> Result<String, DecodeError> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let digits: String = code.chars().filter(char::is_ascii_digit).collect();
    if digits.len() % 2 != 0 {
        return Err(DecodeError::InvalidLength { digits: digits.len() });
    }

    // All retained chars are ASCII, so byte offsets are char boundaries.
    let mut decoded = String::with_capacity(digits.len() / 2);
    for (position, start) in (0..digits.len()).step_by(2).enumerate() {
        let pair = &digits[start..start + 2];
        let character = table::lookup(pair).ok_or_else(|| DecodeError::UnknownCode {
            code: pair.to_string(),
            position,
        })?;
        decoded.push(character);
    }

    debug!("Decoded {} digits -> {} chars", digits.len(), digits.len() / 2);
    Ok(decoded)
}
