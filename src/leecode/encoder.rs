//! Text -> Leecode encoding.

use log::debug;

use super::error::EncodeError;
use super::normalize::normalize;
use super::table;

/// Encodes `text` as a string of two-digit codes.
///
/// The input is normalized first, so runs of spaces encode as a single `94`.
/// Empty input yields an empty string. The first character without a table
/// entry aborts the whole operation.
pub fn encode(text: &str) -> Result<String, EncodeError> {
    if text.is_empty() {
        return Ok(String::new());
    }

    let normalized = normalize(text);
    let mut encoded = String::with_capacity(normalized.len() * 2);

    for (position, character) in normalized.chars().enumerate() {
        let code = table::forward(character).ok_or(EncodeError::UnsupportedCharacter {
            character,
            code_point: u32::from(character),
            position,
        })?;
        encoded.extend(code.digits());
    }

    debug!("Encoded {} chars -> {} digits", encoded.len() / 2, encoded.len());
    Ok(encoded)
}
