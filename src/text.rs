//! Conversion between UTF-8 and the platform's wide (UTF-16) strings.
//!
//! Both directions validate strictly: malformed input fails with an
//! [`EncodingError`] instead of being truncated or substituted with
//! replacement characters. Empty input converts to empty output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("invalid UTF-8 input: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid UTF-16 input: {0}")]
    Utf16(#[from] std::string::FromUtf16Error),
}

/// Encodes UTF-8 bytes as UTF-16 code units.
pub fn encode_wide(input: &[u8]) -> Result<Vec<u16>, EncodingError> {
    let text = std::str::from_utf8(input)?;
    Ok(text.encode_utf16().collect())
}

/// Decodes UTF-16 code units back into a UTF-8 string.
pub fn decode_wide(input: &[u16]) -> Result<String, EncodingError> {
    Ok(String::from_utf16(input)?)
}
