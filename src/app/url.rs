//! URL validation utilities.

use std::fmt;

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::InvalidUrl;

/// An input line that passed validation.
///
/// Keeps the line as written (used in every printed message) next to the
/// parsed form (used for the request).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUrl {
    raw: String,
    parsed: Url,
}

impl ValidatedUrl {
    /// The URL exactly as it appeared in the input (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed URL.
    pub fn parsed(&self) -> &Url {
        &self.parsed
    }
}

impl fmt::Display for ValidatedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Checks that a line is a well-formed absolute URL.
///
/// Syntax only: a scheme and a host must be present. Nothing is resolved or
/// contacted. Lines longer than `MAX_URL_LENGTH` are rejected before parsing.
///
/// # Arguments
///
/// * `line` - A single input line, already trimmed
///
/// # Errors
///
/// Returns the specific `InvalidUrl` reason when the line is not acceptable.
pub fn validate_url(line: &str) -> Result<ValidatedUrl, InvalidUrl> {
    if line.len() > MAX_URL_LENGTH {
        return Err(InvalidUrl::TooLong {
            length: line.len(),
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(line).map_err(|source| InvalidUrl::Syntax {
        line: line.to_string(),
        source,
    })?;

    if !parsed.has_host() {
        return Err(InvalidUrl::MissingHost {
            line: line.to_string(),
        });
    }

    Ok(ValidatedUrl {
        raw: line.to_string(),
        parsed,
    })
}

/// Turns a raw input line into text.
///
/// # Errors
///
/// Returns `InvalidUrl::NotUtf8` (with a lossy rendering of the bytes for
/// the diagnostic) when the line is not valid UTF-8.
pub fn decode_line(bytes: Vec<u8>) -> Result<String, InvalidUrl> {
    String::from_utf8(bytes).map_err(|e| InvalidUrl::NotUtf8 {
        line: String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
    })
}

/// Whether a line should be skipped without being validated (blank or `#` comment).
pub fn is_skippable(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
