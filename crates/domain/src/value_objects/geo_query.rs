//! Free-form query text carried in a geo URI

use std::fmt;

use percent_encoding::percent_decode_str;

/// Escaped form of `&` inside a geo URI query
pub const ESCAPED_AMPERSAND: &str = "%26";

/// Characters whose escapes survive decoding, as with JavaScript `decodeURI`
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

/// Query text as entered by the user
///
/// Only `&` is escaped when the query is embedded in a geo URI. The payload
/// ends up in a QR code, not in a strict URI parser, so no other
/// percent-encoding is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GeoQuery {
    value: String,
}

impl GeoQuery {
    /// Wrap raw query text
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Recover query text from the raw `q=` segment of a maps link
    ///
    /// `+` becomes a space first, then `%26` becomes `&`, then the rest is
    /// URI-decoded: escapes of reserved characters such as `%2C` or `%2B`
    /// stay as they are. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_link_segment(raw: &str) -> Self {
        let unescaped = raw.replace('+', " ").replace(ESCAPED_AMPERSAND, "&");
        Self::new(decode_uri(&unescaped))
    }

    /// The query text, unescaped
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The query with `&` escaped for embedding in a geo URI
    pub fn escaped(&self) -> String {
        self.value.replace('&', ESCAPED_AMPERSAND)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for GeoQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Percent-decode everything except escapes of reserved characters
fn decode_uri(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut chunk_start = 0;
    let mut pos = 0;

    while let Some(offset) = input[pos..].find('%') {
        let escape_start = pos + offset;
        let reserved = input
            .get(escape_start + 1..escape_start + 3)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .is_some_and(|byte| URI_RESERVED.contains(&byte));

        if reserved {
            let chunk = &input[chunk_start..escape_start];
            decoded.push_str(&percent_decode_str(chunk).decode_utf8_lossy());
            decoded.push_str(&input[escape_start..escape_start + 3]);
            chunk_start = escape_start + 3;
            pos = chunk_start;
        } else {
            pos = escape_start + 1;
        }
    }

    decoded.push_str(&percent_decode_str(&input[chunk_start..]).decode_utf8_lossy());
    decoded
}
