//! Text resource loading for static snippets.
//!
//! Resolves a location string to text. Supported forms:
//! - `http://` and `https://` URLs (blocking GET)
//! - `data:` URLs, base64 or percent-encoded
//! - `file:` URLs and plain filesystem paths
//!
//! Nothing is cached; every call reads the resource again.
use std::fs;
use std::time::Duration;

use base64::Engine;
use thiserror::Error;

/// User-Agent header sent with all requests.
const USER_AGENT: &str = concat!("scribe/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Why a resource could not be turned into text.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP client could not be built or the request failed.
    #[error("request for '{url}' failed: {source}")]
    Network {
        /// Requested URL.
        url: String,
        /// Underlying client failure.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("HTTP error {status} for '{url}'")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// A `data:` URL without the mandatory comma.
    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),
    /// The payload of a `data:` URL could not be decoded.
    #[error("failed to decode data URL payload: {0}")]
    Decode(String),
    /// The resource bytes are not UTF-8.
    #[error("resource '{0}' is not valid UTF-8")]
    NotUtf8(String),
}

/// A parsed `data:` URL that can be decoded into raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// Everything between `data:` and the comma (e.g. `text/html;base64`).
    pub metadata: &'a str,
    /// The encoded payload after the comma.
    pub payload: &'a str,
}

impl<'a> DataUrl<'a> {
    /// Split a raw `data:` URL into metadata and payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidDataUrl`] if there is no `data:` prefix
    /// or no comma separating metadata from payload.
    pub fn parse(raw: &'a str) -> Result<Self, ResourceError> {
        let rest = raw
            .strip_prefix("data:")
            .ok_or_else(|| ResourceError::InvalidDataUrl("missing 'data:' prefix".to_string()))?;
        let (metadata, payload) = rest
            .split_once(',')
            .ok_or_else(|| ResourceError::InvalidDataUrl("missing comma".to_string()))?;
        Ok(Self { metadata, payload })
    }

    /// Whether the payload is base64 encoded.
    #[must_use]
    pub fn is_base64(&self) -> bool {
        self.metadata.ends_with(";base64")
    }

    /// Decode the payload into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if base64 decoding fails or a percent
    /// escape is malformed.
    pub fn decode(&self) -> Result<Vec<u8>, ResourceError> {
        if self.is_base64() {
            base64::engine::general_purpose::STANDARD
                .decode(self.payload)
                .map_err(|e| ResourceError::Decode(e.to_string()))
        } else {
            percent_decode(self.payload)
        }
    }
}

fn percent_decode(input: &str) -> Result<Vec<u8>, ResourceError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = input
                .get(i + 1..i + 3)
                .ok_or_else(|| ResourceError::Decode(format!("truncated escape at byte {i}")))?;
            let byte = u8::from_str_radix(hex, 16)
                .map_err(|_| ResourceError::Decode(format!("bad escape '%{hex}'")))?;
            out.push(byte);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

/// Load the text behind `location`.
///
/// # Errors
///
/// Returns a [`ResourceError`] if the resource cannot be read, fetched or
/// decoded, or if its bytes are not UTF-8.
pub fn load_text(location: &str) -> Result<String, ResourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_text(location)
    } else if location.starts_with("data:") {
        let bytes = DataUrl::parse(location)?.decode()?;
        String::from_utf8(bytes).map_err(|_| ResourceError::NotUtf8(location.to_string()))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_string(),
            source,
        })
    }
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, ResourceError> {
    let network = |source| ResourceError::Network {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(network)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(network)?;

    if !response.status().is_success() {
        return Err(ResourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }

    response.text().map_err(network)
}
