//! # Image Data URLs
//!
//! Images picked in the sell form live in memory as `data:` URLs until they are
//! uploaded. These helpers build and take apart such URLs.

use base64::{engine::general_purpose, Engine as _};

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A decoded `data:<mime>;base64,<payload>` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    /// File extension guessed from the MIME type, used when naming uploads.
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "jpg",
        }
    }
}

/// Encode raw bytes as a base64 `data:` URL.
pub fn encode_data_url(mime_type: &str, content: impl AsRef<[u8]>) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!(
        "{DATA_PREFIX}{mime_type}{BASE64_MARKER}{}",
        general_purpose::STANDARD.encode(content)
    )
}

/// Whether the reference is an inline `data:` URL rather than a remote URL.
pub fn is_data_url(reference: &str) -> bool {
    reference.starts_with(DATA_PREFIX)
}

/// Decode a base64 `data:` URL into its MIME type and bytes.
pub fn decode_data_url(url: &str) -> Result<DataUrl, Error> {
    let rest = url.strip_prefix(DATA_PREFIX).ok_or(Error::NotDataUrl)?;
    let (mime_type, payload) = rest.split_once(BASE64_MARKER).ok_or(Error::NotBase64)?;

    let bytes = general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| Error::FailToB64Decode)?;

    Ok(DataUrl {
        mime_type: mime_type.to_string(),
        bytes,
    })
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotDataUrl,
    NotBase64,
    FailToB64Decode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        let url = encode_data_url("image/png", b"hi");
        assert_eq!(url, "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_decode_data_url() {
        let decoded = decode_data_url("data:image/jpeg;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded.mime_type, "image/jpeg");
        assert_eq!(decoded.bytes, b"hello");
        assert_eq!(decoded.extension(), "jpg");
    }

    #[test]
    fn test_decode_rejects_remote_url() {
        assert_eq!(
            decode_data_url("https://via.placeholder.com/150"),
            Err(Error::NotDataUrl)
        );
        assert_eq!(decode_data_url("data:text/plain,hello"), Err(Error::NotBase64));
    }

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,AAAA"));
        assert!(!is_data_url("https://cloud.appwrite.io/v1/storage/buckets/b/files/f/view"));
    }
}
