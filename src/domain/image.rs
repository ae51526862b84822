//! Image payload resolution.
//!
//! A record's image reaches us in one of three incompatible encodings: a
//! browser-produced data URI, a bare base64 string round-tripped through the
//! service, or a storage layer's serialized binary column (a tagged byte
//! array whose bytes are the *character codes* of the previously-encoded
//! string). [`ImagePayload`] keeps the distinction explicit and
//! [`ImagePayload::normalize`] collapses all of them into one displayable
//! URI.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Marker identifying a string that is already an inline-image URI.
pub const INLINE_IMAGE_MARKER: &str = "data:image";

/// Prefix applied to bare encoded payloads before display.
pub const INLINE_IMAGE_PREFIX: &str = "data:image/png;base64,";

/// Discriminator used by storage layers that serialize binary columns as
/// tagged byte arrays.
pub const BYTE_WRAPPER_TAG: &str = "Buffer";

/// One image value in any of the accepted wire encodings.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagePayload {
    /// Self-describing inline-image URI, displayable as is.
    EmbeddedUri(String),
    /// Bare encoded payload that still needs the inline prefix.
    RawText(String),
    /// Serialized binary column: the bytes are character codes of a
    /// previously-encoded string, not raw image data.
    Bytes(Vec<u8>),
}

impl ImagePayload {
    /// Classifies a plain string. Empty input means no image.
    pub fn from_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else if text.starts_with(INLINE_IMAGE_MARKER) {
            Some(Self::EmbeddedUri(text))
        } else {
            Some(Self::RawText(text))
        }
    }

    /// Interprets an arbitrary JSON value as an image payload. Shapes other
    /// than a string or a tagged byte array yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Self::from_text(text.clone()),
            Value::Object(map) => {
                if map.get("type")?.as_str()? != BYTE_WRAPPER_TAG {
                    return None;
                }
                let bytes = map
                    .get("data")?
                    .as_array()?
                    .iter()
                    .map(|item| item.as_u64().and_then(|n| u8::try_from(n).ok()))
                    .collect::<Option<Vec<u8>>>()?;
                Some(Self::Bytes(bytes))
            }
            _ => None,
        }
    }

    /// Resolves the payload to a displayable inline-image URI.
    ///
    /// Total over all variants: already-inlined URIs pass through unchanged
    /// (so the resolution is idempotent), bare payloads get the fixed inline
    /// prefix, and byte wrappers are first rebuilt into the string whose
    /// character codes they carry and then classified like any other string.
    #[must_use]
    pub fn normalize(&self) -> Option<String> {
        match self {
            Self::EmbeddedUri(uri) => Some(uri.clone()),
            Self::RawText(payload) => Some(format!("{INLINE_IMAGE_PREFIX}{payload}")),
            Self::Bytes(bytes) => {
                let text: String = bytes.iter().map(|&byte| char::from(byte)).collect();
                Self::from_text(text)?.normalize()
            }
        }
    }
}

/// Resolves an optional payload, treating absence as no image.
#[must_use]
pub fn normalize(image: Option<&ImagePayload>) -> Option<String> {
    image.and_then(ImagePayload::normalize)
}

/// Builds the inline data URI for a freshly selected image file, given its
/// raw bytes and MIME type.
#[must_use]
pub fn data_uri_from_bytes(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Decodes an image field leniently: unknown shapes become `None` instead of
/// failing the whole record.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<ImagePayload>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(ImagePayload::from_value))
}

impl Serialize for ImagePayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::EmbeddedUri(text) | Self::RawText(text) => serializer.serialize_str(text),
            Self::Bytes(bytes) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", BYTE_WRAPPER_TAG)?;
                map.serialize_entry("data", bytes)?;
                map.end()
            }
        }
    }
}
