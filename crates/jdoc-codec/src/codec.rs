use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use jdoc_types::Document;

use crate::error::{CodecError, CodecResult};

/// Encodes documents to persisted text and decodes them back.
///
/// Implementations must be deterministic: encoding the same document twice
/// yields the same text.
pub trait DocumentCodec: Send + Sync {
    fn encode(&self, document: &Document) -> CodecResult<String>;

    /// Decode persisted bytes. Bytes that are not valid text are a decode
    /// failure like any other malformed content.
    fn decode(&self, bytes: &[u8]) -> CodecResult<Document>;
}

/// Pretty-printed JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonCodec {
    indent: usize,
}

impl JsonCodec {
    /// Canonical codec: two-space indentation.
    pub fn new() -> Self {
        Self { indent: 2 }
    }

    /// Codec with a custom indent width. An indent of zero still emits
    /// newlines between entries.
    pub fn with_indent(indent: usize) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentCodec for JsonCodec {
    fn encode(&self, document: &Document) -> CodecResult<String> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        document
            .serialize(&mut serializer)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<Document> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
