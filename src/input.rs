//! Input normalization for [`parse_pems`](crate::parse_pems).
//!
//! PEM data can arrive as a byte buffer, as text, or as a readable stream.
//! [`PemInput`] closes over exactly these three shapes and normalizes each
//! of them into one contiguous byte buffer before any decoding happens.

use std::fs::File;
use std::io::Read;

use crate::error::Result;

/// A PEM input in one of the accepted shapes.
///
/// Values are usually built through the `From` conversions, so callers can
/// hand a `&str`, `String`, `&[u8]`, `Vec<u8>`, or [`File`] directly to
/// [`parse_pems`](crate::parse_pems). Any other readable stream goes
/// through [`PemInput::reader`].
pub enum PemInput {
    /// Raw bytes, used as-is
    Bytes(Vec<u8>),
    /// Text, consumed as its UTF-8 bytes
    Text(String),
    /// A readable stream, fully drained before parsing
    Reader(Box<dyn Read>),
}

impl PemInput {
    /// Wraps any readable stream.
    ///
    /// Normalizing drains the stream to its end, which is destructive:
    /// the stream must not be reused afterwards.
    pub fn reader(reader: impl Read + 'static) -> Self {
        PemInput::Reader(Box::new(reader))
    }

    /// Normalizes the input into one contiguous byte buffer.
    ///
    /// Read failures while draining a stream surface as
    /// [`Error::Read`](crate::Error::Read).
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            PemInput::Bytes(bytes) => Ok(bytes),
            PemInput::Text(text) => Ok(text.into_bytes()),
            PemInput::Reader(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                Ok(bytes)
            }
        }
    }
}

impl From<Vec<u8>> for PemInput {
    fn from(bytes: Vec<u8>) -> Self {
        PemInput::Bytes(bytes)
    }
}

impl From<&[u8]> for PemInput {
    fn from(bytes: &[u8]) -> Self {
        PemInput::Bytes(bytes.to_vec())
    }
}

impl From<String> for PemInput {
    fn from(text: String) -> Self {
        PemInput::Text(text)
    }
}

impl From<&str> for PemInput {
    fn from(text: &str) -> Self {
        PemInput::Text(text.to_string())
    }
}

impl From<File> for PemInput {
    fn from(file: File) -> Self {
        PemInput::Reader(Box::new(file))
    }
}
