use std::io;

use thiserror::Error;

use crate::label::Label;
use crate::object::ObjectParseError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a PEM bundle or consuming the
/// parsed objects.
#[derive(Debug, Error)]
pub enum Error {
    /// Draining a stream input failed before any PEM decoding happened
    #[error("failed to read PEM input: {0}")]
    Read(#[from] io::Error),

    /// The PEM decoder rejected the framing of the input
    #[error("invalid PEM framing: {0}")]
    Pem(#[from] pem::PemError),

    /// A block with a recognized label did not parse as that structure.
    /// The whole parse is aborted; no objects are returned.
    #[error("failed to parse {label} block: {source}")]
    BlockParse {
        label: Label,
        source: ObjectParseError,
    },

    /// The input contained no block with a recognized label
    #[error("no supported PEM blocks found")]
    NoSupportedBlocks,

    /// A label outside the four recognized block labels
    #[error("unrecognized PEM label {0:?}")]
    UnrecognizedLabel(String),

    /// A take was attempted on an already drained object set
    #[error("no parsed objects left to take")]
    NoObjectsLeft,

    /// A typed take did not match the frontmost object. The object stays
    /// in place and can be taken with the matching accessor.
    #[error("expected the next object to be {expected}, found {actual}")]
    ObjectMismatch { expected: Label, actual: Label },
}
