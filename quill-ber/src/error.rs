use crate::tag::Tag;
use thiserror::Error;

/// Errors reported while driving a decode.
///
/// Every variant is recoverable per-PDU: the caller discards the failed
/// [`Container`](crate::Container) and the shared grammar table is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Structurally invalid TLV or value octets.
    #[error("malformed encoding: {0}")]
    Malformed(&'static str),

    /// A definite length does not fit the engine's integer width.
    #[error("TLV length does not fit in usize")]
    LengthOverflow,

    /// The grammar has no transition for this tag in the current state.
    #[error("unexpected tag {tag} in state {grammar}::{state}")]
    UnexpectedTag {
        grammar: &'static str,
        state: String,
        tag: Tag,
    },

    /// A mandatory field was absent or carried an empty value.
    #[error("missing mandatory field {0}")]
    MissingMandatoryField(&'static str),

    /// A one-shot decode ran out of bytes mid-message.
    #[error("truncated message")]
    Truncated,
}

/// Errors reported while building an encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// GeneralString only carries characters from the ASCII repertoire here.
    #[error("GeneralString value contains non-ASCII characters")]
    NonAsciiGeneralString,
}
