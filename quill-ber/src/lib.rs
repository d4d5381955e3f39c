//! Grammar-driven BER/DER tag-length-value codec engine.
//!
//! Every wire message type is described by an immutable [`Grammar`]: a
//! `(state, tag) -> transition` table built once and shared read-only across
//! any number of concurrent decode sessions. A [`Container`] holds the
//! mutable side of one session — byte buffer, cursor, grammar state, the
//! in-progress domain object — and its driver consumes TLVs until the
//! message completes, more bytes are needed, or the input turns out to be
//! malformed. Encoding is the symmetric two-pass walk in [`encode`]:
//! measure every content length bottom-up, then write top-down.
//!
//! ```
//! use quill_ber::{actions, decode_full, DecodeError, Grammar, GrammarState, Tag, Tlv};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum State {
//!     Start,
//!     Value,
//!     ValueEnd,
//!     End,
//! }
//!
//! impl GrammarState for State {
//!     const START: Self = State::Start;
//!
//!     fn is_end(self) -> bool {
//!         self == State::End
//!     }
//! }
//!
//! fn store(out: &mut i64, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
//!     *out = actions::integer(tlv, actions::Ruleset::Der)?;
//!     Ok(())
//! }
//!
//! let grammar: Grammar<State, i64> = Grammar::builder("demo")
//!     .enter(State::Start, Tag::SEQUENCE, State::Value, State::End)
//!     .primitive(State::Value, Tag::INTEGER, State::ValueEnd, store)
//!     .build();
//!
//! let value = decode_full(&grammar, &[0x30, 0x03, 0x02, 0x01, 0x2A]).unwrap();
//! assert_eq!(value, 42);
//! ```

#[macro_use]
mod debug_log;

pub mod actions;
pub mod container;
pub mod encode;
pub mod error;
pub mod grammar;
pub mod length;
pub mod tag;
pub mod tlv;

pub use container::{decode_full, Container, DecodeOutcome};
pub use encode::{Measured, Node};
pub use error::{DecodeError, EncodeError};
pub use grammar::{
    EnterAction, Grammar, GrammarBuilder, GrammarState, Handler, SubdecodeAction, Transition,
    ValueAction,
};
pub use tag::{Tag, TagClass};
pub use tlv::Tlv;
