//! Per-session decode state and the driver loop.

use crate::error::DecodeError;
use crate::grammar::{Grammar, GrammarState, Handler};
use crate::length;
use crate::tlv::{self, Tlv};

/// Result of driving a container over the bytes buffered so far.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeOutcome<D> {
    /// The message is structurally complete; ownership of the domain object
    /// moves to the caller.
    Complete(D),
    /// The buffered bytes end mid-TLV. Not an error: feed another chunk and
    /// the driver resumes at the exact same point.
    NeedMore,
}

struct Close<S> {
    end: usize,
    follow: S,
}

/// Mutable state of one decode session: the byte buffer and cursor, the
/// current grammar state, one pending-close entry per open constructed value,
/// and the in-progress domain object.
///
/// A container belongs to exactly one logical stream and is driven
/// synchronously by whoever owns that stream's I/O; the grammar behind it is
/// shared and never written. Abandoning a session is simply dropping the
/// container. After a failed decode the container is of no further use and
/// should be discarded; other containers over the same grammar are
/// unaffected.
pub struct Container<'g, S: GrammarState, D> {
    grammar: &'g Grammar<S, D>,
    state: S,
    object: D,
    buf: Vec<u8>,
    pos: usize,
    closes: Vec<Close<S>>,
    end_allowed: bool,
}

impl<'g, S: GrammarState, D: Default> Container<'g, S, D> {
    pub fn new(grammar: &'g Grammar<S, D>) -> Self {
        Container {
            grammar,
            state: S::START,
            object: D::default(),
            buf: Vec::new(),
            pos: 0,
            closes: Vec::new(),
            end_allowed: false,
        }
    }

    /// Appends `chunk` to the session buffer and drives the grammar as far
    /// as the buffered bytes allow.
    ///
    /// Splitting an encoding at arbitrary offsets and feeding the pieces
    /// across successive calls yields the same outcome as one call over the
    /// whole encoding. On [`DecodeOutcome::Complete`] the consumed bytes are
    /// dropped and the container re-arms for a pipelined next message on the
    /// same stream.
    pub fn decode(&mut self, chunk: &[u8]) -> Result<DecodeOutcome<D>, DecodeError> {
        self.buf.extend_from_slice(chunk);
        self.run()
    }

    /// True once the object graph is structurally complete, i.e. stopping
    /// here would not cut a message in half.
    pub fn grammar_end_allowed(&self) -> bool {
        self.end_allowed
    }

    /// Bytes buffered beyond the current cursor.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn run(&mut self) -> Result<DecodeOutcome<D>, DecodeError> {
        loop {
            // Return from every constructed value whose octets are exactly
            // exhausted. BER nests by length alone, so this is the only
            // "close" signal there is.
            while let Some(close) = self.closes.last() {
                debug_assert!(self.pos <= close.end);
                if self.pos != close.end {
                    break;
                }
                self.state = close.follow;
                self.closes.pop();
            }

            self.end_allowed = self.closes.is_empty() && self.state.is_end();
            if self.end_allowed {
                debug_log!("{}: complete", self.grammar.name());
                let object = std::mem::take(&mut self.object);
                self.finish_message();
                return Ok(DecodeOutcome::Complete(object));
            }

            let rest = &self.buf[self.pos..];
            let Some((tag, tag_octets)) = tlv::read_tag(rest)? else {
                return Ok(DecodeOutcome::NeedMore);
            };
            let Some((len, len_octets)) = length::read_length(&rest[tag_octets..])? else {
                return Ok(DecodeOutcome::NeedMore);
            };

            let value_start = self.pos + tag_octets + len_octets;
            let value_end = value_start
                .checked_add(len)
                .ok_or(DecodeError::LengthOverflow)?;
            if let Some(close) = self.closes.last() {
                if value_end > close.end {
                    return Err(DecodeError::Malformed(
                        "nested TLV overruns its enclosing value",
                    ));
                }
            }

            let grammar = self.grammar;
            let Some(transition) = grammar.lookup(self.state, tag) else {
                debug_log!("{}: no transition from {:?} on {}", grammar.name(), self.state, tag);
                return Err(DecodeError::UnexpectedTag {
                    grammar: grammar.name(),
                    state: format!("{:?}", self.state),
                    tag,
                });
            };
            debug_log!("{}: {:?} --{}--> {:?}", grammar.name(), self.state, tag, transition.to);

            match transition.handler {
                Handler::Enter { follow, action } => {
                    if let Some(action) = action {
                        action(&mut self.object)?;
                    }
                    self.pos = value_start;
                    self.closes.push(Close {
                        end: value_end,
                        follow,
                    });
                    self.state = transition.to;
                }
                Handler::Primitive(action) => {
                    if self.buf.len() < value_end {
                        return Ok(DecodeOutcome::NeedMore);
                    }
                    let tlv = Tlv {
                        tag,
                        value: &self.buf[value_start..value_end],
                    };
                    action(&mut self.object, &tlv)?;
                    self.pos = value_end;
                    self.state = transition.to;
                }
                Handler::Subdecode(action) => {
                    if self.buf.len() < value_end {
                        return Ok(DecodeOutcome::NeedMore);
                    }
                    action(&mut self.object, &self.buf[self.pos..value_end])?;
                    self.pos = value_end;
                    self.state = transition.to;
                }
            }
        }
    }

    fn finish_message(&mut self) {
        self.buf.drain(..self.pos);
        self.pos = 0;
        self.state = S::START;
        self.end_allowed = false;
    }
}

/// Decodes one complete message from `bytes` in a throwaway container.
///
/// `NeedMore` becomes [`DecodeError::Truncated`] here, and bytes left over
/// after the message are rejected: one-shot callers hold a framed PDU, not a
/// stream.
pub fn decode_full<S: GrammarState, D: Default>(
    grammar: &Grammar<S, D>,
    bytes: &[u8],
) -> Result<D, DecodeError> {
    let mut container = Container::new(grammar);
    match container.decode(bytes)? {
        DecodeOutcome::Complete(object) => {
            if container.remaining() != 0 {
                return Err(DecodeError::Malformed("trailing bytes after complete message"));
            }
            Ok(object)
        }
        DecodeOutcome::NeedMore => Err(DecodeError::Truncated),
    }
}
