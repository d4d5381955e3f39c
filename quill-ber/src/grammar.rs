//! Per-message-type transition tables.
//!
//! A [`Grammar`] is built once, then shared read-only by any number of
//! concurrent decode containers. Transitions carry plain `fn` pointers, so a
//! grammar is nothing but data: no locking, no interior mutability.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::DecodeError;
use crate::tag::Tag;
use crate::tlv::Tlv;

/// The state enum of one message-type grammar.
///
/// Every grammar has a distinguished start state and at least one terminal
/// state; the driver accepts a message only when the terminal state is
/// reached with no constructed value left open.
pub trait GrammarState: Copy + Eq + Hash + Debug + 'static {
    const START: Self;

    fn is_end(self) -> bool;
}

/// Runs against the value octets of a fully-buffered primitive TLV.
pub type ValueAction<D> = fn(&mut D, &Tlv<'_>) -> Result<(), DecodeError>;

/// Structural step taken when a constructed value is opened, before any of
/// its content is read (e.g. append a fresh element to a repeated field).
pub type EnterAction<D> = fn(&mut D) -> Result<(), DecodeError>;

/// Hands a complete TLV (identifier and length octets included) to a nested
/// per-substructure decoder.
pub type SubdecodeAction<D> = fn(&mut D, &[u8]) -> Result<(), DecodeError>;

/// What the driver does when a transition fires.
pub enum Handler<S, D> {
    /// Descend into a constructed value. `follow` is the state the container
    /// resumes in once the value octets are exhausted.
    Enter {
        follow: S,
        action: Option<EnterAction<D>>,
    },
    /// Consume one primitive TLV and run the action over its value.
    Primitive(ValueAction<D>),
    /// Consume one TLV wholesale and run a nested decoder over it.
    Subdecode(SubdecodeAction<D>),
}

impl<S: Copy, D> Clone for Handler<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, D> Copy for Handler<S, D> {}

/// One edge of the grammar: fires on a specific tag in a specific state.
pub struct Transition<S, D> {
    pub to: S,
    pub handler: Handler<S, D>,
}

impl<S: Copy, D> Clone for Transition<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Copy, D> Copy for Transition<S, D> {}

/// Immutable `(state, tag) -> transition` table for one message type.
pub struct Grammar<S: GrammarState, D> {
    name: &'static str,
    transitions: HashMap<(S, Tag), Transition<S, D>>,
}

impl<S: GrammarState, D> Grammar<S, D> {
    pub fn builder(name: &'static str) -> GrammarBuilder<S, D> {
        GrammarBuilder {
            name,
            transitions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// `None` means "unexpected tag in this state": a decode error for the
    /// calling container, never a panic.
    pub fn lookup(&self, state: S, tag: Tag) -> Option<&Transition<S, D>> {
        self.transitions.get(&(state, tag))
    }
}

/// Collects transitions and enforces determinism: registering two outgoing
/// edges for the same `(state, tag)` is a programmer error caught at
/// construction, i.e. at process start for the usual lazy singletons.
pub struct GrammarBuilder<S: GrammarState, D> {
    name: &'static str,
    transitions: HashMap<(S, Tag), Transition<S, D>>,
}

impl<S: GrammarState, D> GrammarBuilder<S, D> {
    pub fn enter(self, from: S, tag: Tag, to: S, follow: S) -> Self {
        assert!(
            tag.is_constructed(),
            "grammar {}: enter transition on primitive tag {}",
            self.name,
            tag
        );
        self.insert(
            from,
            tag,
            Transition {
                to,
                handler: Handler::Enter {
                    follow,
                    action: None,
                },
            },
        )
    }

    pub fn enter_with(self, from: S, tag: Tag, to: S, follow: S, action: EnterAction<D>) -> Self {
        assert!(
            tag.is_constructed(),
            "grammar {}: enter transition on primitive tag {}",
            self.name,
            tag
        );
        self.insert(
            from,
            tag,
            Transition {
                to,
                handler: Handler::Enter {
                    follow,
                    action: Some(action),
                },
            },
        )
    }

    pub fn primitive(self, from: S, tag: Tag, to: S, action: ValueAction<D>) -> Self {
        assert!(
            !tag.is_constructed(),
            "grammar {}: primitive transition on constructed tag {}",
            self.name,
            tag
        );
        self.insert(
            from,
            tag,
            Transition {
                to,
                handler: Handler::Primitive(action),
            },
        )
    }

    pub fn subdecode(self, from: S, tag: Tag, to: S, action: SubdecodeAction<D>) -> Self {
        self.insert(
            from,
            tag,
            Transition {
                to,
                handler: Handler::Subdecode(action),
            },
        )
    }

    pub fn build(self) -> Grammar<S, D> {
        Grammar {
            name: self.name,
            transitions: self.transitions,
        }
    }

    fn insert(mut self, from: S, tag: Tag, transition: Transition<S, D>) -> Self {
        let previous = self.transitions.insert((from, tag), transition);
        assert!(
            previous.is_none(),
            "grammar {}: duplicate transition from {:?} on {}",
            self.name,
            from,
            tag
        );
        self
    }
}
