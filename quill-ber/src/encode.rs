//! Two-pass BER/DER encoder.
//!
//! Length octets precede value octets on the wire, so every constructed
//! value's content length must be known before its first byte is written.
//! Encoding therefore runs in two passes over a [`Node`] tree built by the
//! per-message encoders: [`Node::compute_length`] resolves and caches every
//! content length bottom-up, producing a [`Measured`] tree;
//! [`Measured::encode_into`] then writes identifier, length and value octets
//! top-down. Only a `Measured` tree can be written, so "encode before the
//! lengths were computed" is unrepresentable rather than a runtime error.

use byteorder::{BigEndian, ByteOrder};

use crate::error::EncodeError;
use crate::length;
use crate::tag::Tag;

/// One ASN.1 value, not yet measured. Children are kept in encoding order;
/// BER/DER is order-sensitive, so builders must emit fields exactly as the
/// message grammar reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Primitive { tag: Tag, value: Vec<u8> },
    Constructed { tag: Tag, children: Vec<Node> },
}

impl Node {
    pub fn boolean(value: bool) -> Self {
        Node::Primitive {
            tag: Tag::BOOLEAN,
            value: vec![if value { 0xFF } else { 0x00 }],
        }
    }

    /// Minimal two's-complement INTEGER.
    pub fn integer(value: i64) -> Self {
        Node::Primitive {
            tag: Tag::INTEGER,
            value: integer_octets(value),
        }
    }

    pub fn octet_string(value: impl Into<Vec<u8>>) -> Self {
        Node::Primitive {
            tag: Tag::OCTET_STRING,
            value: value.into(),
        }
    }

    /// GeneralString restricted to ASCII, matching what the decode side
    /// accepts.
    pub fn general_string(value: &str) -> Result<Self, EncodeError> {
        if !value.is_ascii() {
            return Err(EncodeError::NonAsciiGeneralString);
        }
        Ok(Node::Primitive {
            tag: Tag::GENERAL_STRING,
            value: value.as_bytes().to_vec(),
        })
    }

    pub fn sequence(children: Vec<Node>) -> Self {
        Node::Constructed {
            tag: Tag::SEQUENCE,
            children,
        }
    }

    pub fn set(children: Vec<Node>) -> Self {
        Node::Constructed {
            tag: Tag::SET,
            children,
        }
    }

    /// Explicitly-tagged context field: `[number] inner`.
    pub fn context(number: u32, inner: Node) -> Self {
        Node::Constructed {
            tag: Tag::context(number),
            children: vec![inner],
        }
    }

    /// Explicitly-tagged application wrapper: `[APPLICATION number] inner`.
    pub fn application(number: u32, inner: Node) -> Self {
        Node::Constructed {
            tag: Tag::application(number),
            children: vec![inner],
        }
    }

    /// First pass: resolve every content length bottom-up.
    pub fn compute_length(self) -> Measured {
        match self {
            Node::Primitive { tag, value } => Measured {
                tag,
                value_len: value.len(),
                content: MeasuredContent::Primitive(value),
            },
            Node::Constructed { tag, children } => {
                let children: Vec<Measured> =
                    children.into_iter().map(Node::compute_length).collect();
                let value_len: usize = children.iter().map(Measured::encoded_len).sum();
                Measured {
                    tag,
                    value_len,
                    content: MeasuredContent::Constructed(children),
                }
            }
        }
    }
}

/// A node tree with every content length resolved; the only input
/// [`Measured::encode_into`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measured {
    tag: Tag,
    value_len: usize,
    content: MeasuredContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MeasuredContent {
    Primitive(Vec<u8>),
    Constructed(Vec<Measured>),
}

impl Measured {
    /// Total wire size: identifier octets, length octets, value octets.
    pub fn encoded_len(&self) -> usize {
        self.tag.encoded_len() + length::encoded_len(self.value_len) + self.value_len
    }

    /// Second pass: write identifier, length and value octets top-down.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        self.tag.encode_into(out);
        length::write_length(out, self.value_len);
        match &self.content {
            MeasuredContent::Primitive(value) => out.extend_from_slice(value),
            MeasuredContent::Constructed(children) => {
                for child in children {
                    child.encode_into(out);
                }
            }
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out);
        out
    }
}

/// Measures and writes `node` in one go.
pub fn to_vec(node: Node) -> Vec<u8> {
    node.compute_length().to_vec()
}

fn integer_octets(value: i64) -> Vec<u8> {
    let mut octets = [0u8; 8];
    BigEndian::write_i64(&mut octets, value);
    let mut skip = 0;
    while skip < 7 {
        let redundant = (octets[skip] == 0x00 && octets[skip + 1] & 0x80 == 0)
            || (octets[skip] == 0xFF && octets[skip + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        skip += 1;
    }
    octets[skip..].to_vec()
}
