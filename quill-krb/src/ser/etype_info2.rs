use quill_ber::encode::{self, Node};
use quill_ber::EncodeError;

use crate::data_types::{EtypeInfo2, EtypeInfo2Entry};

impl EtypeInfo2Entry {
    fn build(&self) -> Result<Node, EncodeError> {
        let mut fields = vec![Node::context(0, Node::integer(self.etype.into()))];
        if let Some(salt) = &self.salt {
            fields.push(Node::context(1, Node::general_string(salt)?));
        }
        if let Some(s2kparams) = &self.s2kparams {
            fields.push(Node::context(2, Node::octet_string(s2kparams.clone())));
        }
        Ok(Node::sequence(fields))
    }
}

impl EtypeInfo2 {
    pub(crate) fn build(&self) -> Result<Node, EncodeError> {
        let mut entries = Vec::with_capacity(self.0.len());
        for entry in &self.0 {
            entries.push(entry.build()?);
        }
        Ok(Node::sequence(entries))
    }

    /// Serializes to canonical DER.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(self.build()?))
    }
}
