use quill_ber::encode::{self, Node};
use quill_ber::EncodeError;

use crate::data_types::PrincipalName;

impl PrincipalName {
    pub(crate) fn build(&self) -> Result<Node, EncodeError> {
        let mut strings = Vec::with_capacity(self.name_string.len());
        for part in &self.name_string {
            strings.push(Node::general_string(part)?);
        }
        Ok(Node::sequence(vec![
            Node::context(0, Node::integer(self.name_type.into())),
            Node::context(1, Node::sequence(strings)),
        ]))
    }

    /// Serializes to canonical DER.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(self.build()?))
    }
}
