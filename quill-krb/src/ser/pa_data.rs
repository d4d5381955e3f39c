use quill_ber::encode::{self, Node};
use quill_ber::EncodeError;

use crate::data_types::PaData;

impl PaData {
    pub(crate) fn build(&self) -> Node {
        Node::sequence(vec![
            Node::context(1, Node::integer(self.padata_type.into())),
            Node::context(2, Node::octet_string(self.padata_value.clone())),
        ])
    }

    /// Serializes to canonical DER.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(self.build()))
    }
}
