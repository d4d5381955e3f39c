use quill_ber::encode::{self, Node};
use quill_ber::EncodeError;

use crate::data_types::PaData;
use crate::messages::{AsReq, KdcReq};

impl KdcReq {
    pub(crate) fn build(&self) -> Result<Node, EncodeError> {
        let mut fields = vec![
            Node::context(1, Node::integer(self.pvno.into())),
            Node::context(2, Node::integer(self.msg_type.into())),
        ];
        if !self.padata.is_empty() {
            let entries = self.padata.iter().map(PaData::build).collect();
            fields.push(Node::context(3, Node::sequence(entries)));
        }
        fields.push(Node::context(4, self.req_body.build()?));
        Ok(Node::sequence(fields))
    }

    /// Serializes to canonical DER.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(self.build()?))
    }
}

impl AsReq {
    /// Serializes to canonical DER, application wrapper included.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(Node::application(10, self.0.build()?)))
    }
}
