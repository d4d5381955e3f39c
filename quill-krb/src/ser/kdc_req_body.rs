use quill_ber::encode::{self, Node};
use quill_ber::EncodeError;

use crate::data_types::KdcReqBody;

impl KdcReqBody {
    pub(crate) fn build(&self) -> Result<Node, EncodeError> {
        let mut fields = Vec::with_capacity(5);
        if let Some(cname) = &self.cname {
            fields.push(Node::context(1, cname.build()?));
        }
        fields.push(Node::context(2, Node::general_string(&self.realm)?));
        if let Some(sname) = &self.sname {
            fields.push(Node::context(3, sname.build()?));
        }
        fields.push(Node::context(7, Node::integer(self.nonce.into())));
        let etypes = self.etype.iter().map(|&etype| Node::integer(etype.into())).collect();
        fields.push(Node::context(8, Node::sequence(etypes)));
        Ok(Node::sequence(fields))
    }

    /// Serializes to canonical DER.
    pub fn to_der(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(encode::to_vec(self.build()?))
    }
}
