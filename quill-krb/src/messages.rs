//! Top-level KDC exchange messages.

use crate::data_types::{KdcReqBody, PaData};

/// [5.4.1 KRB_KDC_REQ Definition](https://datatracker.ietf.org/doc/html/rfc4120#section-5.4.1)
///
/// ```not_rust
/// KDC-REQ         ::= SEQUENCE {
///         -- NOTE: first tag is [1], not [0]
///         pvno            [1] INTEGER (5),
///         msg-type        [2] INTEGER (10 -- AS -- | 12 -- TGS --),
///         padata          [3] SEQUENCE OF PA-DATA OPTIONAL,
///         req-body        [4] KDC-REQ-BODY
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdcReq {
    pub pvno: i32,
    pub msg_type: i32,
    pub padata: Vec<PaData>,
    pub req_body: KdcReqBody,
}

/// ```not_rust
/// AS-REQ          ::= [APPLICATION 10] KDC-REQ
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsReq(pub KdcReq);
