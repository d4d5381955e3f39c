use lazy_static::lazy_static;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{decode_full, Container, DecodeError, Grammar, GrammarState, Tag, Tlv};

use crate::data_types::{KdcReqBody, PaData};
use crate::messages::{AsReq, KdcReq};

/// Grammar positions for [`KdcReq`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KdcReqState {
    Start,
    Fields,
    PvnoVal,
    PvnoEnd,
    AfterPvno,
    MsgTypeVal,
    MsgTypeEnd,
    AfterMsgType,
    PadataSeq,
    PadataEntry,
    PadataSeqEnd,
    AfterPadata,
    BodyVal,
    BodyEnd,
    Done,
    End,
}

impl GrammarState for KdcReqState {
    const START: Self = KdcReqState::Start;

    fn is_end(self) -> bool {
        self == KdcReqState::End
    }
}

fn store_pvno(req: &mut KdcReq, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "pvno")?;
    req.pvno = actions::int32(tlv, Ruleset::Der)?;
    Ok(())
}

fn store_msg_type(req: &mut KdcReq, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "msg-type")?;
    req.msg_type = actions::int32(tlv, Ruleset::Der)?;
    Ok(())
}

fn push_padata(req: &mut KdcReq, bytes: &[u8]) -> Result<(), DecodeError> {
    req.padata.push(PaData::from_der(bytes)?);
    Ok(())
}

fn store_req_body(req: &mut KdcReq, bytes: &[u8]) -> Result<(), DecodeError> {
    req.req_body = KdcReqBody::from_der(bytes)?;
    Ok(())
}

lazy_static! {
    static ref GRAMMAR: Grammar<KdcReqState, KdcReq> = {
        use KdcReqState::*;
        Grammar::builder("KDC-REQ")
            .enter(Start, Tag::SEQUENCE, Fields, End)
            .enter(Fields, Tag::context(1), PvnoVal, AfterPvno)
            .primitive(PvnoVal, Tag::INTEGER, PvnoEnd, store_pvno)
            .enter(AfterPvno, Tag::context(2), MsgTypeVal, AfterMsgType)
            .primitive(MsgTypeVal, Tag::INTEGER, MsgTypeEnd, store_msg_type)
            .enter(AfterMsgType, Tag::context(3), PadataSeq, AfterPadata)
            .enter(PadataSeq, Tag::SEQUENCE, PadataEntry, PadataSeqEnd)
            .subdecode(PadataEntry, Tag::SEQUENCE, PadataEntry, push_padata)
            .enter(AfterMsgType, Tag::context(4), BodyVal, Done)
            .enter(AfterPadata, Tag::context(4), BodyVal, Done)
            .subdecode(BodyVal, Tag::SEQUENCE, BodyEnd, store_req_body)
            .build()
    };
}

impl KdcReq {
    /// Streaming decoder for one `KDC-REQ` PDU.
    pub fn decoder() -> Container<'static, KdcReqState, KdcReq> {
        Container::new(&GRAMMAR)
    }

    /// Decodes one complete DER-encoded `KDC-REQ`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&GRAMMAR, bytes)
    }
}

/// Grammar positions for [`AsReq`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AsReqState {
    Start,
    Req,
    ReqEnd,
    End,
}

impl GrammarState for AsReqState {
    const START: Self = AsReqState::Start;

    fn is_end(self) -> bool {
        self == AsReqState::End
    }
}

fn store_kdc_req(as_req: &mut AsReq, bytes: &[u8]) -> Result<(), DecodeError> {
    as_req.0 = KdcReq::from_der(bytes)?;
    Ok(())
}

lazy_static! {
    static ref AS_REQ_GRAMMAR: Grammar<AsReqState, AsReq> = {
        use AsReqState::*;
        Grammar::builder("AS-REQ")
            .enter(Start, Tag::application(10), Req, End)
            .subdecode(Req, Tag::SEQUENCE, ReqEnd, store_kdc_req)
            .build()
    };
}

impl AsReq {
    /// Streaming decoder for one `AS-REQ` PDU.
    pub fn decoder() -> Container<'static, AsReqState, AsReq> {
        Container::new(&AS_REQ_GRAMMAR)
    }

    /// Decodes one complete DER-encoded `AS-REQ`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&AS_REQ_GRAMMAR, bytes)
    }
}
