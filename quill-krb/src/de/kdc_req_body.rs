use lazy_static::lazy_static;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{decode_full, Container, DecodeError, Grammar, GrammarState, Tag, Tlv};

use crate::data_types::{KdcReqBody, PrincipalName};

/// Grammar positions for [`KdcReqBody`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KdcReqBodyState {
    Start,
    Fields,
    CnameVal,
    CnameEnd,
    AfterCname,
    RealmVal,
    RealmEnd,
    AfterRealm,
    SnameVal,
    SnameEnd,
    AfterSname,
    NonceVal,
    NonceEnd,
    AfterNonce,
    EtypeSeq,
    EtypeList,
    EtypeSeqEnd,
    Done,
    End,
}

impl GrammarState for KdcReqBodyState {
    const START: Self = KdcReqBodyState::Start;

    fn is_end(self) -> bool {
        self == KdcReqBodyState::End
    }
}

// cname and sname are whole nested structures; each one runs in its own
// PrincipalName container over the complete TLV.
fn store_cname(body: &mut KdcReqBody, bytes: &[u8]) -> Result<(), DecodeError> {
    body.cname = Some(PrincipalName::from_der(bytes)?);
    Ok(())
}

fn store_sname(body: &mut KdcReqBody, bytes: &[u8]) -> Result<(), DecodeError> {
    body.sname = Some(PrincipalName::from_der(bytes)?);
    Ok(())
}

fn store_realm(body: &mut KdcReqBody, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "realm")?;
    body.realm = actions::general_string(tlv)?;
    Ok(())
}

fn store_nonce(body: &mut KdcReqBody, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "nonce")?;
    body.nonce = actions::uint32(tlv, Ruleset::Der)?;
    Ok(())
}

fn push_etype(body: &mut KdcReqBody, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "etype")?;
    body.etype.push(actions::int32(tlv, Ruleset::Der)?);
    Ok(())
}

lazy_static! {
    static ref GRAMMAR: Grammar<KdcReqBodyState, KdcReqBody> = {
        use KdcReqBodyState::*;
        Grammar::builder("KDC-REQ-BODY")
            .enter(Start, Tag::SEQUENCE, Fields, End)
            .enter(Fields, Tag::context(1), CnameVal, AfterCname)
            .subdecode(CnameVal, Tag::SEQUENCE, CnameEnd, store_cname)
            .enter(Fields, Tag::context(2), RealmVal, AfterRealm)
            .enter(AfterCname, Tag::context(2), RealmVal, AfterRealm)
            .primitive(RealmVal, Tag::GENERAL_STRING, RealmEnd, store_realm)
            .enter(AfterRealm, Tag::context(3), SnameVal, AfterSname)
            .subdecode(SnameVal, Tag::SEQUENCE, SnameEnd, store_sname)
            .enter(AfterRealm, Tag::context(7), NonceVal, AfterNonce)
            .enter(AfterSname, Tag::context(7), NonceVal, AfterNonce)
            .primitive(NonceVal, Tag::INTEGER, NonceEnd, store_nonce)
            .enter(AfterNonce, Tag::context(8), EtypeSeq, Done)
            .enter(EtypeSeq, Tag::SEQUENCE, EtypeList, EtypeSeqEnd)
            .primitive(EtypeList, Tag::INTEGER, EtypeList, push_etype)
            .build()
    };
}

impl KdcReqBody {
    /// Streaming decoder for one `KDC-REQ-BODY` PDU.
    pub fn decoder() -> Container<'static, KdcReqBodyState, KdcReqBody> {
        Container::new(&GRAMMAR)
    }

    /// Decodes one complete DER-encoded `KDC-REQ-BODY`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&GRAMMAR, bytes)
    }
}
