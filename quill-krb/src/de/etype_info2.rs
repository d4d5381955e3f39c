use lazy_static::lazy_static;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{decode_full, Container, DecodeError, Grammar, GrammarState, Tag, Tlv};

use crate::data_types::{EtypeInfo2, EtypeInfo2Entry};

/// Grammar positions for [`EtypeInfo2`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EtypeInfo2State {
    Start,
    Entries,
    EntryEtype,
    EtypeVal,
    EtypeEnd,
    AfterEtype,
    SaltVal,
    SaltEnd,
    AfterSalt,
    S2kVal,
    S2kEnd,
    AfterS2k,
    End,
}

impl GrammarState for EtypeInfo2State {
    const START: Self = EtypeInfo2State::Start;

    fn is_end(self) -> bool {
        self == EtypeInfo2State::End
    }
}

fn push_entry(info: &mut EtypeInfo2) -> Result<(), DecodeError> {
    info.0.push(EtypeInfo2Entry::default());
    Ok(())
}

fn current_entry(info: &mut EtypeInfo2) -> Result<&mut EtypeInfo2Entry, DecodeError> {
    info.0
        .last_mut()
        .ok_or(DecodeError::Malformed("ETYPE-INFO2 field outside an entry"))
}

fn store_etype(info: &mut EtypeInfo2, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "etype")?;
    current_entry(info)?.etype = actions::int32(tlv, Ruleset::Der)?;
    Ok(())
}

fn store_salt(info: &mut EtypeInfo2, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    current_entry(info)?.salt = Some(actions::general_string(tlv)?);
    Ok(())
}

fn store_s2kparams(info: &mut EtypeInfo2, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    current_entry(info)?.s2kparams = Some(actions::octet_string(tlv));
    Ok(())
}

lazy_static! {
    static ref GRAMMAR: Grammar<EtypeInfo2State, EtypeInfo2> = {
        use EtypeInfo2State::*;
        Grammar::builder("ETYPE-INFO2")
            .enter(Start, Tag::SEQUENCE, Entries, End)
            .enter_with(Entries, Tag::SEQUENCE, EntryEtype, Entries, push_entry)
            .enter(EntryEtype, Tag::context(0), EtypeVal, AfterEtype)
            .primitive(EtypeVal, Tag::INTEGER, EtypeEnd, store_etype)
            .enter(AfterEtype, Tag::context(1), SaltVal, AfterSalt)
            .primitive(SaltVal, Tag::GENERAL_STRING, SaltEnd, store_salt)
            .enter(AfterEtype, Tag::context(2), S2kVal, AfterS2k)
            .enter(AfterSalt, Tag::context(2), S2kVal, AfterS2k)
            .primitive(S2kVal, Tag::OCTET_STRING, S2kEnd, store_s2kparams)
            .build()
    };
}

impl EtypeInfo2 {
    /// Streaming decoder for one `ETYPE-INFO2` PDU.
    pub fn decoder() -> Container<'static, EtypeInfo2State, EtypeInfo2> {
        Container::new(&GRAMMAR)
    }

    /// Decodes one complete DER-encoded `ETYPE-INFO2`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&GRAMMAR, bytes)
    }
}
