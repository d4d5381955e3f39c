use lazy_static::lazy_static;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{decode_full, Container, DecodeError, Grammar, GrammarState, Tag, Tlv};

use crate::data_types::PrincipalName;

/// Grammar positions for [`PrincipalName`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrincipalNameState {
    Start,
    Seq,
    NameType,
    NameTypeEnd,
    NameStrings,
    NameStringSeq,
    NameString,
    NameStringSeqEnd,
    Done,
    End,
}

impl GrammarState for PrincipalNameState {
    const START: Self = PrincipalNameState::Start;

    fn is_end(self) -> bool {
        self == PrincipalNameState::End
    }
}

fn store_name_type(name: &mut PrincipalName, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "name-type")?;
    name.name_type = actions::int32(tlv, Ruleset::Der)?;
    Ok(())
}

fn push_name_string(name: &mut PrincipalName, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    name.name_string.push(actions::general_string(tlv)?);
    Ok(())
}

lazy_static! {
    static ref GRAMMAR: Grammar<PrincipalNameState, PrincipalName> = {
        use PrincipalNameState::*;
        Grammar::builder("PrincipalName")
            .enter(Start, Tag::SEQUENCE, Seq, End)
            .enter(Seq, Tag::context(0), NameType, NameStrings)
            .primitive(NameType, Tag::INTEGER, NameTypeEnd, store_name_type)
            .enter(NameStrings, Tag::context(1), NameStringSeq, Done)
            .enter(NameStringSeq, Tag::SEQUENCE, NameString, NameStringSeqEnd)
            .primitive(NameString, Tag::GENERAL_STRING, NameString, push_name_string)
            .build()
    };
}

impl PrincipalName {
    /// Streaming decoder for one `PrincipalName` PDU.
    pub fn decoder() -> Container<'static, PrincipalNameState, PrincipalName> {
        Container::new(&GRAMMAR)
    }

    /// Decodes one complete DER-encoded `PrincipalName`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&GRAMMAR, bytes)
    }
}
