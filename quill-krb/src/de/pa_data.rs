use lazy_static::lazy_static;
use quill_ber::actions::{self, Ruleset};
use quill_ber::{decode_full, Container, DecodeError, Grammar, GrammarState, Tag, Tlv};

use crate::data_types::PaData;

/// Grammar positions for [`PaData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaDataState {
    Start,
    Fields,
    PaType,
    PaTypeEnd,
    AfterType,
    PaValue,
    PaValueEnd,
    Done,
    End,
}

impl GrammarState for PaDataState {
    const START: Self = PaDataState::Start;

    fn is_end(self) -> bool {
        self == PaDataState::End
    }
}

fn store_padata_type(padata: &mut PaData, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    actions::require_value(tlv, "padata-type")?;
    padata.padata_type = actions::int32(tlv, Ruleset::Der)?;
    Ok(())
}

fn store_padata_value(padata: &mut PaData, tlv: &Tlv<'_>) -> Result<(), DecodeError> {
    // an empty padata-value is legitimate, e.g. PA-TGS-REQ carriers
    padata.padata_value = actions::octet_string(tlv);
    Ok(())
}

lazy_static! {
    static ref GRAMMAR: Grammar<PaDataState, PaData> = {
        use PaDataState::*;
        Grammar::builder("PA-DATA")
            .enter(Start, Tag::SEQUENCE, Fields, End)
            .enter(Fields, Tag::context(1), PaType, AfterType)
            .primitive(PaType, Tag::INTEGER, PaTypeEnd, store_padata_type)
            .enter(AfterType, Tag::context(2), PaValue, Done)
            .primitive(PaValue, Tag::OCTET_STRING, PaValueEnd, store_padata_value)
            .build()
    };
}

impl PaData {
    /// Streaming decoder for one `PA-DATA` PDU.
    pub fn decoder() -> Container<'static, PaDataState, PaData> {
        Container::new(&GRAMMAR)
    }

    /// Decodes one complete DER-encoded `PA-DATA`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_full(&GRAMMAR, bytes)
    }
}
