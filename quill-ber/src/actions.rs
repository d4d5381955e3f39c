//! Reusable primitive value readers for grammar actions.
//!
//! Grammars compose these inside small named functions; each reader checks
//! the forms its ruleset allows and nothing else. Where BER and DER agree
//! there is no ruleset parameter.

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;
use crate::tlv::Tlv;

/// Which encoding rules govern value forms where BER and DER diverge.
///
/// DER is the canonical subset: single valid representation per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ruleset {
    Ber,
    Der,
}

/// Reads a two's-complement big-endian INTEGER of at most 64 bits.
///
/// Under [`Ruleset::Der`] a redundant leading octet (0x00 before a clear
/// sign bit, 0xFF before a set one) is rejected as non-minimal.
pub fn integer(tlv: &Tlv<'_>, ruleset: Ruleset) -> Result<i64, DecodeError> {
    let octets = tlv.value;
    if octets.is_empty() {
        return Err(DecodeError::Malformed("zero-length INTEGER"));
    }
    if octets.len() > 8 {
        return Err(DecodeError::Malformed("INTEGER wider than 64 bits"));
    }
    if ruleset == Ruleset::Der && octets.len() > 1 {
        let redundant = (octets[0] == 0x00 && octets[1] & 0x80 == 0)
            || (octets[0] == 0xFF && octets[1] & 0x80 != 0);
        if redundant {
            return Err(DecodeError::Malformed("non-minimal INTEGER encoding"));
        }
    }
    Ok(BigEndian::read_int(octets, octets.len()))
}

/// [`integer`] constrained to the Int32 range used by Kerberos and LDAP.
pub fn int32(tlv: &Tlv<'_>, ruleset: Ruleset) -> Result<i32, DecodeError> {
    i32::try_from(integer(tlv, ruleset)?)
        .map_err(|_| DecodeError::Malformed("INTEGER out of Int32 range"))
}

/// [`integer`] constrained to the UInt32 range.
pub fn uint32(tlv: &Tlv<'_>, ruleset: Ruleset) -> Result<u32, DecodeError> {
    u32::try_from(integer(tlv, ruleset)?)
        .map_err(|_| DecodeError::Malformed("INTEGER out of UInt32 range"))
}

/// Reads a BOOLEAN. DER mandates 0xFF for true; BER accepts any non-zero
/// octet.
pub fn boolean(tlv: &Tlv<'_>, ruleset: Ruleset) -> Result<bool, DecodeError> {
    match tlv.value {
        [0x00] => Ok(false),
        [0xFF] => Ok(true),
        [_] if ruleset == Ruleset::Ber => Ok(true),
        [_] => Err(DecodeError::Malformed("BOOLEAN octet must be 0x00 or 0xFF")),
        _ => Err(DecodeError::Malformed("BOOLEAN must be exactly one octet")),
    }
}

/// Copies the raw value octets. A zero-length string is a valid empty value.
pub fn octet_string(tlv: &Tlv<'_>) -> Vec<u8> {
    tlv.value.to_vec()
}

/// Reads a GeneralString restricted to the ASCII repertoire, the profile
/// KerberosString (RFC 4120 §5.2.1) imposes on the wire.
pub fn general_string(tlv: &Tlv<'_>) -> Result<String, DecodeError> {
    let s = std::str::from_utf8(tlv.value)
        .map_err(|_| DecodeError::Malformed("GeneralString is not valid character data"))?;
    if !s.is_ascii() {
        return Err(DecodeError::Malformed("GeneralString contains non-ASCII characters"));
    }
    Ok(s.to_owned())
}

/// Rejects a present-but-empty mandatory field.
pub fn require_value(tlv: &Tlv<'_>, field: &'static str) -> Result<(), DecodeError> {
    if tlv.value.is_empty() {
        Err(DecodeError::MissingMandatoryField(field))
    } else {
        Ok(())
    }
}
