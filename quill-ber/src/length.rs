//! BER/DER definite length octets.
//!
//! Short form: a single octet below 0x80 is the length. Long form: the low
//! seven bits of the leading octet count the big-endian length octets that
//! follow. The indefinite form (`0x80` alone) is not part of any wire format
//! this engine targets and is rejected outright.

use byteorder::{BigEndian, ByteOrder};

use crate::error::DecodeError;

/// Tries to read one definite length from the front of `buf`.
///
/// Returns `Ok(None)` when the buffer ends mid-length; the caller re-invokes
/// once more bytes arrived. On success yields `(length, octets_consumed)`.
pub fn read_length(buf: &[u8]) -> Result<Option<(usize, usize)>, DecodeError> {
    let Some(&first) = buf.first() else {
        return Ok(None);
    };

    if first & 0x80 == 0 {
        return Ok(Some((usize::from(first), 1)));
    }

    let count = usize::from(first & 0x7F);
    if count == 0 {
        return Err(DecodeError::Malformed("indefinite length is not supported"));
    }
    if count > std::mem::size_of::<u64>() {
        return Err(DecodeError::LengthOverflow);
    }
    if buf.len() < 1 + count {
        return Ok(None);
    }

    let octets = &buf[1..1 + count];
    if octets[0] == 0x00 {
        return Err(DecodeError::Malformed("non-minimal length encoding"));
    }
    let value = BigEndian::read_uint(octets, count);
    if count == 1 && value < 0x80 {
        return Err(DecodeError::Malformed("non-minimal length encoding"));
    }

    let length = usize::try_from(value).map_err(|_| DecodeError::LengthOverflow)?;
    Ok(Some((length, 1 + count)))
}

/// Number of octets `write_length` will emit for `length`.
pub fn encoded_len(length: usize) -> usize {
    if length < 0x80 {
        1
    } else {
        1 + be_octets(length as u64)
    }
}

/// Appends the short or long form length octets for `length` to `out`.
pub fn write_length(out: &mut Vec<u8>, length: usize) {
    if length < 0x80 {
        out.push(length as u8);
    } else {
        let count = be_octets(length as u64);
        out.push(0x80 | count as u8);
        let mut octets = [0u8; 8];
        BigEndian::write_u64(&mut octets, length as u64);
        out.extend_from_slice(&octets[8 - count..]);
    }
}

fn be_octets(value: u64) -> usize {
    ((64 - value.leading_zeros() as usize) + 7) / 8
}
