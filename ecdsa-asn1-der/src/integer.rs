//! Single DER INTEGER TLV over a fixed-width, big-endian unsigned integer.
//!
//! ```text
//! 0x02 | LEN (1..=127) | [0x00] | magnitude
//! ```
//!
//! The optional `0x00` is the stuffing byte: DER integers are two's complement, so a magnitude
//! whose most significant bit is set needs it to stay positive.

use crate::{DerError, Result};
use ecdsa_asn1::{ShortLength, Tag};

const TAG_OFFSET: usize = 0;
const LEN_OFFSET: usize = 1;
const VALUE_OFFSET: usize = 2;

/// Tag, length, and at least one content byte.
pub const MIN_INTEGER_TLV_LEN: usize = VALUE_OFFSET + 1;

/// Largest TLV this codec produces or accepts (short-form length only).
pub const MAX_INTEGER_TLV_LEN: usize = VALUE_OFFSET + ShortLength::MAX;

const SIGN_BIT: u8 = 0x80;

/// Outcome of [`decode_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedInteger {
    /// Bytes of input taken by the TLV, stuffing byte included.
    pub consumed: usize,
    /// Width of the integer without the zero padding added in front of it.
    pub len: usize,
}

/// Magnitude of `data` with leading zero bytes stripped, and whether it needs a stuffing byte.
///
/// The last byte is never stripped: zero still encodes as a single `0x00`.
fn minimal_magnitude(data: &[u8]) -> Result<(&[u8], bool)> {
    let Some(last) = data.len().checked_sub(1) else {
        debug_log!("integer: INVALID ARGUMENT (nothing to encode)");
        return Err(DerError::InvalidArgument {
            context: "integer to encode is empty",
        });
    };

    let start = data[..last].iter().position(|&byte| byte != 0).unwrap_or(last);
    let magnitude = &data[start..];
    let stuffed = magnitude[0] & SIGN_BIT != 0;

    Ok((magnitude, stuffed))
}

/// Size of the TLV [`encode_integer`] would write for `data`, without writing anything.
pub fn encoded_integer_len(data: &[u8]) -> Result<usize> {
    let (magnitude, stuffed) = minimal_magnitude(data)?;
    let length = ShortLength::try_from(magnitude.len() + usize::from(stuffed))?;
    Ok(VALUE_OFFSET + length.value())
}

/// An integer that passed every encoder check and only remains to be written.
pub(crate) struct PlannedInteger<'a> {
    magnitude: &'a [u8],
    stuffed: bool,
    length: ShortLength,
}

impl PlannedInteger<'_> {
    pub(crate) fn tlv_len(&self) -> usize {
        VALUE_OFFSET + self.length.value()
    }

    /// Writes the TLV at the start of `out`, which holds at least [`Self::tlv_len`] bytes.
    pub(crate) fn write(&self, out: &mut [u8]) -> usize {
        let tlv_len = self.tlv_len();
        let magnitude_start = VALUE_OFFSET + usize::from(self.stuffed);
        out[magnitude_start..tlv_len].copy_from_slice(self.magnitude);
        if self.stuffed {
            out[VALUE_OFFSET] = 0x00;
        }
        out[LEN_OFFSET] = self.length.octet();
        out[TAG_OFFSET] = Tag::INTEGER.number();

        debug_log!("encode_integer: {} bytes (stuffed: {})", tlv_len, self.stuffed);

        tlv_len
    }
}

/// Checks that `data` encodes into `capacity` bytes: capacity first, then the length limit.
pub(crate) fn plan_integer(data: &[u8], capacity: usize) -> Result<PlannedInteger<'_>> {
    let (magnitude, stuffed) = minimal_magnitude(data)?;

    let content_len = magnitude.len() + usize::from(stuffed);
    let tlv_len = VALUE_OFFSET + content_len;

    if tlv_len > capacity {
        debug_log!("encode_integer: BUFFER TOO SMALL ({} > {})", tlv_len, capacity);
        return Err(DerError::CapacityExceeded {
            required: tlv_len,
            capacity,
        });
    }

    let length = ShortLength::try_from(content_len).map_err(|e| {
        debug_log!("encode_integer: UNSUPPORTED ({})", e);
        DerError::from(e)
    })?;

    Ok(PlannedInteger {
        magnitude,
        stuffed,
        length,
    })
}

/// Encodes the big-endian unsigned integer `data` as a minimal DER INTEGER at the start of `out`.
///
/// Returns the number of bytes written. On error, `out` is left untouched.
pub fn encode_integer(data: &[u8], out: &mut [u8]) -> Result<usize> {
    let planned = plan_integer(data, out.len())?;
    Ok(planned.write(out))
}

/// Decodes the DER INTEGER at the start of `der` into `out`, right-aligned and zero-padded.
///
/// Bytes of `der` past the TLV are not looked at. On error, `out` is left untouched.
pub fn decode_integer(der: &[u8], out: &mut [u8]) -> Result<DecodedInteger> {
    if der.len() < MIN_INTEGER_TLV_LEN {
        debug_log!("decode_integer: TRUNCATED DATA (only {} bytes)", der.len());
        return Err(DerError::TruncatedData {
            needed: MIN_INTEGER_TLV_LEN,
            available: der.len(),
        });
    }

    let tag = Tag::from(der[TAG_OFFSET]);
    if tag != Tag::INTEGER {
        debug_log!("decode_integer: INVALID (found {})", tag);
        return Err(DerError::UnexpectedTag {
            expected: Tag::INTEGER,
            found: tag,
        });
    }

    let length = ShortLength::from_octet(der[LEN_OFFSET]).map_err(|e| {
        debug_log!("decode_integer: UNSUPPORTED ({})", e);
        DerError::from(e)
    })?;
    if length.is_zero() {
        debug_log!("decode_integer: INVALID (zero length)");
        return Err(DerError::EmptyContent);
    }

    let consumed = VALUE_OFFSET + length.value();
    let Some(content) = der.get(VALUE_OFFSET..consumed) else {
        debug_log!("decode_integer: TRUNCATED DATA ({} > {})", consumed, der.len());
        return Err(DerError::TruncatedData {
            needed: consumed,
            available: der.len(),
        });
    };

    // a lone zero byte is the value zero, not a stuffing byte
    let magnitude = match content {
        [0x00, 0x00, ..] => {
            debug_log!("decode_integer: INVALID (non-minimal encoding)");
            return Err(DerError::NonMinimal);
        }
        [0x00, rest @ ..] if !rest.is_empty() => rest,
        _ => content,
    };

    if magnitude.len() > out.len() {
        debug_log!("decode_integer: BUFFER TOO SMALL ({} > {})", magnitude.len(), out.len());
        return Err(DerError::CapacityExceeded {
            required: magnitude.len(),
            capacity: out.len(),
        });
    }

    let padding = out.len() - magnitude.len();
    out[..padding].fill(0);
    out[padding..].copy_from_slice(magnitude);

    debug_log!("decode_integer: {} bytes into {} (consumed {})", magnitude.len(), out.len(), consumed);

    Ok(DecodedInteger {
        consumed,
        len: magnitude.len(),
    })
}
