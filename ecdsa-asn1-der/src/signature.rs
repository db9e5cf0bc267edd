//! Raw `(r, s)` signature components to and from two back-to-back DER INTEGERs.
//!
//! The stream is deliberately *not* wrapped in a SEQUENCE:
//!
//! ```text
//! 0x02 LEN_R R 0x02 LEN_S S
//! ```

use crate::error::Component;
use crate::integer::{decode_integer, plan_integer};
use crate::{DerError, Result};

/// Tag octet, length octet and stuffing byte on top of each component.
const PER_COMPONENT_OVERHEAD: usize = 3;

/// Upper bound of the stream [`encode_signature`] writes for components `width` bytes wide.
pub const fn max_signature_len(width: usize) -> usize {
    2 * (PER_COMPONENT_OVERHEAD + width)
}

/// Outcome of the signature decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedSignature {
    /// Width of `r` without zero padding.
    pub r_len: usize,
    /// Width of `s` without zero padding.
    pub s_len: usize,
    /// Bytes of input taken by both TLVs.
    pub consumed: usize,
}

/// Writes `r` then `s`, both big-endian and of equal width, as DER INTEGERs into `out`.
///
/// Returns the combined length. Both components are checked before the first write, so `out`
/// is left untouched on error.
pub fn encode_signature(r: &[u8], s: &[u8], out: &mut [u8]) -> Result<usize> {
    if r.len() != s.len() {
        debug_log!("encode_signature: INVALID ARGUMENT (r is {} bytes, s is {})", r.len(), s.len());
        return Err(DerError::InvalidArgument {
            context: "r and s must have the same width",
        });
    }

    let r_tlv = plan_integer(r, out.len()).map_err(|e| e.in_component(Component::R))?;
    let s_tlv = plan_integer(s, out.len() - r_tlv.tlv_len()).map_err(|e| e.in_component(Component::S))?;

    let r_len = r_tlv.write(out);
    let s_len = s_tlv.write(&mut out[r_len..]);

    Ok(r_len + s_len)
}

/// Reads `r` then `s` into destinations of independent capacity.
///
/// Each component is right-aligned and zero-padded to its destination; the unpadded widths
/// are reported back. Anything after the second TLV is ignored, compare
/// [`DecodedSignature::consumed`] with the input length to reject trailing data.
pub fn decode_signature_separate(der: &[u8], r_out: &mut [u8], s_out: &mut [u8]) -> Result<DecodedSignature> {
    let r = decode_integer(der, r_out).map_err(|e| e.in_component(Component::R))?;
    let s = decode_integer(&der[r.consumed..], s_out).map_err(|e| e.in_component(Component::S))?;

    Ok(DecodedSignature {
        r_len: r.len,
        s_len: s.len,
        consumed: r.consumed + s.consumed,
    })
}

/// Reads `r` then `s` into the two halves of `rs_out`, producing the fixed `r || s` layout.
///
/// `rs_out` must have an even length; this is checked before the input is read.
pub fn decode_signature_fixed(der: &[u8], rs_out: &mut [u8]) -> Result<DecodedSignature> {
    if rs_out.len() % 2 != 0 {
        debug_log!("decode_signature_fixed: INVALID ARGUMENT (odd length {})", rs_out.len());
        return Err(DerError::InvalidArgument {
            context: "r || s destination must have an even length",
        });
    }

    let component_len = rs_out.len() / 2;
    let (r_out, s_out) = rs_out.split_at_mut(component_len);
    decode_signature_separate(der, r_out, s_out)
}
