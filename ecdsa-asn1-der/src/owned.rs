use crate::curve::EcCurve;
use crate::signature::{decode_signature_fixed, encode_signature, max_signature_len};
use crate::{DerError, Result};

/// Owned `(r, s)` pair of equal width.
///
/// Allocating convenience over the slice-based codec functions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EcdsaSignature {
    r: Vec<u8>,
    s: Vec<u8>,
}

impl EcdsaSignature {
    pub fn new(r: Vec<u8>, s: Vec<u8>) -> Result<Self> {
        if r.is_empty() || r.len() != s.len() {
            return Err(DerError::InvalidArgument {
                context: "r and s must be non-empty and of the same width",
            });
        }
        Ok(Self { r, s })
    }

    /// Splits the fixed `r || s` representation in two halves.
    pub fn from_fixed_bytes(rs: &[u8]) -> Result<Self> {
        if rs.is_empty() || rs.len() % 2 != 0 {
            return Err(DerError::InvalidArgument {
                context: "r || s must have a non-zero even length",
            });
        }
        let (r, s) = rs.split_at(rs.len() / 2);
        Ok(Self {
            r: r.to_vec(),
            s: s.to_vec(),
        })
    }

    /// Decodes a DER `r`, `s` stream, padding both components to the field size of `curve`.
    ///
    /// Unlike [`decode_signature_fixed`], the whole input has to be taken by the two INTEGERs.
    pub fn from_der(curve: EcCurve, der: &[u8]) -> Result<Self> {
        let mut r = vec![0; curve.raw_signature_len()];
        let decoded = decode_signature_fixed(der, &mut r)?;

        if decoded.consumed != der.len() {
            debug_log!("from_der: TRAILING DATA ({} bytes)", der.len() - decoded.consumed);
            return Err(DerError::TrailingData {
                extra: der.len() - decoded.consumed,
            });
        }

        let s = r.split_off(curve.field_bytes_size());
        Ok(Self { r, s })
    }

    pub fn to_der(&self) -> Result<Vec<u8>> {
        let mut der = vec![0; max_signature_len(self.width())];
        let len = encode_signature(&self.r, &self.s, &mut der)?;
        der.truncate(len);
        Ok(der)
    }

    pub fn to_fixed_bytes(&self) -> Vec<u8> {
        let mut rs = Vec::with_capacity(2 * self.width());
        rs.extend_from_slice(&self.r);
        rs.extend_from_slice(&self.s);
        rs
    }

    pub fn r(&self) -> &[u8] {
        &self.r
    }

    pub fn s(&self) -> &[u8] {
        &self.s
    }

    /// Width of each component in bytes.
    pub fn width(&self) -> usize {
        self.r.len()
    }
}
