use crate::signature::max_signature_len;
use std::fmt::Display;

/// Curve a raw signature was produced on. Decides the fixed width of `r` and `s`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EcCurve {
    /// NIST P-256 curve (secp256r1)
    NistP256,
    /// NIST P-384 curve (secp384r1)
    NistP384,
    /// NIST P-521 curve (secp521r1)
    NistP521,
    /// SEC2 secp256k1 curve
    Secp256k1,
}

impl EcCurve {
    /// Size of a field element in bytes, which is also the fixed width of `r` and `s`.
    pub const fn field_bytes_size(self) -> usize {
        match self {
            EcCurve::NistP256 | EcCurve::Secp256k1 => 32,
            EcCurve::NistP384 => 48,
            // 521 bits rounded up
            EcCurve::NistP521 => 66,
        }
    }

    /// Length of the fixed `r || s` representation.
    pub const fn raw_signature_len(self) -> usize {
        2 * self.field_bytes_size()
    }

    /// Upper bound of the DER stream for a signature on this curve.
    pub const fn max_signature_len(self) -> usize {
        max_signature_len(self.field_bytes_size())
    }
}

impl Display for EcCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NistP256 => write!(f, "NIST-P256"),
            Self::NistP384 => write!(f, "NIST-P384"),
            Self::NistP521 => write!(f, "NIST-P521"),
            Self::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}
