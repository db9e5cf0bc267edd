//! Conversion between raw ECDSA signatures and DER INTEGERs.
//!
//! Hardware tokens and low-level crypto APIs hand out ECDSA signatures as two fixed-width
//! big-endian integers, `r` and `s`. This crate turns such a pair into two consecutive DER
//! INTEGER TLVs and back:
//!
//! ```text
//! r = 00 .. 00 01  (32 bytes)    02 01 01
//! s = 00 .. 00 01  (32 bytes)    02 01 01
//! ```
//!
//! Only short-form lengths are supported, so each INTEGER carries at most 127 content bytes.
//! The two INTEGERs are *not* wrapped in an `ECDSA-Sig-Value` SEQUENCE.
//!
//! All codec functions work on caller-provided slices and never allocate; [`EcdsaSignature`]
//! is an owned convenience on top of them.
//!
//! ```
//! use ecdsa_asn1_der::{decode_signature_fixed, encode_signature, max_signature_len};
//!
//! let mut r = [0u8; 32];
//! r[31] = 1;
//! let s = [0xFF; 32];
//!
//! let mut der = [0u8; max_signature_len(32)];
//! let len = encode_signature(&r, &s, &mut der).unwrap();
//! assert_eq!(&der[..6], &[0x02, 0x01, 0x01, 0x02, 0x21, 0x00]);
//!
//! let mut rs = [0u8; 64];
//! decode_signature_fixed(&der[..len], &mut rs).unwrap();
//! assert_eq!(&rs[..32], &r);
//! assert_eq!(&rs[32..], &s);
//! ```

#[macro_use]
mod debug_log;

mod curve;
mod error;
mod integer;
mod owned;
mod signature;

pub use curve::EcCurve;
pub use error::{Component, DerError, ErrorKind};
pub use integer::{
    decode_integer, encode_integer, encoded_integer_len, DecodedInteger, MAX_INTEGER_TLV_LEN, MIN_INTEGER_TLV_LEN,
};
pub use owned::EcdsaSignature;
pub use signature::{
    decode_signature_fixed, decode_signature_separate, encode_signature, max_signature_len, DecodedSignature,
};

/// Re-export of the tag type found in [`DerError::UnexpectedTag`].
pub use ecdsa_asn1::Tag;

pub type Result<T> = std::result::Result<T, DerError>;
