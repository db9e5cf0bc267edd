//! C bindings for `ecdsa-asn1-der`.
//!
//! Every function returns a [`status`](error::status); on failure the reason is kept in a
//! thread-local slot readable with `ecdsa_asn1_error_message_utf8`.

#[macro_use]
mod helper;

pub mod error;
pub mod signature;
