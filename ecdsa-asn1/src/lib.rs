//! Simple ASN.1 building blocks shared by the ECDSA signature codec crates.

pub mod length;
pub mod tag;

pub use length::{LengthError, ShortLength};
pub use tag::Tag;
