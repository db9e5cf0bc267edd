use ecdsa_asn1::Tag;
use std::fmt;

/// Signature component an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    R,
    S,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R => write!(f, "r"),
            Self::S => write!(f, "s"),
        }
    }
}

/// Broad classification of a [`DerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The call itself was malformed before any byte was parsed.
    InvalidArgument,
    /// The input is not a well-formed, minimal DER INTEGER.
    Malformed,
    /// A caller-supplied buffer is too small.
    CapacityExceeded,
    /// Well-formed, but needs a long-form length which this codec does not produce or accept.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DerError {
    #[error("invalid argument: {context}")]
    InvalidArgument { context: &'static str },

    #[error("truncated data: {needed} bytes needed, {available} available")]
    TruncatedData { needed: usize, available: usize },

    #[error("unexpected tag: expected {expected}, found {found}")]
    UnexpectedTag { expected: Tag, found: Tag },

    #[error("INTEGER with zero-length content")]
    EmptyContent,

    #[error("non-minimal INTEGER encoding (redundant leading zero byte)")]
    NonMinimal,

    #[error("{extra} unexpected bytes after the signature")]
    TrailingData { extra: usize },

    #[error("output buffer too small: {required} bytes required, capacity is {capacity}")]
    CapacityExceeded { required: usize, capacity: usize },

    #[error("content length {length} requires a long-form DER length")]
    LongFormLength { length: usize },

    #[error("long-form length octet 0x{octet:02X} is not supported")]
    LongFormOctet { octet: u8 },

    #[error("{component} component: {source}")]
    Component {
        component: Component,
        source: Box<DerError>,
    },
}

impl DerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::TruncatedData { .. }
            | Self::UnexpectedTag { .. }
            | Self::EmptyContent
            | Self::NonMinimal
            | Self::TrailingData { .. } => ErrorKind::Malformed,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::LongFormLength { .. } | Self::LongFormOctet { .. } => ErrorKind::Unsupported,
            Self::Component { source, .. } => source.kind(),
        }
    }

    /// Component the error was raised for, if it came out of a signature-level call.
    pub fn component(&self) -> Option<Component> {
        match self {
            Self::Component { component, .. } => Some(*component),
            _ => None,
        }
    }

    pub(crate) fn in_component(self, component: Component) -> Self {
        Self::Component {
            component,
            source: Box::new(self),
        }
    }
}

impl From<ecdsa_asn1::LengthError> for DerError {
    fn from(e: ecdsa_asn1::LengthError) -> Self {
        match e {
            ecdsa_asn1::LengthError::LongFormOctet { octet } => Self::LongFormOctet { octet },
            ecdsa_asn1::LengthError::TooLong { length } => Self::LongFormLength { length },
        }
    }
}
