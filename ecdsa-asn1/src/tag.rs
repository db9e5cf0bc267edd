use std::fmt;

/// An ASN.1 identifier octet.
///
/// Only single-octet (low tag number) identifiers are representable, which covers every
/// universal type the signature codec can run into.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag(u8);

impl Tag {
    pub const BOOLEAN: Self = Tag(0x01);
    pub const INTEGER: Self = Tag(0x02);
    pub const BIT_STRING: Self = Tag(0x03);
    pub const OCTET_STRING: Self = Tag(0x04);
    pub const NULL: Self = Tag(0x05);
    pub const OID: Self = Tag(0x06);
    pub const SEQUENCE: Self = Tag(0x30);
    pub const SET: Self = Tag(0x31);

    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Class bits `10`, regardless of the constructed bit.
    const fn is_context_specific(self) -> bool {
        self.0 & 0xC0 == 0x80
    }
}

impl From<u8> for Tag {
    fn from(tag: u8) -> Self {
        Self(tag)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Tag::BOOLEAN => write!(f, "BOOLEAN"),
            Tag::INTEGER => write!(f, "INTEGER"),
            Tag::BIT_STRING => write!(f, "BIT STRING"),
            Tag::OCTET_STRING => write!(f, "OCTET STRING"),
            Tag::NULL => write!(f, "NULL"),
            Tag::OID => write!(f, "OBJECT IDENTIFIER"),
            Tag::SEQUENCE => write!(f, "SEQUENCE"),
            Tag::SET => write!(f, "SET"),
            tag if tag.is_context_specific() => write!(f, "ContextTag{}", tag.0 & 0x1F),
            unknown => write!(f, "UNKNOWN({})", unknown.0),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({}[{}])", self, self.0)
    }
}
