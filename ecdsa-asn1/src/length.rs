use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    /// Bit 7 of the length octet announces a multi-octet (long form) length.
    #[error("long-form length octet 0x{octet:02X} is not supported")]
    LongFormOctet { octet: u8 },
    #[error("content length {length} does not fit a short-form length octet (max {})", ShortLength::MAX)]
    TooLong { length: usize },
}

/// A DER length octet in short form: the content length itself, 0 through 127.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortLength(u8);

impl ShortLength {
    pub const MAX: usize = 0x7F;

    const LONG_FORM_BIT: u8 = 0x80;

    /// Parses a length octet read from the wire.
    pub fn from_octet(octet: u8) -> Result<Self, LengthError> {
        if octet & Self::LONG_FORM_BIT != 0 {
            return Err(LengthError::LongFormOctet { octet });
        }
        Ok(Self(octet))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn octet(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<usize> for ShortLength {
    type Error = LengthError;

    fn try_from(length: usize) -> Result<Self, Self::Error> {
        if length > Self::MAX {
            return Err(LengthError::TooLong { length });
        }
        // guarded above
        Ok(Self(length as u8))
    }
}

impl From<ShortLength> for usize {
    fn from(length: ShortLength) -> Self {
        length.value()
    }
}

impl fmt::Debug for ShortLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ShortLength({})", self.0)
    }
}

impl fmt::Display for ShortLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0x00)]
    #[case(0x01)]
    #[case(0x21)]
    #[case(0x7F)]
    fn short_form_octets_are_accepted(#[case] octet: u8) {
        let length = ShortLength::from_octet(octet).unwrap();
        assert_eq!(length.value(), octet as usize);
        assert_eq!(length.octet(), octet);
    }

    #[rstest]
    #[case(0x80)]
    #[case(0x81)]
    #[case(0xFF)]
    fn long_form_octets_are_rejected(#[case] octet: u8) {
        assert_eq!(
            ShortLength::from_octet(octet),
            Err(LengthError::LongFormOctet { octet })
        );
    }

    #[test]
    fn try_from_usize_caps_at_127() {
        assert_eq!(ShortLength::try_from(127).unwrap().value(), 127);
        assert_eq!(
            ShortLength::try_from(128),
            Err(LengthError::TooLong { length: 128 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            LengthError::LongFormOctet { octet: 0x81 }.to_string(),
            "long-form length octet 0x81 is not supported"
        );
        assert_eq!(
            LengthError::TooLong { length: 200 }.to_string(),
            "content length 200 does not fit a short-form length octet (max 127)"
        );
    }
}
