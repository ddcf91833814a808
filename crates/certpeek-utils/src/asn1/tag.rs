//! ASN.1 identifier-octet parsing.

use certpeek_types::DecodeError;

use super::{Tag, TagClass};

impl Tag {
    /// Parse a tag from the first bytes of `input`, returning the tag and
    /// the number of bytes consumed (more than one for high tag numbers).
    pub fn from_bytes(input: &[u8]) -> Result<(Self, usize), DecodeError> {
        let &first = input.first().ok_or(DecodeError::TruncatedInput)?;

        let class = match first >> 6 {
            0 => TagClass::Universal,
            1 => TagClass::Application,
            2 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        };
        let constructed = first & 0x20 != 0;

        if first & 0x1F != 0x1F {
            return Ok((
                Tag {
                    class,
                    constructed,
                    number: (first & 0x1F) as u32,
                },
                1,
            ));
        }

        // High-tag-number form: base-128 continuation bytes
        let mut number: u32 = 0;
        for (i, &byte) in input[1..].iter().enumerate() {
            if number > u32::MAX >> 7 {
                return Err(DecodeError::InvalidLength);
            }
            number = (number << 7) | (byte & 0x7F) as u32;
            if byte & 0x80 == 0 {
                return Ok((
                    Tag {
                        class,
                        constructed,
                        number,
                    },
                    i + 2,
                ));
            }
        }
        Err(DecodeError::TruncatedInput)
    }

    /// True for a context-specific tag with the given number.
    pub fn is_context(&self, number: u32) -> bool {
        self.class == TagClass::ContextSpecific && self.number == number
    }
}
