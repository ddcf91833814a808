//! The DER cursor: a stateful, forward-only reader over a byte buffer.

use certpeek_types::DecodeError;

use super::{tags, Tag, TagClass, Tlv};

/// A streaming DER decoder.
///
/// Structured reads (`read_sequence`, `read_set`) return a sub-decoder
/// scoped to the element's content, so a nested walk can never read past
/// the enclosing element's end.
#[derive(Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over the given buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The not-yet-consumed bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Read the next TLV element, consuming tag, length, and content.
    pub fn read_tlv(&mut self) -> Result<Tlv<'a>, DecodeError> {
        let (tag, tag_len) = Tag::from_bytes(self.remaining())?;
        self.pos += tag_len;

        let length = self.read_length()?;
        let end = self
            .pos
            .checked_add(length)
            .filter(|&end| end <= self.data.len())
            .ok_or(DecodeError::TruncatedInput)?;

        let value = &self.data[self.pos..end];
        self.pos = end;
        Ok(Tlv { tag, value })
    }

    /// Read a DER length: short form (one byte, 0..=127) or long form
    /// (high bit set, low 7 bits = count of big-endian length bytes).
    /// The indefinite form (0x80) is not valid in DER.
    fn read_length(&mut self) -> Result<usize, DecodeError> {
        let first = self.read_byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        let num_bytes = (first & 0x7F) as usize;
        if num_bytes == 0 || num_bytes > std::mem::size_of::<usize>() {
            return Err(DecodeError::InvalidLength);
        }
        let mut length: usize = 0;
        for _ in 0..num_bytes {
            length = (length << 8) | self.read_byte()? as usize;
        }
        Ok(length)
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let &b = self.data.get(self.pos).ok_or(DecodeError::TruncatedInput)?;
        self.pos += 1;
        Ok(b)
    }

    /// Peek at the next tag without consuming anything.
    pub fn peek_tag(&self) -> Result<Tag, DecodeError> {
        if self.is_empty() {
            return Err(DecodeError::TruncatedInput);
        }
        Tag::from_bytes(self.remaining()).map(|(tag, _)| tag)
    }

    /// Read a SEQUENCE, returning a sub-decoder over its content.
    pub fn read_sequence(&mut self) -> Result<Decoder<'a>, DecodeError> {
        let tlv = self.read_expected(tags::SEQUENCE, "SEQUENCE")?;
        Ok(Decoder::new(tlv.value))
    }

    /// Read a SET, returning a sub-decoder over its content.
    pub fn read_set(&mut self) -> Result<Decoder<'a>, DecodeError> {
        let tlv = self.read_expected(tags::SET, "SET")?;
        Ok(Decoder::new(tlv.value))
    }

    /// Read an INTEGER, returning its raw big-endian content bytes.
    ///
    /// Serial numbers and key moduli exceed any machine integer width,
    /// so the value is never narrowed.
    pub fn read_integer(&mut self) -> Result<&'a [u8], DecodeError> {
        Ok(self.read_expected(tags::INTEGER, "INTEGER")?.value)
    }

    /// Read an OCTET STRING, returning its content bytes.
    pub fn read_octet_string(&mut self) -> Result<&'a [u8], DecodeError> {
        Ok(self.read_expected(tags::OCTET_STRING, "OCTET STRING")?.value)
    }

    /// Read an OBJECT IDENTIFIER, returning its raw content bytes.
    pub fn read_oid(&mut self) -> Result<&'a [u8], DecodeError> {
        Ok(self.read_expected(tags::OID, "OBJECT IDENTIFIER")?.value)
    }

    /// Read a BOOLEAN (DER: 0x00 = false, anything else = true).
    pub fn read_boolean(&mut self) -> Result<bool, DecodeError> {
        let tlv = self.read_expected(tags::BOOLEAN, "BOOLEAN")?;
        match tlv.value {
            [b] => Ok(*b != 0x00),
            _ => Err(DecodeError::InvalidLength),
        }
    }

    /// Read a BIT STRING, returning `(unused_bits, content)`.
    /// DER bounds the unused-bits octet to 0..=7.
    pub fn read_bit_string(&mut self) -> Result<(u8, &'a [u8]), DecodeError> {
        let tlv = self.read_expected(tags::BIT_STRING, "BIT STRING")?;
        match tlv.value {
            [unused @ 0..=7, rest @ ..] => Ok((*unused, rest)),
            [_, ..] => Err(DecodeError::InvalidLength),
            [] => Err(DecodeError::TruncatedInput),
        }
    }

    /// Read a character string of any of the X.509 string types.
    ///
    /// UTF8String, PrintableString, and IA5String are decoded as UTF-8,
    /// falling back to a byte-for-byte Latin-1 mapping when the content
    /// is not valid UTF-8 (the content itself never fails a read).
    /// T61String is decoded as Latin-1, BMPString as UTF-16BE.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        let tlv = self.read_tlv()?;
        if tlv.tag.class != TagClass::Universal {
            return Err(DecodeError::UnexpectedTag {
                expected: "string",
                found: tlv.tag.number as u8,
            });
        }
        Ok(match tlv.tag.number {
            tags::T61_STRING => latin1(tlv.value),
            tags::BMP_STRING => {
                let units: Vec<u16> = tlv
                    .value
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect();
                String::from_utf16(&units).unwrap_or_else(|_| latin1(tlv.value))
            }
            _ => match std::str::from_utf8(tlv.value) {
                Ok(s) => s.to_string(),
                Err(_) => latin1(tlv.value),
            },
        })
    }

    /// Read a Time value (UTCTime or GeneralizedTime) as a UNIX timestamp.
    pub fn read_time(&mut self) -> Result<i64, DecodeError> {
        let tlv = self.read_tlv()?;
        let s = std::str::from_utf8(tlv.value).map_err(|_| DecodeError::InvalidTime)?;
        match (tlv.tag.class, tlv.tag.number) {
            (TagClass::Universal, tags::UTC_TIME) => parse_utc_time(s),
            (TagClass::Universal, tags::GENERALIZED_TIME) => parse_generalized_time(s),
            _ => Err(DecodeError::UnexpectedTag {
                expected: "UTCTime or GeneralizedTime",
                found: tlv.tag.number as u8,
            }),
        }
    }

    /// Read a context-specific element with the expected tag number.
    pub fn read_context_specific(&mut self, number: u32) -> Result<Tlv<'a>, DecodeError> {
        let tlv = self.read_tlv()?;
        if tlv.tag.class != TagClass::ContextSpecific || tlv.tag.number != number {
            return Err(DecodeError::UnexpectedTag {
                expected: "context-specific tag",
                found: tlv.tag.number as u8,
            });
        }
        Ok(tlv)
    }

    /// Read a context-specific element if the next tag matches `number`;
    /// otherwise consume nothing and return `None`.
    pub fn try_read_context_specific(
        &mut self,
        number: u32,
    ) -> Result<Option<Tlv<'a>>, DecodeError> {
        if self.is_empty() {
            return Ok(None);
        }
        if self.peek_tag()?.is_context(number) {
            Ok(Some(self.read_tlv()?))
        } else {
            Ok(None)
        }
    }

    fn read_expected(&mut self, number: u32, expected: &'static str) -> Result<Tlv<'a>, DecodeError> {
        let found = self.remaining().first().copied().unwrap_or(0);
        let tlv = self.read_tlv()?;
        if tlv.tag.class != TagClass::Universal || tlv.tag.number != number {
            return Err(DecodeError::UnexpectedTag { expected, found });
        }
        Ok(tlv)
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse UTCTime "YYMMDDHHMMSS[Z]".
/// RFC 5280 pivot: 00-49 → 2000-2049, 50-99 → 1950-1999.
fn parse_utc_time(s: &str) -> Result<i64, DecodeError> {
    let s = s.strip_suffix('Z').unwrap_or(s);
    if s.len() < 12 || !s.is_ascii() {
        return Err(DecodeError::InvalidTime);
    }
    let yy = field(s, 0)?;
    let year = if yy < 50 { 2000 + yy } else { 1900 + yy };
    to_unix(year, field(s, 2)?, field(s, 4)?, field(s, 6)?, field(s, 8)?, field(s, 10)?)
}

/// Parse GeneralizedTime "YYYYMMDDHHMMSS[Z]".
fn parse_generalized_time(s: &str) -> Result<i64, DecodeError> {
    let s = s.strip_suffix('Z').unwrap_or(s);
    if s.len() < 14 || !s.is_ascii() {
        return Err(DecodeError::InvalidTime);
    }
    let year = field(s, 0)? * 100 + field(s, 2)?;
    to_unix(year, field(s, 4)?, field(s, 6)?, field(s, 8)?, field(s, 10)?, field(s, 12)?)
}

fn field(s: &str, at: usize) -> Result<u32, DecodeError> {
    s[at..at + 2].parse().map_err(|_| DecodeError::InvalidTime)
}

/// Convert a UTC civil date-time to seconds since the UNIX epoch.
pub fn to_unix(year: u32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Result<i64, DecodeError> {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || hour > 23 || min > 59 || sec > 59 {
        return Err(DecodeError::InvalidTime);
    }
    // Howard Hinnant's days-from-civil, shifted so March is month 0
    let y = i64::from(if month <= 2 { year - 1 } else { year });
    let m = i64::from(if month <= 2 { month + 9 } else { month - 3 });
    let days =
        365 * y + y / 4 - y / 100 + y / 400 + (m * 306 + 5) / 10 + i64::from(day) - 1 - 719468;
    Ok(days * 86400 + i64::from(hour) * 3600 + i64::from(min) * 60 + i64::from(sec))
}
