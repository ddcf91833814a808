//! Object identifiers and the well-known-name registry.

use certpeek_types::DecodeError;

pub mod registry;

/// A parsed OID as a sequence of arc values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: Vec<u32>,
}

impl Oid {
    /// Create an OID from arc values.
    pub fn new(arcs: &[u32]) -> Self {
        Self {
            arcs: arcs.to_vec(),
        }
    }

    /// The arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Parse an OID from DER content bytes.
    ///
    /// The first byte packs the first two arcs as `arc0 * 40 + arc1`;
    /// the rest are base-128 with the high bit as continuation.
    pub fn from_der_value(data: &[u8]) -> Result<Self, DecodeError> {
        let &first = data.first().ok_or(DecodeError::InvalidOid)?;
        let mut arcs = vec![u32::from(first) / 40, u32::from(first) % 40];

        let mut arc: u32 = 0;
        let mut mid_arc = false;
        for &byte in &data[1..] {
            if arc > u32::MAX >> 7 {
                return Err(DecodeError::InvalidOid);
            }
            arc = (arc << 7) | (byte & 0x7F) as u32;
            mid_arc = byte & 0x80 != 0;
            if !mid_arc {
                arcs.push(arc);
                arc = 0;
            }
        }
        if mid_arc {
            // continuation bit set on the final byte
            return Err(DecodeError::InvalidOid);
        }
        Ok(Self { arcs })
    }

    /// Encode this OID to DER content bytes (no tag/length).
    pub fn to_der_value(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        if let [first, second, rest @ ..] = self.arcs.as_slice() {
            buf.push((first * 40 + second) as u8);
            for &arc in rest {
                let bits = 32 - arc.leading_zeros();
                let mut shift = bits.saturating_sub(1) / 7 * 7;
                while shift > 0 {
                    buf.push(0x80 | (arc >> shift) as u8 & 0x7F);
                    shift -= 7;
                }
                buf.push(arc as u8 & 0x7F);
            }
        }
        buf
    }

    /// The dotted-decimal representation (e.g., "1.2.840.113549.1.1.11").
    pub fn to_dot_string(&self) -> String {
        self.arcs
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The registry name for this OID, or the dotted string when unknown.
    pub fn display_name(&self) -> String {
        registry::name(self)
            .map(str::to_string)
            .unwrap_or_else(|| self.to_dot_string())
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_dot_string())
    }
}

/// Resolve raw DER OID content bytes to a display name, falling back to
/// the dotted string, and for undecodable bytes to colon hex.
pub fn display_name(oid_bytes: &[u8]) -> String {
    match Oid::from_der_value(oid_bytes) {
        Ok(oid) => oid.display_name(),
        Err(_) => oid_bytes
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_der_value() {
        // sha256WithRSAEncryption
        let der = [0x2A, 0x86, 0x48, 0x86, 0xF7, 0x0D, 0x01, 0x01, 0x0B];
        let oid = Oid::from_der_value(&der).unwrap();
        assert_eq!(oid.arcs(), &[1, 2, 840, 113549, 1, 1, 11]);
        assert_eq!(oid.to_dot_string(), "1.2.840.113549.1.1.11");
    }

    #[test]
    fn test_first_byte_packing() {
        // 2.5.4.3 (commonName): first byte 2*40+5 = 0x55
        let oid = Oid::from_der_value(&[0x55, 0x04, 0x03]).unwrap();
        assert_eq!(oid.arcs(), &[2, 5, 4, 3]);
    }

    #[test]
    fn test_roundtrip() {
        for arcs in [
            &[1u32, 2, 840, 113549, 1, 1, 1] as &[u32],
            &[2, 5, 29, 17],
            &[1, 3, 6, 1, 5, 5, 7, 1, 1],
        ] {
            let oid = Oid::new(arcs);
            assert_eq!(Oid::from_der_value(&oid.to_der_value()).unwrap(), oid);
        }
    }

    #[test]
    fn test_empty_and_dangling() {
        assert_eq!(Oid::from_der_value(&[]).unwrap_err(), DecodeError::InvalidOid);
        // continuation bit on last byte
        assert_eq!(
            Oid::from_der_value(&[0x55, 0x84]).unwrap_err(),
            DecodeError::InvalidOid
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let oid = Oid::new(&[1, 2, 3, 4, 5]);
        assert_eq!(oid.display_name(), "1.2.3.4.5");
        assert_eq!(display_name(&oid.to_der_value()), "1.2.3.4.5");
    }

    #[test]
    fn test_display_name_known() {
        assert_eq!(
            display_name(&Oid::new(&[2, 5, 4, 3]).to_der_value()),
            "CN"
        );
    }
}
