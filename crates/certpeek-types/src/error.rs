/// Low-level decoding errors: Base64, PEM framing, ASN.1 primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("truncated input: a read ran past the end of the buffer")]
    TruncatedInput,
    #[error("invalid length encoding")]
    InvalidLength,
    #[error("unexpected tag 0x{found:02x}, expected {expected}")]
    UnexpectedTag { expected: &'static str, found: u8 },
    #[error("invalid base64 input")]
    InvalidBase64,
    #[error("unterminated pem block")]
    UnterminatedPem,
    #[error("invalid time value")]
    InvalidTime,
    #[error("invalid object identifier")]
    InvalidOid,
}

/// Certificate decode errors surfaced at the call boundary.
///
/// A decode either produces a complete certificate record or exactly one
/// of these; there is no partial-result mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CertError {
    #[error("input is empty")]
    EmptyInput,
    #[error("input does not contain a \"BEGIN CERTIFICATE\" header")]
    MissingPemHeader,
    #[error("malformed certificate: {0}")]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_propagates_into_cert_error() {
        fn inner() -> Result<(), DecodeError> {
            Err(DecodeError::TruncatedInput)
        }
        fn outer() -> Result<(), CertError> {
            inner()?;
            Ok(())
        }
        assert_eq!(
            outer().unwrap_err(),
            CertError::Decode(DecodeError::TruncatedInput)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CertError::EmptyInput.to_string(), "input is empty");
        let e = DecodeError::UnexpectedTag {
            expected: "SEQUENCE",
            found: 0x02,
        };
        assert_eq!(e.to_string(), "unexpected tag 0x02, expected SEQUENCE");
    }
}
