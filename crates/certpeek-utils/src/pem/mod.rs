//! PEM framing: `-----BEGIN label-----` / `-----END label-----` blocks.

use certpeek_types::DecodeError;

/// A parsed PEM block.
#[derive(Debug, Clone)]
pub struct PemBlock {
    /// The label (e.g., "CERTIFICATE").
    pub label: String,
    /// The base64-decoded binary data.
    pub data: Vec<u8>,
}

const BEGIN_PREFIX: &str = "-----BEGIN ";
const END_PREFIX: &str = "-----END ";
const DASHES_SUFFIX: &str = "-----";

/// Parse a PEM-encoded string into its blocks, in input order.
///
/// Text outside BEGIN/END markers is ignored; arbitrary line wrapping of
/// the base64 body is accepted.
pub fn parse(input: &str) -> Result<Vec<PemBlock>, DecodeError> {
    let mut blocks = Vec::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let line = line.trim();
        let Some(label) = line
            .strip_prefix(BEGIN_PREFIX)
            .and_then(|s| s.strip_suffix(DASHES_SUFFIX))
        else {
            continue;
        };
        let end_marker = format!("{END_PREFIX}{label}{DASHES_SUFFIX}");

        let mut body = String::new();
        let mut closed = false;
        for inner in lines.by_ref() {
            let inner = inner.trim();
            if inner == end_marker {
                closed = true;
                break;
            }
            body.push_str(inner);
        }
        if !closed {
            return Err(DecodeError::UnterminatedPem);
        }

        blocks.push(PemBlock {
            label: label.to_string(),
            data: crate::base64::decode(&body)?,
        });
    }

    Ok(blocks)
}

/// Encode binary data as a PEM block with the given label, wrapping the
/// base64 body at 64 characters per line.
pub fn encode(label: &str, data: &[u8]) -> String {
    let body = crate::base64::encode(data);
    let mut out = format!("{BEGIN_PREFIX}{label}{DASHES_SUFFIX}\n");
    for chunk in body.as_bytes().chunks(64) {
        // chunks of an ASCII string are valid UTF-8
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
        out.push('\n');
    }
    out.push_str(&format!("{END_PREFIX}{label}{DASHES_SUFFIX}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"certificate bytes go here";
        let pem = encode("CERTIFICATE", data);
        let blocks = parse(&pem).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].label, "CERTIFICATE");
        assert_eq!(blocks[0].data, data);
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let pem = "\
Subject: test
-----BEGIN CERTIFICATE-----
AQID
-----END CERTIFICATE-----
trailing garbage
";
        let blocks = parse(pem).unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].data, &[1, 2, 3]);
    }

    #[test]
    fn test_multiple_blocks_in_order() {
        let pem = "\
-----BEGIN CERTIFICATE-----
AQID
-----END CERTIFICATE-----
-----BEGIN X509 CRL-----
BAUG
-----END X509 CRL-----
";
        let blocks = parse(pem).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].label, "CERTIFICATE");
        assert_eq!(blocks[1].label, "X509 CRL");
        assert_eq!(blocks[1].data, &[4, 5, 6]);
    }

    #[test]
    fn test_missing_end_marker() {
        let pem = "-----BEGIN CERTIFICATE-----\nAQID\n";
        assert_eq!(parse(pem).unwrap_err(), DecodeError::UnterminatedPem);
    }

    #[test]
    fn test_arbitrary_wrapping() {
        let long = encode("TEST", &[0xAB; 100]);
        let rewrapped: String = long
            .lines()
            .map(|l| format!("  {l}  \n"))
            .collect();
        let blocks = parse(&rewrapped).unwrap();
        assert_eq!(blocks[0].data, vec![0xAB; 100]);
    }
}
