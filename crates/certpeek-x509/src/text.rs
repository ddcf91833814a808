//! Plain-text rendering of a decoded certificate.

use certpeek_utils::oid::Oid;

use crate::certificate::{hex_colon_upper, Certificate, Extension};

/// Hex rendering of extension values is truncated for display beyond this
/// many characters; the full value stays in the record.
const EXT_DISPLAY_LIMIT: usize = 200;
const EXT_DISPLAY_KEPT: usize = 100;

/// Characters of signature hex per output line.
const SIG_WRAP: usize = 60;

/// Format a UNIX timestamp as "Mon DD HH:MM:SS YYYY UTC".
pub fn format_time(unix_ts: i64) -> String {
    let days = unix_ts.div_euclid(86400);
    let rem = unix_ts.rem_euclid(86400);
    let hour = rem / 3600;
    let min = rem % 3600 / 60;
    let sec = rem % 60;

    let (year, month, day) = days_to_ymd(days);
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let mon = months.get((month - 1) as usize).unwrap_or(&"???");
    format!("{mon} {day:2} {hour:02}:{min:02}:{sec:02} {year} UTC")
}

fn days_to_ymd(days: i64) -> (i64, i64, i64) {
    let days = days + 719468;
    let era = if days >= 0 { days } else { days - 146096 } / 146097;
    let doe = days - era * 146097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    (if m <= 2 { y + 1 } else { y }, m, d)
}

fn oid_suffix(oid_bytes: &[u8]) -> String {
    Oid::from_der_value(oid_bytes)
        .map(|o| format!(" (OID: {o})"))
        .unwrap_or_default()
}

fn format_extension(index: usize, ext: &Extension) -> String {
    let critical = if ext.critical { " CRITICAL" } else { "" };
    let mut out = format!("        [{}] {}{critical}\n", index + 1, ext.name());
    out.push_str(&format!("            OID: {}\n", ext.oid_string()));

    let hex = hex_colon_upper(&ext.value);
    if hex.len() > EXT_DISPLAY_LIMIT {
        out.push_str(&format!(
            "            Value: {}...\n",
            &hex[..EXT_DISPLAY_KEPT]
        ));
    } else {
        out.push_str(&format!("            Value: {hex}\n"));
    }
    out
}

impl Certificate {
    /// Render the certificate as indented plain text, classifying the
    /// validity window against `now` (UNIX timestamp).
    pub fn to_text_at(&self, now: i64) -> String {
        let mut out = String::new();
        out.push_str("Certificate:\n");
        out.push_str(&format!("    Version: v{}\n", self.version));
        out.push_str(&format!("    Serial Number: {}\n", self.serial_hex()));
        out.push_str(&format!(
            "    Signature Algorithm: {}{}\n",
            self.signature_algorithm_name(),
            oid_suffix(&self.tbs_signature_algorithm)
        ));
        out.push_str(&format!("    Issuer: {}\n", self.issuer));
        out.push_str("    Validity:\n");
        out.push_str(&format!(
            "        Not Before: {}\n",
            format_time(self.not_before)
        ));
        out.push_str(&format!(
            "        Not After : {}\n",
            format_time(self.not_after)
        ));
        out.push_str(&format!("        Status: {}\n", self.validity_status(now)));
        out.push_str(&format!("    Subject: {}\n", self.subject));
        out.push_str("    Subject Public Key Info:\n");
        out.push_str(&format!(
            "        Algorithm: {}{}\n",
            self.public_key.algorithm_name(),
            oid_suffix(&self.public_key.algorithm_oid)
        ));
        out.push_str(&format!(
            "        Key Size: {} bits\n",
            self.public_key.key_bits()
        ));

        if !self.extensions.is_empty() {
            out.push_str("    X509v3 Extensions:\n");
            for (i, ext) in self.extensions.iter().enumerate() {
                out.push_str(&format_extension(i, ext));
            }
        }

        out.push_str(&format!(
            "    Certificate Signature Algorithm: {}\n",
            self.cert_signature_algorithm_name()
        ));
        out.push_str("    Signature:\n");
        let sig_hex = self.signature_hex();
        let mut rest = sig_hex.as_str();
        while !rest.is_empty() {
            let line = &rest[..rest.len().min(SIG_WRAP)];
            out.push_str(&format!("        {line}\n"));
            rest = &rest[line.len()..];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::SubjectPublicKeyInfo;
    use crate::DistinguishedName;

    fn sample(extensions: Vec<Extension>, signature_value: Vec<u8>) -> Certificate {
        let dn = DistinguishedName {
            entries: vec![
                ("C".to_string(), "US".to_string()),
                ("CN".to_string(), "Example".to_string()),
            ],
        };
        Certificate {
            version: 3,
            serial_number: vec![0x01, 0xAB],
            tbs_signature_algorithm: Oid::new(&[1, 2, 840, 113549, 1, 1, 11]).to_der_value(),
            issuer: dn.clone(),
            not_before: 0,
            not_after: 86400 * 30,
            subject: dn,
            public_key: SubjectPublicKeyInfo {
                algorithm_oid: Oid::new(&[1, 2, 840, 113549, 1, 1, 1]).to_der_value(),
                algorithm_params: None,
                unused_bits: 0,
                public_key: vec![0; 270],
            },
            extensions,
            signature_algorithm: Oid::new(&[1, 2, 840, 113549, 1, 1, 11]).to_der_value(),
            signature_value,
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "Jan  1 00:00:00 1970 UTC");
        assert_eq!(format_time(946684800), "Jan  1 00:00:00 2000 UTC");
        // 2006-11-10, DigiCert root notBefore
        assert_eq!(format_time(1163116800), "Nov 10 00:00:00 2006 UTC");
        // pre-epoch (UTCTime years 1950-1969)
        assert_eq!(format_time(-631152000), "Jan  1 00:00:00 1950 UTC");
    }

    #[test]
    fn test_to_text_fields() {
        let text = sample(Vec::new(), vec![0xDE, 0xAD]).to_text_at(86400);
        assert!(text.contains("Version: v3"));
        assert!(text.contains("Serial Number: 01:AB"));
        assert!(text.contains("Signature Algorithm: sha256WithRSAEncryption (OID: 1.2.840.113549.1.1.11)"));
        assert!(text.contains("Issuer: C=US, CN=Example"));
        assert!(text.contains("Status: Valid (29 days remaining)"));
        assert!(text.contains("Key Size: 2160 bits"));
        assert!(text.contains("        DE:AD\n"));
    }

    #[test]
    fn test_to_text_expired() {
        let text = sample(Vec::new(), vec![0x00]).to_text_at(86400 * 31);
        assert!(text.contains("Status: Expired"));
    }

    #[test]
    fn test_extension_value_truncated_for_display() {
        let long = Extension {
            oid: Oid::new(&[2, 5, 29, 17]).to_der_value(),
            critical: false,
            value: vec![0x5A; 120], // 359 hex chars with colons
        };
        let rendered = format_extension(0, &long);
        assert!(rendered.contains("[1] X509v3 Subject Alternative Name"));
        let value_line = rendered
            .lines()
            .find(|l| l.trim_start().starts_with("Value:"))
            .unwrap();
        assert!(value_line.ends_with("..."));
        assert!(value_line.contains(&"5A:".repeat(30)));
        // 100 kept chars plus the marker
        assert_eq!(value_line.trim_start(), format!("Value: {}...", &"5A:".repeat(34)[..100]));
    }

    #[test]
    fn test_short_extension_value_not_truncated() {
        let ext = Extension {
            oid: Oid::new(&[2, 5, 29, 19]).to_der_value(),
            critical: true,
            value: vec![0x30, 0x00],
        };
        let rendered = format_extension(2, &ext);
        assert!(rendered.contains("[3] X509v3 Basic Constraints CRITICAL"));
        assert!(rendered.contains("Value: 30:00\n"));
    }

    #[test]
    fn test_signature_wrapped_at_60() {
        // 64 bytes → 191 hex chars → lines of 60/60/60/11
        let text = sample(Vec::new(), vec![0x11; 64]).to_text_at(0);
        let sig_lines: Vec<&str> = text
            .lines()
            .skip_while(|l| !l.starts_with("    Signature:"))
            .skip(1)
            .collect();
        assert_eq!(sig_lines.len(), 4);
        assert_eq!(sig_lines[0].trim().len(), 60);
        assert_eq!(sig_lines[3].trim().len(), 11);
    }
}
