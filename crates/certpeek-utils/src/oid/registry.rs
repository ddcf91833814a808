//! Static mapping from well-known OIDs to display names.
//!
//! Lookups never fail: callers fall back to the dotted-decimal string for
//! identifiers that are not listed here.

use super::Oid;

/// The display name for a well-known OID, if any.
pub fn name(oid: &Oid) -> Option<&'static str> {
    match oid.arcs() {
        // DN attribute types (X.520)
        [2, 5, 4, 3] => Some("CN"),
        [2, 5, 4, 5] => Some("serialNumber"),
        [2, 5, 4, 6] => Some("C"),
        [2, 5, 4, 7] => Some("L"),
        [2, 5, 4, 8] => Some("ST"),
        [2, 5, 4, 9] => Some("street"),
        [2, 5, 4, 10] => Some("O"),
        [2, 5, 4, 11] => Some("OU"),
        [1, 2, 840, 113549, 1, 9, 1] => Some("emailAddress"),
        [0, 9, 2342, 19200300, 100, 1, 25] => Some("DC"),

        // Signature and public-key algorithms
        [1, 2, 840, 113549, 1, 1, 1] => Some("rsaEncryption"),
        [1, 2, 840, 113549, 1, 1, 5] => Some("sha1WithRSAEncryption"),
        [1, 2, 840, 113549, 1, 1, 10] => Some("RSASSA-PSS"),
        [1, 2, 840, 113549, 1, 1, 11] => Some("sha256WithRSAEncryption"),
        [1, 2, 840, 113549, 1, 1, 12] => Some("sha384WithRSAEncryption"),
        [1, 2, 840, 113549, 1, 1, 13] => Some("sha512WithRSAEncryption"),
        [1, 2, 840, 10045, 2, 1] => Some("id-ecPublicKey"),
        [1, 2, 840, 10045, 4, 3, 2] => Some("ecdsa-with-SHA256"),
        [1, 2, 840, 10045, 4, 3, 3] => Some("ecdsa-with-SHA384"),
        [1, 2, 840, 10045, 4, 3, 4] => Some("ecdsa-with-SHA512"),
        [1, 2, 840, 10040, 4, 1] => Some("DSA"),
        [1, 3, 101, 110] => Some("X25519"),
        [1, 3, 101, 112] => Some("Ed25519"),
        [1, 3, 101, 113] => Some("Ed448"),

        // Named curves
        [1, 2, 840, 10045, 3, 1, 7] => Some("prime256v1"),
        [1, 3, 132, 0, 34] => Some("secp384r1"),
        [1, 3, 132, 0, 35] => Some("secp521r1"),

        // X.509v3 extensions (RFC 5280)
        [2, 5, 29, 14] => Some("X509v3 Subject Key Identifier"),
        [2, 5, 29, 15] => Some("X509v3 Key Usage"),
        [2, 5, 29, 17] => Some("X509v3 Subject Alternative Name"),
        [2, 5, 29, 18] => Some("X509v3 Issuer Alternative Name"),
        [2, 5, 29, 19] => Some("X509v3 Basic Constraints"),
        [2, 5, 29, 30] => Some("X509v3 Name Constraints"),
        [2, 5, 29, 31] => Some("X509v3 CRL Distribution Points"),
        [2, 5, 29, 32] => Some("X509v3 Certificate Policies"),
        [2, 5, 29, 35] => Some("X509v3 Authority Key Identifier"),
        [2, 5, 29, 37] => Some("X509v3 Extended Key Usage"),
        [1, 3, 6, 1, 5, 5, 7, 1, 1] => Some("Authority Information Access"),
        [1, 3, 6, 1, 4, 1, 11129, 2, 4, 2] => Some("CT Precertificate SCTs"),

        // Extended key usage values
        [1, 3, 6, 1, 5, 5, 7, 3, 1] => Some("TLS Web Server Authentication"),
        [1, 3, 6, 1, 5, 5, 7, 3, 2] => Some("TLS Web Client Authentication"),
        [1, 3, 6, 1, 5, 5, 7, 3, 3] => Some("Code Signing"),
        [1, 3, 6, 1, 5, 5, 7, 3, 4] => Some("E-mail Protection"),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(name(&Oid::new(&[2, 5, 4, 3])), Some("CN"));
        assert_eq!(
            name(&Oid::new(&[1, 2, 840, 113549, 1, 1, 5])),
            Some("sha1WithRSAEncryption")
        );
        assert_eq!(
            name(&Oid::new(&[2, 5, 29, 19])),
            Some("X509v3 Basic Constraints")
        );
    }

    #[test]
    fn test_unknown_is_none() {
        assert_eq!(name(&Oid::new(&[1, 2, 3, 4, 5])), None);
    }
}
