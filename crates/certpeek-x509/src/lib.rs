#![forbid(unsafe_code)]
#![doc = "X.509 certificate decoding: PEM in, structured certificate record out."]

mod certificate;
mod text;

pub use certificate::{
    Certificate, DistinguishedName, Extension, SubjectPublicKeyInfo, ValidityStatus,
};
pub use text::format_time;
