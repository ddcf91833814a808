//! Base64 encoding and decoding for PEM bodies.

use certpeek_types::DecodeError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode bytes to a Base64 string (no line wrapping).
pub fn encode(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len().div_ceil(3) * 4);
    let mut iter = input.chunks_exact(3);
    for chunk in iter.by_ref() {
        let n = u32::from_be_bytes([0, chunk[0], chunk[1], chunk[2]]);
        out.push(ALPHABET[(n >> 18) as usize & 0x3F] as char);
        out.push(ALPHABET[(n >> 12) as usize & 0x3F] as char);
        out.push(ALPHABET[(n >> 6) as usize & 0x3F] as char);
        out.push(ALPHABET[n as usize & 0x3F] as char);
    }
    match iter.remainder() {
        [a] => {
            let n = (*a as u32) << 16;
            out.push(ALPHABET[(n >> 18) as usize & 0x3F] as char);
            out.push(ALPHABET[(n >> 12) as usize & 0x3F] as char);
            out.push_str("==");
        }
        [a, b] => {
            let n = ((*a as u32) << 16) | ((*b as u32) << 8);
            out.push(ALPHABET[(n >> 18) as usize & 0x3F] as char);
            out.push(ALPHABET[(n >> 12) as usize & 0x3F] as char);
            out.push(ALPHABET[(n >> 6) as usize & 0x3F] as char);
            out.push('=');
        }
        _ => {}
    }
    out
}

/// Decode a Base64 string, ignoring ASCII whitespace.
///
/// Padding is accepted only at the end of the input.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let mut acc: u32 = 0;
    let mut acc_bits: u32 = 0;
    let mut pad = 0usize;

    for &c in input.as_bytes() {
        if c.is_ascii_whitespace() {
            continue;
        }
        if c == b'=' {
            pad += 1;
            continue;
        }
        if pad > 0 {
            // data after padding
            return Err(DecodeError::InvalidBase64);
        }
        acc = (acc << 6) | sextet(c)? as u32;
        acc_bits += 6;
        if acc_bits >= 8 {
            acc_bits -= 8;
            out.push((acc >> acc_bits) as u8);
        }
    }

    // A valid encoding leaves at most 4 dangling accumulator bits (all
    // zero) and at most two '=' characters.
    if pad > 2 || acc_bits > 4 || (acc & ((1 << acc_bits) - 1)) != 0 {
        return Err(DecodeError::InvalidBase64);
    }
    Ok(out)
}

fn sextet(c: u8) -> Result<u8, DecodeError> {
    match c {
        b'A'..=b'Z' => Ok(c - b'A'),
        b'a'..=b'z' => Ok(c - b'a' + 26),
        b'0'..=b'9' => Ok(c - b'0' + 52),
        b'+' => Ok(62),
        b'/' => Ok(63),
        _ => Err(DecodeError::InvalidBase64),
    }
}
