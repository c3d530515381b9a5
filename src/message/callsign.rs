use super::encode_error::EncodeError;
use super::radix::{encode_char, ALPHA, DIGIT, SPACE};

/// Pack a 5 or 6 character amateur callsign into its 28-bit WSPR numeral.
///
/// The callsign must match `[A-Z0-9]?[A-Z0-9][0-9][A-Z ][A-Z ][A-Z ]`.
/// A digit in the second position marks a single-letter prefix, which is
/// encoded behind an implicit leading space; a digit in the third position
/// marks a two-character prefix. Anything else is ill-formed. Suffixes
/// shorter than three characters are padded with literal spaces.
pub fn pack_callsign_into_28bits(callsign: &str) -> Result<u32, EncodeError> {
    let bytes = callsign.as_bytes();
    if bytes.len() > 6 {
        return Err(EncodeError::InvalidLength);
    }

    let mut encoded: u64;
    let tail: usize;
    if bytes.len() >= 2 && bytes[1].is_ascii_digit() {
        // single letter prefix, for example K1ABC
        encoded = encode_char(b' ', ALPHA | DIGIT | SPACE, 0)?;
        encoded = encode_char(bytes[0], ALPHA | DIGIT, encoded)?;
        encoded = encode_char(bytes[1], DIGIT, encoded)?;
        tail = 2;
    } else if bytes.len() >= 3 && bytes[2].is_ascii_digit() {
        // two character prefix, for example KA1ABC
        encoded = encode_char(bytes[0], ALPHA | DIGIT | SPACE, 0)?;
        encoded = encode_char(bytes[1], ALPHA | DIGIT, encoded)?;
        encoded = encode_char(bytes[2], DIGIT, encoded)?;
        tail = 3;
    } else {
        return Err(EncodeError::IllFormedCallsign);
    }

    let mut encode_count = 3;
    for &b in &bytes[tail..] {
        encoded = encode_char(b, ALPHA | SPACE, encoded)?;
        encode_count += 1;
    }

    // missing suffix positions are encoded as literal spaces
    while encode_count < 6 {
        encoded = encode_char(b' ', ALPHA | SPACE, encoded)?;
        encode_count += 1;
    }

    Ok(encoded as u32)
}
