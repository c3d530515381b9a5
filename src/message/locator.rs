use super::encode_error::EncodeError;
use super::radix::{encode_char, DIGIT, MAIDENHEAD};

/// Pack a 4 character Maidenhead locator into its 15-bit WSPR numeral.
///
/// The field letters run `A`-`R` and the square digits `0`-`9`. WSPR
/// numbers the first field/digit pair in reverse, so the partial value is
/// complemented against 179 before the second pair is folded in.
pub fn pack_locator_into_15bits(locator: &str) -> Result<u32, EncodeError> {
    let bytes = locator.as_bytes();
    if bytes.len() != 4 {
        return Err(EncodeError::InvalidLength);
    }

    let mut encoded = encode_char(bytes[0], MAIDENHEAD, 0)?;
    encoded = encode_char(bytes[2], DIGIT, encoded)?;
    encoded = 179 - encoded;
    encoded = encode_char(bytes[1], MAIDENHEAD, encoded)?;
    encoded = encode_char(bytes[3], DIGIT, encoded)?;

    Ok(encoded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn42_packs_to_22632() {
        // F4 -> 54, complement 125, then N and 2: (125*18 + 13)*10 + 2
        assert_eq!(pack_locator_into_15bits("FN42").unwrap(), 22632);
    }

    #[test]
    fn aa00_packs_to_32220() {
        assert_eq!(pack_locator_into_15bits("AA00").unwrap(), 32220);
    }

    #[test]
    fn numerals_fit_in_15_bits() {
        for locator in ["AA00", "RR99", "FN42", "JJ00", "QF22", "AR09"] {
            let packed = pack_locator_into_15bits(locator).unwrap();
            assert!(packed < (1 << 15), "{locator} overflowed 15 bits");
        }
    }

    #[test]
    fn lowercase_input_matches_uppercase() {
        assert_eq!(
            pack_locator_into_15bits("fn42").unwrap(),
            pack_locator_into_15bits("FN42").unwrap()
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            pack_locator_into_15bits("FN4"),
            Err(EncodeError::InvalidLength)
        ));
        assert!(matches!(
            pack_locator_into_15bits("FN420"),
            Err(EncodeError::InvalidLength)
        ));
        assert!(matches!(
            pack_locator_into_15bits(""),
            Err(EncodeError::InvalidLength)
        ));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        // S is past the Maidenhead field range and letters cannot stand in
        // for the square digits
        assert!(matches!(
            pack_locator_into_15bits("SN42"),
            Err(EncodeError::InvalidCharacter)
        ));
        assert!(matches!(
            pack_locator_into_15bits("FNA2"),
            Err(EncodeError::InvalidCharacter)
        ));
    }
}
