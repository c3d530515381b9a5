use super::encode_error::EncodeError;

/// Character classes for the WSPR mixed-radix numeral encoding.
///
/// Each class contributes its cardinality to the radix of a position, in a
/// fixed order: digits occupy ordinals 0-9, letters the next 26 and space
/// the single slot after both. The Maidenhead class (`A`-`R`, radix 18) is
/// exclusive and never combines with the others.
pub const DIGIT: u8 = 1 << 0;
pub const ALPHA: u8 = 1 << 1;
pub const SPACE: u8 = 1 << 2;
pub const MAIDENHEAD: u8 = 1 << 3;

/// Fold one character into a running mixed-radix accumulator.
///
/// The character's ordinal within the requested class alphabets is looked up
/// case-insensitively and the result is `acc * radix + ordinal`, where radix
/// is the sum of the cardinalities of the requested classes. Repeated calls
/// implement place-value packing over differently sized alphabets.
pub fn encode_char(c: u8, classes: u8, acc: u64) -> Result<u64, EncodeError> {
    let mut matched: Option<u64> = None;
    let mut radix: u64 = 0;

    if classes & DIGIT != 0 {
        if c.is_ascii_digit() {
            matched = Some(radix + (c - b'0') as u64);
        }
        radix += 10;
    }

    if classes & ALPHA != 0 {
        if c.is_ascii_uppercase() {
            matched = Some(radix + (c - b'A') as u64);
        } else if c.is_ascii_lowercase() {
            matched = Some(radix + (c - b'a') as u64);
        }
        radix += 26;
    }

    if classes & MAIDENHEAD != 0 {
        if classes & (DIGIT | ALPHA | SPACE) != 0 {
            return Err(EncodeError::InvalidClassCombination);
        }
        radix += 18;
        if (b'A'..=b'R').contains(&c) {
            matched = Some((c - b'A') as u64);
        } else if (b'a'..=b'r').contains(&c) {
            matched = Some((c - b'a') as u64);
        }
    }

    if classes & SPACE != 0 {
        if classes & (DIGIT | ALPHA) == 0 {
            return Err(EncodeError::InvalidClassCombination);
        }
        if c == b' ' {
            matched = Some(radix);
        }
        radix += 1;
    }

    match matched {
        Some(ordinal) => Ok(acc * radix + ordinal),
        None => Err(EncodeError::InvalidCharacter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod single_classes {
        use super::*;

        #[test]
        fn digit_ordinals_run_0_to_9() {
            assert_eq!(encode_char(b'0', DIGIT, 0).unwrap(), 0);
            assert_eq!(encode_char(b'9', DIGIT, 0).unwrap(), 9);
        }

        #[test]
        fn maidenhead_letters_run_0_to_17() {
            assert_eq!(encode_char(b'A', MAIDENHEAD, 0).unwrap(), 0);
            assert_eq!(encode_char(b'R', MAIDENHEAD, 0).unwrap(), 17);
        }

        #[test]
        fn maidenhead_is_case_insensitive() {
            assert_eq!(
                encode_char(b'j', MAIDENHEAD, 0).unwrap(),
                encode_char(b'J', MAIDENHEAD, 0).unwrap()
            );
        }

        #[test]
        fn maidenhead_rejects_letters_past_r() {
            assert!(matches!(
                encode_char(b'S', MAIDENHEAD, 0),
                Err(EncodeError::InvalidCharacter)
            ));
        }
    }

    mod combined_classes {
        use super::*;

        #[test]
        fn alpha_ordinals_follow_digits() {
            // digit block comes first, so 'A' lands at 10
            assert_eq!(encode_char(b'A', ALPHA | DIGIT, 0).unwrap(), 10);
            assert_eq!(encode_char(b'Z', ALPHA | DIGIT, 0).unwrap(), 35);
        }

        #[test]
        fn space_follows_digits_and_letters() {
            assert_eq!(encode_char(b' ', ALPHA | DIGIT | SPACE, 0).unwrap(), 36);
        }

        #[test]
        fn accumulator_multiplies_by_total_radix() {
            // radix 37 for {digit, alpha, space}
            assert_eq!(encode_char(b'0', ALPHA | DIGIT | SPACE, 2).unwrap(), 74);
        }

        #[test]
        fn lowercase_matches_uppercase() {
            assert_eq!(
                encode_char(b'k', ALPHA | DIGIT, 0).unwrap(),
                encode_char(b'K', ALPHA | DIGIT, 0).unwrap()
            );
        }
    }

    mod class_errors {
        use super::*;

        #[test]
        fn maidenhead_cannot_combine_with_other_classes() {
            assert!(matches!(
                encode_char(b'A', MAIDENHEAD | DIGIT, 0),
                Err(EncodeError::InvalidClassCombination)
            ));
            assert!(matches!(
                encode_char(b'A', MAIDENHEAD | SPACE, 0),
                Err(EncodeError::InvalidClassCombination)
            ));
        }

        #[test]
        fn space_alone_is_rejected() {
            assert!(matches!(
                encode_char(b' ', SPACE, 0),
                Err(EncodeError::InvalidClassCombination)
            ));
        }

        #[test]
        fn unmatched_character_is_rejected() {
            assert!(matches!(
                encode_char(b'*', ALPHA | DIGIT | SPACE, 0),
                Err(EncodeError::InvalidCharacter)
            ));
            assert!(matches!(
                encode_char(b' ', ALPHA | DIGIT, 0),
                Err(EncodeError::InvalidCharacter)
            ));
        }
    }
}
