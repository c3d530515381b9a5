use super::fec::FEC_BIT_COUNT;

/// Number of four-level FSK symbols in a WSPR transmission.
pub const WSPR_SYMBOL_COUNT: usize = 162;

/// The published 162-bit WSPR synchronization vector, one bit per symbol.
pub const SYNC_VECTOR: [u8; WSPR_SYMBOL_COUNT] = [
    1, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0,
    0, 1, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1,
    0, 0, 0, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1, 1, 0, 1, 0, 0, 0, 1,
    1, 0, 1, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 1,
    0, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0,
    0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1,
    0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 0, 1, 1, 0, 0, 0, 1, 1, 0,
    0, 0,
];

/// Merge the interleaved parity bits with the synchronization vector.
///
/// Each symbol is `2*data + sync`, giving the four-level FSK tone index in
/// {0, 1, 2, 3}; the data bit selects the upper or lower tone pair and the
/// sync bit the tone within the pair.
pub fn merge_sync(interleaved: &[u8; FEC_BIT_COUNT]) -> [u8; WSPR_SYMBOL_COUNT] {
    let mut symbols = [0u8; WSPR_SYMBOL_COUNT];
    for (i, symbol) in symbols.iter_mut().enumerate() {
        *symbol = 2 * interleaved[i] + SYNC_VECTOR[i];
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_vector_is_binary() {
        assert!(SYNC_VECTOR.iter().all(|&b| b <= 1));
    }

    #[test]
    fn zero_data_reproduces_the_sync_vector() {
        let symbols = merge_sync(&[0u8; FEC_BIT_COUNT]);
        assert_eq!(symbols, SYNC_VECTOR);
    }

    #[test]
    fn all_ones_data_lifts_every_symbol_by_two() {
        let symbols = merge_sync(&[1u8; FEC_BIT_COUNT]);
        for (i, &s) in symbols.iter().enumerate() {
            assert_eq!(s, 2 + SYNC_VECTOR[i]);
        }
    }

    #[test]
    fn symbols_stay_in_the_four_tone_range() {
        let mut data = [0u8; FEC_BIT_COUNT];
        for (i, b) in data.iter_mut().enumerate() {
            *b = (i % 2) as u8;
        }
        assert!(merge_sync(&data).iter().all(|&s| s <= 3));
    }

    #[test]
    fn low_bit_of_every_symbol_is_the_sync_bit() {
        let mut data = [0u8; FEC_BIT_COUNT];
        data[17] = 1;
        data[100] = 1;
        let symbols = merge_sync(&data);
        for (i, &s) in symbols.iter().enumerate() {
            assert_eq!(s & 1, SYNC_VECTOR[i]);
        }
    }
}
