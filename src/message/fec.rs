use super::encode_error::EncodeError;

/// Number of bits produced by the convolutional encoder: two parity bits
/// for each of the 50 information bits plus the 31 flush bits.
pub const FEC_BIT_COUNT: usize = 162;

// Generator polynomials of the rate-1/2, constraint-length-32 WSPR code.
const GENERATOR_A: u32 = 0xF2D0_5351;
const GENERATOR_B: u32 = 0xE461_3C47;

/// Run the 50 information bits of a packed frame through the rate-1/2
/// convolutional code.
///
/// Frame bits 55 down to 6 are shifted MSB-first into a 32-bit register and
/// each input bit emits one parity bit per generator polynomial, written one
/// bit per output byte. After the information bits the register is flushed
/// with 31 zeros, for 162 output bits total. Returns the number of bits
/// written.
pub fn encode_fec(frame: u64, out: &mut [u8]) -> Result<usize, EncodeError> {
    if out.len() < FEC_BIT_COUNT {
        return Err(EncodeError::BufferTooSmall {
            needed: FEC_BIT_COUNT,
        });
    }

    let mut k = 0;
    let mut reg: u32 = 0;
    for i in (6..=55).rev() {
        let bit = ((frame >> i) & 1) as u32;
        reg = (reg << 1) | bit;
        out[k] = parity32(reg & GENERATOR_A);
        k += 1;
        out[k] = parity32(reg & GENERATOR_B);
        k += 1;
    }

    // flush the register with zeros
    for _ in 0..31 {
        reg <<= 1;
        out[k] = parity32(reg & GENERATOR_A);
        k += 1;
        out[k] = parity32(reg & GENERATOR_B);
        k += 1;
    }

    Ok(k)
}

/// Population count mod 2, folded at 1/2/4/8/16 bit strides.
fn parity32(mut x: u32) -> u8 {
    x ^= x >> 1;
    x ^= x >> 2;
    x ^= x >> 4;
    x ^= x >> 8;
    x ^= x >> 16;
    (x & 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity32_folds_the_population_count() {
        assert_eq!(parity32(0), 0);
        assert_eq!(parity32(1), 1);
        assert_eq!(parity32(0b11), 0);
        assert_eq!(parity32(0b111), 1);
        assert_eq!(parity32(0xFFFF_FFFF), 0);
        assert_eq!(parity32(0x8000_0001), 0);
        assert_eq!(parity32(0x8000_0000), 1);
    }

    #[test]
    fn emits_exactly_162_bits() {
        let mut out = [0xFFu8; 200];
        let n = encode_fec(0x1234_5678_9ABC_DE40, &mut out).unwrap();
        assert_eq!(n, FEC_BIT_COUNT);
        assert!(out[..n].iter().all(|&b| b <= 1));
        // nothing past the encoded region is touched
        assert!(out[n..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn zero_frame_emits_all_zero_parity() {
        let mut out = [1u8; FEC_BIT_COUNT];
        encode_fec(0, &mut out).unwrap();
        assert!(out.iter().all(|&b| b == 0));
    }

    #[test]
    fn leading_information_bit_excites_both_generators() {
        // a single one in frame bit 55 makes the register 1 on the first
        // step and 2 on the second; bit 0 of both generators is set, bit 1
        // only in 0xE4613C47
        let mut out = [0u8; FEC_BIT_COUNT];
        encode_fec(1 << 55, &mut out).unwrap();
        assert_eq!(&out[..4], &[1, 1, 0, 1]);
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut out = [0u8; FEC_BIT_COUNT - 1];
        assert!(matches!(
            encode_fec(0, &mut out),
            Err(EncodeError::BufferTooSmall { needed: FEC_BIT_COUNT })
        ));
    }

    #[test]
    fn low_six_frame_bits_never_reach_the_encoder() {
        let mut with_junk = [0u8; FEC_BIT_COUNT];
        let mut without = [0u8; FEC_BIT_COUNT];
        encode_fec(0x3F, &mut with_junk).unwrap();
        encode_fec(0, &mut without).unwrap();
        assert_eq!(with_junk, without);
    }
}
