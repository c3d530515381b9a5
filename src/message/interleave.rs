use super::fec::FEC_BIT_COUNT;

/// Reorder the 162 parity bits by bit-reversed destination index.
///
/// Destinations are `bit_reverse_8(i)` for i in 0..=254; reversed indexes
/// that fall outside the buffer are skipped and the next source bit goes to
/// the next qualifying destination. Skipping makes the rearrangement
/// non-involutional, so it runs through a separate destination buffer
/// rather than in-place swaps.
pub fn interleave(bits: &mut [u8; FEC_BIT_COUNT]) {
    let mut dest = [0u8; FEC_BIT_COUNT];
    let mut si = 0;
    for i in 0..=254u16 {
        let ix = reverse_byte(i as u8) as usize;
        if ix < dest.len() {
            dest[ix] = bits[si];
            si += 1;
            if si >= bits.len() {
                break;
            }
        }
    }
    *bits = dest;
}

/// Reverse the bit order of a byte.
fn reverse_byte(mut b: u8) -> u8 {
    b = (b & 0xF0) >> 4 | (b & 0x0F) << 4;
    b = (b & 0xCC) >> 2 | (b & 0x33) << 2;
    b = (b & 0xAA) >> 1 | (b & 0x55) << 1;
    b
}
