/// Pack the three WSPR numerals into the 56-bit message frame.
///
/// The 50 information bits occupy frame positions 55..6, which is the WSPR
/// convention; the low six bits are always zero.
pub fn pack_frame(callsign28: u32, locator15: u32, power7: u32) -> u64 {
    ((callsign28 as u64) << 28) | ((locator15 as u64) << 13) | ((power7 as u64) << 6)
}
