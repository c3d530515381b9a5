/// The canonical WSPR power levels in dBm, from 1 mW up to 1 kW.
pub const POWER_LEVELS_DBM: [u8; 19] = [
    0, 3, 7, 10, 13, 17, 20, 23, 27, 30, 33, 37, 40, 43, 47, 50, 53, 57, 60,
];

/// Pack a transmit power in dBm into its 7-bit WSPR numeral.
///
/// No validation is performed; the caller must keep the value in roughly
/// [-64, 63] so the result fits 7 bits, and is responsible for quantizing
/// to the canonical levels where the protocol expects one.
pub fn pack_power_into_7bits(dbm: i32) -> u32 {
    (0x40 + dbm) as u32
}

/// Quantize a dBm value to the nearest canonical WSPR power level.
pub fn nearest_power_level(dbm: i32) -> u8 {
    let mut best = POWER_LEVELS_DBM[0];
    for &level in POWER_LEVELS_DBM.iter() {
        if (dbm - level as i32).abs() < (dbm - best as i32).abs() {
            best = level;
        }
    }
    best
}
