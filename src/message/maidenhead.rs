/// Convert a latitude/longitude pair to an 8-character Maidenhead grid
/// reference.
///
/// Latitude is shifted into [0, 180] and longitude into [0, 360); each of
/// the four character pairs then encodes a successively finer subdivision:
/// 20x10 degree fields, 2x1 degree squares, sub-squares and extended
/// squares.
pub fn maidenhead(lat: f64, lon: f64) -> String {
    let mut lat = lat + 90.0;
    let mut lon = lon + 180.0;
    while lon < 0.0 {
        lon += 360.0;
    }
    while lon > 360.0 {
        lon -= 360.0;
    }

    let mut code = [0u8; 8];

    code[0] = b'A' + (lon / 20.0) as u8;
    code[1] = b'A' + (lat / 10.0) as u8;

    lon %= 20.0;
    lat %= 10.0;
    code[2] = b'0' + (lon / 2.0) as u8;
    code[3] = b'0' + lat as u8;

    lon = (lon % 2.0) * 24.0;
    lat = (lat % 1.0) * 24.0;
    code[4] = b'A' + (lon / 2.0) as u8;
    code[5] = b'A' + lat as u8;

    lon = (lon % 2.0) * 10.0;
    lat = (lat % 1.0) * 10.0;
    code[6] = b'0' + (lon / 2.0) as u8;
    code[7] = b'0' + lat as u8;

    code.iter().map(|&b| b as char).collect()
}

/// Maidenhead reference truncated to 4 or 6 characters for callers that do
/// not need extended-square precision.
pub fn maidenhead_truncated(lat: f64, lon: f64, length: usize) -> String {
    let mut code = maidenhead(lat, lon);
    if length == 4 || length == 6 {
        code.truncate(length);
    }
    code
}
