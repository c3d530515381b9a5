use libm::roundf;

use super::encode_error::EncodeError;
use super::power::POWER_LEVELS_DBM;
use super::WsprMessage;

/// Balloon telemetry carried over a standard WSPR frame in the U4B format.
///
/// The callsign, locator and power fields are repurposed: a channel
/// identifier and the altitude travel in a synthetic callsign, while
/// temperature, voltage and speed are folded into a synthetic locator plus
/// power level. See <https://qrp-labs.com/u4b/u4bdecoding.html> and
/// <https://traquito.github.io/pro/telemetry/>.
#[derive(Debug, Clone)]
pub struct Telemetry {
    /// 2-character channel identifier
    pub channel: String,
    /// 5th and 6th characters of the balloon's Maidenhead reference
    pub grid: String,
    pub altitude_m: i32,
    pub temperature_c: i32,
    pub voltage_mv: i32,
    pub speed_kmh: i32,
}

impl Telemetry {
    /// Produce the synthetic (callsign, locator, power) triple that smuggles
    /// this telemetry through the standard WSPR message fields.
    pub fn encode(&self) -> Result<(String, String, i32), EncodeError> {
        let callsign = self.encode_callsign()?;
        let (locator, power_dbm) = self.encode_grid_power()?;
        Ok((callsign, locator, power_dbm))
    }

    /// Encode straight into a transmit-ready WSPR message.
    pub fn to_message(&self) -> Result<WsprMessage, EncodeError> {
        let (callsign, locator, power_dbm) = self.encode()?;
        WsprMessage::new(&callsign, &locator, power_dbm)
    }

    // The sub-square pair and the 20 m altitude step are combined into one
    // mixed-radix number and redistributed over the four free callsign
    // positions (radices 26, 26, 26 and 36, innermost first).
    fn encode_callsign(&self) -> Result<String, EncodeError> {
        let channel = self.channel.as_bytes();
        let grid = self.grid.as_bytes();
        if channel.len() != 2 || grid.len() != 2 {
            return Err(EncodeError::InvalidTelemetryInput);
        }
        if !grid.iter().all(|b| b.is_ascii_uppercase()) {
            return Err(EncodeError::InvalidTelemetryInput);
        }
        // 1068 altitude steps of 20 m
        if !(0..21360).contains(&self.altitude_m) {
            return Err(EncodeError::InvalidTelemetryInput);
        }

        let grid5 = (grid[0] - b'A') as u32;
        let grid6 = (grid[1] - b'A') as u32;
        let altitude = (self.altitude_m / 20) as u32;

        let mut val = grid5;
        val = val * 24 + grid6;
        val = val * 1068 + altitude;

        let id6 = val % 26;
        val /= 26;
        let id5 = val % 26;
        val /= 26;
        let id4 = val % 26;
        val /= 26;
        let id2 = val % 36;

        let callsign = [
            channel[0],
            encode_base36(id2 as u8),
            channel[1],
            b'A' + id4 as u8,
            b'A' + id5 as u8,
            b'A' + id6 as u8,
        ];
        Ok(callsign.iter().map(|&b| b as char).collect())
    }

    // Temperature, voltage, speed and a gps-valid marker are folded into a
    // single number with radices 90, 40, 42, 2 and 2 (the trailing factor
    // marks the basic telemetry format), then redistributed over the four
    // locator positions and the 19-entry power table.
    fn encode_grid_power(&self) -> Result<(String, i32), EncodeError> {
        if !(-50..=39).contains(&self.temperature_c) {
            return Err(EncodeError::InvalidTelemetryInput);
        }
        // 42 speed steps of 2 km/h, rounded to nearest
        if !(0..=82).contains(&self.speed_kmh) {
            return Err(EncodeError::InvalidTelemetryInput);
        }

        let temperature_num = (self.temperature_c + 50) as u32;
        let voltage_num =
            ((roundf((self.voltage_mv - 300) as f32 / 5.0) as i32 + 20).rem_euclid(40)) as u32;
        let speed_num = roundf(self.speed_kmh as f32 / 2.0) as u32;
        let gps_valid_num = 1u32;

        let mut val = temperature_num;
        val = val * 40 + voltage_num;
        val = val * 42 + speed_num;
        val = val * 2 + gps_valid_num;
        val = val * 2 + 1;

        let power = val % 19;
        val /= 19;
        let g4 = val % 10;
        val /= 10;
        let g3 = val % 10;
        val /= 10;
        let g2 = val % 18;
        val /= 18;
        let g1 = val % 18;

        let locator = [
            b'A' + g1 as u8,
            b'A' + g2 as u8,
            b'0' + g3 as u8,
            b'0' + g4 as u8,
        ];
        let locator = locator.iter().map(|&b| b as char).collect();

        Ok((locator, POWER_LEVELS_DBM[power as usize] as i32))
    }
}

fn encode_base36(val: u8) -> u8 {
    if val < 10 {
        b'0' + val
    } else {
        b'A' + (val - 10)
    }
}
