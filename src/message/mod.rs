use std::fmt::Display;

use tracing::debug;

pub mod callsign;
pub mod channel_symbols;
pub mod encode_error;
pub mod fec;
pub mod interleave;
pub mod locator;
pub mod maidenhead;
pub mod pack;
pub mod power;
pub mod radix;
pub mod telemetry;

use channel_symbols::WSPR_SYMBOL_COUNT;
use encode_error::EncodeError;

/// A fully encoded WSPR message.
///
/// Holds the caller's inputs alongside the packed 56-bit frame and the 162
/// channel symbols ready for a four-level FSK transmit loop. The value is
/// immutable once constructed; encoding the same inputs always yields the
/// same symbols.
#[derive(Debug, Clone)]
pub struct WsprMessage {
    pub callsign: String,
    pub locator: String,
    pub power_dbm: i32,
    pub frame: u64,
    pub channel_symbols: [u8; WSPR_SYMBOL_COUNT],
}

impl Display for WsprMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.callsign, self.locator, self.power_dbm)
    }
}

impl WsprMessage {
    /// Encode a callsign, Maidenhead locator and transmit power into the
    /// 162 channel symbols of a WSPR transmission.
    ///
    /// Runs the full pipeline: numeral packing, frame assembly, the
    /// rate-1/2 convolutional code, bit-reversal interleaving and the merge
    /// with the synchronization vector. Any failure aborts the whole
    /// encode; no partial output is produced.
    pub fn new(callsign: &str, locator: &str, power_dbm: i32) -> Result<Self, EncodeError> {
        let c = callsign::pack_callsign_into_28bits(callsign)?;
        let l = locator::pack_locator_into_15bits(locator)?;
        let p = power::pack_power_into_7bits(power_dbm);
        let frame = pack::pack_frame(c, l, p);

        let mut bits = [0u8; fec::FEC_BIT_COUNT];
        fec::encode_fec(frame, &mut bits)?;
        interleave::interleave(&mut bits);
        let symbols = channel_symbols::merge_sync(&bits);

        debug!(callsign, locator, power_dbm, frame, "packed wspr frame");

        Ok(WsprMessage {
            callsign: callsign.to_owned(),
            locator: locator.to_owned(),
            power_dbm,
            frame,
            channel_symbols: symbols,
        })
    }

    /// The transmittable four-level symbols, tone indexes 0-3.
    pub fn symbols(&self) -> &[u8; WSPR_SYMBOL_COUNT] {
        &self.channel_symbols
    }
}
