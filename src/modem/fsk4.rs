use std::thread;
use std::time::{Duration, Instant};

use tracing::trace;

use super::ModemError;
use crate::radio::Radio;

/// Four-level FSK modem.
///
/// Holds each of four tones (base + shift * symbol) for one symbol period.
/// WSPR hands this modem its 162 pre-encoded symbols via
/// [`Fsk4::write_symbols`]; arbitrary bytes go out two bits at a time via
/// [`Fsk4::write`].
pub struct Fsk4<R: Radio> {
    radio: R,
    base_hz: u64,
    shift_centihertz: u32,
    symbol_period: Duration,
    tones: [u32; 4],
}

impl<R: Radio> Fsk4<R> {
    /// Create a modem transmitting at `base_hz` with tone spacing
    /// `shift_centihertz` (e.g. 146 for the 1.46 Hz WSPR shift) and one
    /// symbol per `symbol_period`.
    pub fn new(radio: R, base_hz: u64, shift_centihertz: u32, symbol_period: Duration) -> Self {
        let mut tones = [0u32; 4];
        for (i, tone) in tones.iter_mut().enumerate() {
            *tone = shift_centihertz * i as u32;
        }
        Fsk4 {
            radio,
            base_hz,
            shift_centihertz,
            symbol_period,
            tones,
        }
    }

    /// Send pre-encoded symbols (values 0-3) and drop to standby.
    pub fn write_symbols(&mut self, symbols: &[u8]) -> Result<(), ModemError> {
        for &symbol in symbols {
            self.tone(symbol & 0x03)?;
        }
        self.standby()
    }

    /// Send bytes as four 2-bit symbols each, MSB first, then standby.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, ModemError> {
        for &b in data {
            self.write_byte(b)?;
        }
        self.standby()?;
        Ok(data.len())
    }

    /// Borrow the underlying radio, e.g. to inspect a test double.
    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn base_frequency(&self) -> u64 {
        self.base_hz
    }

    pub fn shift(&self) -> u32 {
        self.shift_centihertz
    }

    pub fn set_base_frequency(&mut self, base_hz: u64) {
        self.base_hz = base_hz;
    }

    pub fn set_shift(&mut self, shift_centihertz: u32) {
        self.shift_centihertz = shift_centihertz;
        for (i, tone) in self.tones.iter_mut().enumerate() {
            *tone = shift_centihertz * i as u32;
        }
    }

    pub fn rate(&self) -> Duration {
        self.symbol_period
    }

    pub fn set_rate(&mut self, symbol_period: Duration) {
        self.symbol_period = symbol_period;
    }

    pub fn standby(&mut self) -> Result<(), ModemError> {
        self.radio.standby()?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), ModemError> {
        self.radio.close()?;
        Ok(())
    }

    fn write_byte(&mut self, mut data: u8) -> Result<(), ModemError> {
        for _ in 0..4 {
            let symbol = (data & 0xC0) >> 6;
            self.tone(symbol)?;
            data <<= 2;
        }
        Ok(())
    }

    fn tone(&mut self, symbol: u8) -> Result<(), ModemError> {
        let start = Instant::now();
        let centihertz = self.base_hz * 100 + self.tones[symbol as usize] as u64;
        trace!(symbol, centihertz, "keying tone");
        self.radio.transmit(centihertz)?;

        // the transmitter startup time counts against the symbol period
        let startup = start.elapsed();
        if startup > self.symbol_period {
            return Err(ModemError::BaudRateTooHigh);
        }
        thread::sleep(self.symbol_period - startup);
        Ok(())
    }
}

/// Round a requested tone shift to the radio's tuning granularity.
///
/// Both values are in centihertz; a non-positive step leaves the request
/// untouched.
pub fn quantize_shift(requested_centihertz: u32, step_centihertz: f64) -> u32 {
    if step_centihertz <= 0.0 {
        return requested_centihertz;
    }
    let steps = libm::round(requested_centihertz as f64 / step_centihertz);
    (steps * step_centihertz) as u32
}
