use super::ModemError;
use crate::radio::Radio;

/// Audio-frequency-shift keyer.
///
/// The thinnest of the modems: the caller supplies the tone schedule and
/// this type just keys the radio to each requested frequency.
pub struct Afsk<R: Radio> {
    radio: R,
}

impl<R: Radio> Afsk<R> {
    pub fn new(radio: R) -> Self {
        Afsk { radio }
    }

    /// Key the transmitter at the given frequency in centihertz.
    pub fn tone(&mut self, centihertz: u64) -> Result<(), ModemError> {
        self.radio.transmit(centihertz)?;
        Ok(())
    }

    pub fn standby(&mut self) -> Result<(), ModemError> {
        self.radio.standby()?;
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), ModemError> {
        self.radio.close()?;
        Ok(())
    }
}
