use snafu::Snafu;

/// Errors surfaced by a radio device.
#[derive(Debug, Snafu)]
pub enum RadioError {
    /// The underlying device reported a failure
    #[snafu(display("radio device error: {message}"))]
    Device { message: String },
}

/// Minimal transmit capability required by the tone-keyed modems.
///
/// Frequencies are expressed in centihertz so sub-hertz tone spacing (WSPR
/// shifts tones by about 1.46 Hz) survives integer arithmetic.
pub trait Radio {
    /// Key the transmitter at the given frequency.
    fn transmit(&mut self, centihertz: u64) -> Result<(), RadioError>;
    /// Stop transmitting and idle the radio.
    fn standby(&mut self) -> Result<(), RadioError>;
    /// Release the radio.
    fn close(&mut self) -> Result<(), RadioError>;
}

/// Radios that quantize tuning to a fixed frequency step.
///
/// Modems use the reported step with [`crate::modem::fsk4::quantize_shift`]
/// to round requested tone shifts; the rounding itself stays a pure
/// function rather than a hidden hardware query.
pub trait SteppedRadio: Radio {
    /// Tuning granularity in centihertz.
    fn freq_step(&self) -> f64;
}

/// One command observed by [`RecordingRadio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioEvent {
    Transmit(u64),
    Standby,
    Close,
}

/// Test double that records every command instead of keying hardware.
#[derive(Debug)]
pub struct RecordingRadio {
    pub events: Vec<RadioEvent>,
    pub step: f64,
}

impl Default for RecordingRadio {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRadio {
    pub fn new() -> Self {
        RecordingRadio {
            events: Vec::new(),
            step: 1.0,
        }
    }

    /// Frequencies of the transmit commands seen so far.
    pub fn transmissions(&self) -> Vec<u64> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RadioEvent::Transmit(f) => Some(*f),
                _ => None,
            })
            .collect()
    }
}

impl Radio for RecordingRadio {
    fn transmit(&mut self, centihertz: u64) -> Result<(), RadioError> {
        self.events.push(RadioEvent::Transmit(centihertz));
        Ok(())
    }

    fn standby(&mut self) -> Result<(), RadioError> {
        self.events.push(RadioEvent::Standby);
        Ok(())
    }

    fn close(&mut self) -> Result<(), RadioError> {
        self.events.push(RadioEvent::Close);
        Ok(())
    }
}

impl SteppedRadio for RecordingRadio {
    fn freq_step(&self) -> f64 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_radio_keeps_command_order() {
        let mut radio = RecordingRadio::new();
        radio.transmit(700_000_000).unwrap();
        radio.standby().unwrap();
        radio.close().unwrap();
        assert_eq!(
            radio.events,
            vec![
                RadioEvent::Transmit(700_000_000),
                RadioEvent::Standby,
                RadioEvent::Close
            ]
        );
    }

    #[test]
    fn default_matches_new() {
        let radio = RecordingRadio::default();
        assert!(radio.events.is_empty());
        assert_eq!(radio.freq_step(), 1.0);
    }

    #[test]
    fn transmissions_filters_out_state_changes() {
        let mut radio = RecordingRadio::new();
        radio.transmit(1).unwrap();
        radio.standby().unwrap();
        radio.transmit(2).unwrap();
        assert_eq!(radio.transmissions(), vec![1, 2]);
    }
}
