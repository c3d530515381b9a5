use snafu::Snafu;

use crate::radio::RadioError;

pub mod afsk;
pub mod fsk4;
pub mod morse;

pub use afsk::Afsk;
pub use fsk4::Fsk4;
pub use morse::Morse;

/// Errors produced by the tone-keyed modems.
#[derive(Debug, Snafu)]
pub enum ModemError {
    /// Transmitter startup time exceeded the symbol period
    #[snafu(display("baud rate too high, cannot keep up with transmission"))]
    BaudRateTooHigh,

    /// Character has no Morse code representation
    #[snafu(display("invalid character for Morse code"))]
    InvalidCharacter,

    /// The underlying radio failed
    #[snafu(context(false))]
    #[snafu(display("radio failure: {source}"))]
    Radio { source: RadioError },
}
