use snafu::Snafu;

/// Errors produced while packing a WSPR message.
///
/// Every failure is local to a single encode call; there is no component
/// state to clean up and retrying with the same input can never succeed.
#[derive(Debug, Snafu)]
pub enum EncodeError {
    /// Character is outside the permitted class set for its position
    #[snafu(display("invalid character for this position"))]
    InvalidCharacter,

    /// String does not match the required length
    #[snafu(display("input has the wrong length"))]
    InvalidLength,

    /// Output buffer is undersized for the encoded bit stream
    #[snafu(display("output buffer too small, need {needed} entries"))]
    BufferTooSmall { needed: usize },

    /// No digit found in either expected callsign prefix position
    #[snafu(display("ill-formed callsign, must start with {{alpha}}{{alpha}}?{{digit}}"))]
    IllFormedCallsign,

    /// Telemetry channel or grid field is not exactly 2 characters
    #[snafu(display("invalid telemetry data"))]
    InvalidTelemetryInput,

    /// Character classes that cannot be combined in a single call
    #[snafu(display("illegal character class combination"))]
    InvalidClassCombination,
}
