
pub mod message;
pub mod modem;
pub mod radio;
pub mod tracing_init;

pub use message::encode_error::EncodeError;
pub use message::telemetry::Telemetry;
pub use message::WsprMessage;
pub use modem::ModemError;
pub use radio::{Radio, RadioError, SteppedRadio};
