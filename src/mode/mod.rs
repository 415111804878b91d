use crate::error::Result;
use crate::Reading;

mod heater;
pub use heater::{Heater, HeaterDuration, HeaterPower};
mod precision;
pub use precision::Precision;

mod private {
    pub trait Sealed {}

    impl Sealed for super::Precision {}
    impl Sealed for super::Heater {}
}

/// A single-byte measurement command and the time the sensor needs before
/// its result can be read back.
///
/// Only the opcode tables in this module implement it:
///
/// ```compile_fail
/// use sht4x::mode::Measurement;
///
/// struct Reset;
///
/// impl Measurement for Reset {
///     fn command(&self) -> u8 {
///         0x94
///     }
///
///     fn settle_ms(&self) -> u32 {
///         0
///     }
/// }
/// ```
pub trait Measurement: private::Sealed {
    /// The opcode written to the sensor
    fn command(&self) -> u8;
    /// Milliseconds to wait between the command and the read
    fn settle_ms(&self) -> u32;
}

pub trait Sht4xReader {
    /// Read the sensor readings
    fn read(&mut self) -> Result<Reading>;
}
