use crate::error::Result;
use crate::mode::{Measurement, Sht4xReader};
use crate::{Reading, Sht4x};
use embedded_hal::blocking::{delay::DelayMs, i2c};

/// Conversion time for every precision level, the sensor needs at most 8.3 ms
pub(crate) const MEASUREMENT_DELAY_MS: u32 = 10;

/// Determines the repeatability of a normal measurement
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum Precision {
    Low = 0xE0,
    Medium = 0xF6,
    #[default]
    High = 0xFD,
}

impl Measurement for Precision {
    fn command(&self) -> u8 {
        *self as u8
    }

    fn settle_ms(&self) -> u32 {
        MEASUREMENT_DELAY_MS
    }
}

impl<I2C, D> Sht4xReader for Sht4x<I2C, D>
where
    I2C: i2c::Write + i2c::Read,
    D: DelayMs<u32>,
{
    /// Measures with the configured precision
    fn read(&mut self) -> Result<Reading> {
        let precision = self.precision();
        self.read_temperature_humidity(precision)
    }
}
