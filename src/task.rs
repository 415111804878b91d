use crate::error::{Result, Sht4xError};
use crate::mode::Sht4xReader;
use crate::{Reading, Sht4x};
use embedded_hal::blocking::{delay::DelayMs, i2c, serial};
use log::{error, info};

/// Little endian temperature followed by little endian humidity
pub fn encode_reading(reading: &Reading) -> [u8; 4] {
    let [t_lo, t_hi] = reading.temperature.to_le_bytes();
    let [h_lo, h_hi] = reading.humidity.to_le_bytes();
    [t_lo, t_hi, h_lo, h_hi]
}

/// Samples the sensor and forwards every reading over a serial link
pub struct SamplingTask<I2C, D, S> {
    sensor: Sht4x<I2C, D>,
    serial: S,
}

impl<I2C, D, S> SamplingTask<I2C, D, S>
where
    I2C: i2c::Write + i2c::Read,
    D: DelayMs<u32>,
    S: serial::Write<u8>,
{
    pub fn new(sensor: Sht4x<I2C, D>, serial: S) -> Self {
        Self { sensor, serial }
    }

    pub fn into_inner(self) -> (Sht4x<I2C, D>, S) {
        (self.sensor, self.serial)
    }

    /// Takes one reading with the sensor's configured precision and transmits it.
    /// Nothing is sent when the reading fails.
    pub fn sample(&mut self) -> Result<Reading> {
        let reading = self.sensor.read()?;

        let message = encode_reading(&reading);
        self.serial
            .bwrite_all(&message)
            .map_err(|_| Sht4xError::SerialWriteError)?;
        self.serial
            .bflush()
            .map_err(|_| Sht4xError::SerialWriteError)?;

        Ok(reading)
    }

    /// Samples `count` times, `period_ms` apart, and returns how many readings went out
    pub fn run_for(&mut self, count: usize, period_ms: u32) -> usize {
        let mut sent = 0;
        for i in 0..count {
            if i > 0 {
                self.sensor.delay_ms(period_ms);
            }

            match self.sample() {
                Ok(reading) => {
                    info!(
                        "sample {}: {} dC, {} d%RH",
                        i, reading.temperature, reading.humidity
                    );
                    sent += 1;
                }
                Err(e) => error!("sample {} failed: {}", i, e),
            }
        }
        sent
    }
}
