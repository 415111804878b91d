#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod mode;
pub mod task;

use crc::{Algorithm, Crc};
use embedded_hal::blocking::{delay::DelayMs, i2c};
use error::{Result, Sht4xError};
use log::{debug, warn};
use mode::{Heater, HeaterDuration, HeaterPower, Measurement, Precision};

pub mod prelude {
    pub use super::{
        mode::Heater, mode::HeaterDuration, mode::HeaterPower, mode::Measurement,
        mode::Precision, mode::Sht4xReader, task::SamplingTask, DeviceAddr, Reading, Sht4x,
    };
}

const CRC_ALGORITHM: Algorithm<u8> = Algorithm {
    width: 8,
    poly: 0x31,
    init: 0xFF,
    refin: false,
    refout: false,
    xorout: 0x00,
    check: 0xF7,
    residue: 0x00,
};

const CRC: Crc<u8> = Crc::<u8>::new(&CRC_ALGORITHM);

const SERIAL_NUMBER_COMMAND: u8 = 0x89;
const SOFT_RESET_COMMAND: u8 = 0x94;

// Fixed point conversion constants, results are in tenths
const TEMPERATURE_MULTIPLIER: u32 = 1750;
const TEMPERATURE_OFFSET: i32 = 450;
const HUMIDITY_MULTIPLIER: u32 = 1250;
const HUMIDITY_OFFSET: i32 = 60;
const HUMIDITY_MAX: i32 = 1000;

/// The temperature and humidity sensor
#[derive(Copy, Clone, Debug)]
pub struct Sht4x<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    precision: Precision,
}

/// The bus and delay handed back by [`Sht4x::destroy`]
#[derive(Debug)]
pub struct Destroyed<I2C, D> {
    pub i2c: I2C,
    pub delay: D,
}

/// Represents the reading gotten from the sensor, in fixed point tenths
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reading {
    /// Tenths of a degree Celsius
    pub temperature: i16,
    /// Tenths of a percent relative humidity, always within 0..=1000
    pub humidity: u16,
}

#[cfg(not(feature = "no-float"))]
impl Reading {
    pub fn temperature_celsius(&self) -> f32 {
        self.temperature as f32 / 10f32
    }

    pub fn humidity_percent(&self) -> f32 {
        self.humidity as f32 / 10f32
    }
}

/// The three I2C addresses the sensor variants answer on
#[derive(Default, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum DeviceAddr {
    #[default]
    A = 0x44,
    B = 0x45,
    C = 0x46,
}

fn merge_bytes(a: u8, b: u8) -> u16 {
    ((a as u16) << 8) | b as u16
}

/// CRC-8 of one data word as the sensor computes it
pub fn crc8(word: &[u8; 2]) -> u8 {
    CRC.checksum(word)
}

/// Checks one data word against the checksum that followed it on the wire
pub fn crc8_check(word: &[u8; 2], crc: u8) -> bool {
    crc8(word) == crc
}

fn verify_data(buffer: [u8; 6]) -> Result<()> {
    let first_result = crc8(&[buffer[0], buffer[1]]);
    if first_result != buffer[2] {
        warn!("checksum mismatch on first word of {:x?}", buffer);
        return Err(Sht4xError::InvalidFirstWordChecksumError {
            bytes_start: buffer[0],
            bytes_end: buffer[1],
            expected_checksum: buffer[2],
            calculated_checksum: first_result,
        });
    }

    let second_result = crc8(&[buffer[3], buffer[4]]);
    if second_result != buffer[5] {
        warn!("checksum mismatch on second word of {:x?}", buffer);
        return Err(Sht4xError::InvalidSecondWordChecksumError {
            bytes_start: buffer[3],
            bytes_end: buffer[4],
            expected_checksum: buffer[5],
            calculated_checksum: second_result,
        });
    }

    Ok(())
}

/// Raw count to tenths of a degree Celsius, -450 to 1299
fn convert_temperature(raw: u16) -> i16 {
    let scaled = ((raw as u32 * TEMPERATURE_MULTIPLIER) >> 16) as i32;
    (scaled - TEMPERATURE_OFFSET) as i16
}

/// Raw count to tenths of a percent, clamped to the physical range
fn convert_humidity(raw: u16) -> u16 {
    let scaled = ((raw as u32 * HUMIDITY_MULTIPLIER) >> 16) as i32;
    (scaled - HUMIDITY_OFFSET).clamp(0, HUMIDITY_MAX) as u16
}

fn process_data(buffer: [u8; 6]) -> Result<Reading> {
    verify_data(buffer)?;

    let raw_temperature = merge_bytes(buffer[0], buffer[1]);
    let raw_humidity = merge_bytes(buffer[3], buffer[4]);

    Ok(Reading {
        temperature: convert_temperature(raw_temperature),
        humidity: convert_humidity(raw_humidity),
    })
}

impl<I2C, D> Sht4x<I2C, D>
where
    I2C: i2c::Write + i2c::Read,
    D: DelayMs<u32>,
{
    /// Create a new sensor on the default address
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            delay,
            address: DeviceAddr::default() as u8,
            precision: Precision::default(),
        }
    }

    /// Hands back the bus and the delay
    pub fn destroy(self) -> Destroyed<I2C, D> {
        Destroyed {
            i2c: self.i2c,
            delay: self.delay,
        }
    }

    /// Change the precision used by [`mode::Sht4xReader::read`]
    pub fn set_precision(&mut self, precision: Precision) {
        self.precision = precision;
    }

    /// Change the precision used by [`mode::Sht4xReader::read`]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Change the sensor's I2C address
    pub fn with_address(mut self, address: DeviceAddr) -> Self {
        self.address = address as u8;
        self
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub(crate) fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn i2c_write(&mut self, bytes: &[u8]) -> Result<()> {
        match self.i2c.write(self.address, bytes) {
            Ok(res) => Ok(res),
            Err(_) => Err(Sht4xError::WriteI2CError),
        }
    }

    fn i2c_read(&mut self, buffer: &mut [u8]) -> Result<()> {
        match self.i2c.read(self.address, buffer) {
            Ok(res) => Ok(res),
            Err(_) => Err(Sht4xError::ReadI2CError),
        }
    }

    /// Reads the 32 bit serial number, most significant byte first
    pub fn serial_number(&mut self) -> Result<u32> {
        debug!("reading serial number from {:#x}", self.address);
        self.i2c_write(&[SERIAL_NUMBER_COMMAND])?;

        let mut buffer = [0; 6];
        self.i2c_read(&mut buffer)?;
        verify_data(buffer)?;

        Ok(u32::from_be_bytes([buffer[0], buffer[1], buffer[3], buffer[4]]))
    }

    /// Resets the sensor without reading anything back
    pub fn soft_reset(&mut self) -> Result<()> {
        debug!("soft reset of {:#x}", self.address);
        self.i2c_write(&[SOFT_RESET_COMMAND])
    }

    /// Issues the measurement command, waits for it to settle and decodes the result
    pub(crate) fn measure<M: Measurement>(&mut self, measurement: &M) -> Result<Reading> {
        let command = measurement.command();
        debug!("measurement {:#x} on {:#x}", command, self.address);
        self.i2c_write(&[command])?;

        self.delay.delay_ms(measurement.settle_ms());

        let mut buffer = [0; 6];
        self.i2c_read(&mut buffer)?;
        process_data(buffer)
    }

    /// Measures once with the given precision
    pub fn read_temperature_humidity(&mut self, precision: Precision) -> Result<Reading> {
        self.measure(&precision)
    }

    /// Heats the sensor before measuring with high precision
    pub fn read_temperature_humidity_heater(
        &mut self,
        power: HeaterPower,
        duration: HeaterDuration,
    ) -> Result<Reading> {
        self.measure(&Heater::new(power, duration))
    }
}
