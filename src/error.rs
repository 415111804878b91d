use thiserror::Error;

pub type Result<T> = core::result::Result<T, Sht4xError>;
#[derive(Error, Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub enum Sht4xError {
    #[error("Read I2C Error")]
    ReadI2CError,
    #[error("Write I2C Error")]
    WriteI2CError,
    #[error("First word bytes [{bytes_start:#x}, {bytes_end:#x}] expected {expected_checksum:#x} but got the checksum {calculated_checksum:#x}")]
    InvalidFirstWordChecksumError {
        bytes_start: u8,
        bytes_end: u8,
        expected_checksum: u8,
        calculated_checksum: u8,
    },
    #[error("Second word bytes [{bytes_start:#x}, {bytes_end:#x}] expected {expected_checksum:#x} but got the checksum {calculated_checksum:#x}")]
    InvalidSecondWordChecksumError {
        bytes_start: u8,
        bytes_end: u8,
        expected_checksum: u8,
        calculated_checksum: u8,
    },
    #[error("Serial Write Error")]
    SerialWriteError,
}

impl Sht4xError {
    /// The bus reported a failure while sending or receiving
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Sht4xError::ReadI2CError | Sht4xError::WriteI2CError)
    }

    /// A frame arrived but one of its CRC-8 bytes did not match
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            Sht4xError::InvalidFirstWordChecksumError { .. }
                | Sht4xError::InvalidSecondWordChecksumError { .. }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify() {
        assert!(Sht4xError::ReadI2CError.is_transport_error());
        assert!(Sht4xError::WriteI2CError.is_transport_error());
        assert!(!Sht4xError::SerialWriteError.is_transport_error());

        let corrupt = Sht4xError::InvalidSecondWordChecksumError {
            bytes_start: 0x5C,
            bytes_end: 0x39,
            expected_checksum: 0xD6,
            calculated_checksum: 0x9F,
        };
        assert!(corrupt.is_checksum_error());
        assert!(!corrupt.is_transport_error());
        assert!(!Sht4xError::SerialWriteError.is_checksum_error());
    }

    #[test]
    fn checksum_message() {
        let err = Sht4xError::InvalidFirstWordChecksumError {
            bytes_start: 0x62,
            bytes_end: 0x4D,
            expected_checksum: 0x01,
            calculated_checksum: 0x7C,
        };
        assert_eq!(
            err.to_string(),
            "First word bytes [0x62, 0x4d] expected 0x1 but got the checksum 0x7c"
        );
    }
}
