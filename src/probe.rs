//! Finding the motion sensor at startup.
//!
//! Boards ship the IMU strapped to one of two I2C addresses. [`connect`] tries
//! the expected one first and falls back to the other exactly once, leaving a
//! note in the log when it has to.

use core::fmt::Write;
use embedded_hal::blocking::i2c::WriteRead;

/// Primary and fallback 7 bit address for a sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPair {
    pub primary: u8,
    pub secondary: u8,
}

impl AddressPair {
    /// ICM20948 with AD0 low, as the reference board expects it
    pub const ICM20948_REFERENCE: AddressPair = AddressPair::new(0x68, 0x69);
    /// ICM20948 with AD0 high, as the workshop board expects it
    pub const ICM20948_WORKSHOP: AddressPair = AddressPair::new(0x69, 0x68);
    /// PyGamer straps its LIS3DH to the alternate address
    pub const LIS3DH: AddressPair = AddressPair::new(0x19, 0x18);

    pub const fn new(primary: u8, secondary: u8) -> Self {
        AddressPair { primary, secondary }
    }
}

#[derive(Debug, PartialEq)]
pub enum ProbeError<E> {
    /// Neither address answered, holds the error of the last attempt.
    NotFound {
        primary: u8,
        secondary: u8,
        error: E,
    },
}

/// Open a sensor at `pair.primary`, or at `pair.secondary` if that fails.
///
/// Returns the opened device and the address it answered on. The fallback
/// message is written to `log` before the retry, so it shows up exactly once
/// whether the retry works or not. A sink that refuses the write does not
/// stop the retry.
pub fn connect<T, E, F, W>(
    device: &str,
    pair: AddressPair,
    mut open: F,
    log: &mut W,
) -> Result<(T, u8), ProbeError<E>>
where
    F: FnMut(u8) -> Result<T, E>,
    W: Write,
{
    if let Ok(sensor) = open(pair.primary) {
        return Ok((sensor, pair.primary));
    }

    let _ = writeln!(
        log,
        "No {} found at default address {:#04x}. Trying alternate address {:#04x}.",
        device, pair.primary, pair.secondary
    );

    match open(pair.secondary) {
        Ok(sensor) => Ok((sensor, pair.secondary)),
        Err(error) => Err(ProbeError::NotFound {
            primary: pair.primary,
            secondary: pair.secondary,
            error,
        }),
    }
}

/// Register and value a sensor answers with when asked who it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub register: u8,
    pub expected: u8,
}

impl Identity {
    pub const LIS3DH: Identity = Identity {
        register: 0x0F,
        expected: 0x33,
    };
    pub const ICM20948: Identity = Identity {
        register: 0x00,
        expected: 0xEA,
    };
}

#[derive(Debug, PartialEq)]
pub enum IdentityError<E> {
    I2cError(E),
    Mismatch { found: u8 },
}

impl<E> From<E> for IdentityError<E> {
    fn from(error: E) -> Self {
        IdentityError::I2cError(error)
    }
}

/// Read the WHO_AM_I register at `address` and compare it. Borrows the bus
/// so a failed attempt does not cost us the peripheral.
pub fn check_identity<I2C, E>(
    i2c: &mut I2C,
    address: u8,
    identity: Identity,
) -> Result<(), IdentityError<E>>
where
    I2C: WriteRead<Error = E>,
{
    let mut found = [0u8];
    i2c.write_read(address, &[identity.register], &mut found)?;

    if found[0] == identity.expected {
        Ok(())
    } else {
        Err(IdentityError::Mismatch { found: found[0] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    #[test]
    fn primary_answers_without_a_word() {
        let mut log = String::new();
        let result = connect("ICM20948", AddressPair::ICM20948_REFERENCE, Ok::<u8, ()>, &mut log);

        assert_eq!(result, Ok((0x68, 0x68)));
        assert!(log.is_empty());
    }

    #[test]
    fn both_missing_logs_once_and_fails() {
        let mut log = String::new();
        let mut tried = std::vec::Vec::new();
        let result = connect::<(), _, _, _>(
            "ICM20948",
            AddressPair::ICM20948_WORKSHOP,
            |address| {
                tried.push(address);
                Err(address)
            },
            &mut log,
        );

        assert_eq!(
            result,
            Err(ProbeError::NotFound {
                primary: 0x69,
                secondary: 0x68,
                error: 0x68,
            })
        );
        assert_eq!(tried, [0x69, 0x68]);
        assert_eq!(
            log,
            "No ICM20948 found at default address 0x69. Trying alternate address 0x68.\n"
        );
    }
}
