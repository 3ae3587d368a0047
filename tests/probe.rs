extern crate pygamer_meatball;

use embedded_hal::blocking::i2c::WriteRead;
use pygamer_meatball::probe::{
    check_identity, connect, AddressPair, Identity, IdentityError, ProbeError,
};

#[derive(Debug, PartialEq)]
struct Nack;

/// One device on the bus answering WHO_AM_I.
struct MockI2c {
    address: u8,
    identity: Identity,
    transactions: Vec<u8>,
}

impl MockI2c {
    fn with_device(address: u8, identity: Identity) -> Self {
        MockI2c {
            address,
            identity,
            transactions: Vec::new(),
        }
    }
}

impl WriteRead for MockI2c {
    type Error = Nack;

    fn write_read(&mut self, address: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Nack> {
        self.transactions.push(address);
        if address != self.address {
            return Err(Nack);
        }

        buffer[0] = if bytes == [self.identity.register] {
            self.identity.expected
        } else {
            0
        };
        Ok(())
    }
}

/// Counts lines so we can tell how often the fallback spoke up.
#[derive(Default)]
struct Console {
    text: String,
}

impl core::fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl Console {
    fn lines(&self) -> usize {
        self.text.lines().count()
    }
}

/// A log that refuses every write, like a full or detached channel.
struct Broken;

impl core::fmt::Write for Broken {
    fn write_str(&mut self, _: &str) -> core::fmt::Result {
        Err(core::fmt::Error)
    }
}

#[test]
fn falls_back_to_secondary_once() {
    let mut i2c = MockI2c::with_device(0x69, Identity::ICM20948);
    let mut console = Console::default();

    let (address, found_on) = connect(
        "ICM20948",
        AddressPair::ICM20948_REFERENCE,
        |address| check_identity(&mut i2c, address, Identity::ICM20948).map(|_| address),
        &mut console,
    )
    .unwrap();

    assert_eq!(address, 0x69);
    assert_eq!(found_on, 0x69);
    assert_eq!(i2c.transactions, [0x68, 0x69]);
    assert_eq!(console.lines(), 1);
    assert_eq!(
        console.text,
        "No ICM20948 found at default address 0x68. Trying alternate address 0x69.\n"
    );
}

#[test]
fn broken_log_still_tries_secondary() {
    let mut i2c = MockI2c::with_device(0x69, Identity::ICM20948);

    let (_, found_on) = connect(
        "ICM20948",
        AddressPair::ICM20948_REFERENCE,
        |address| check_identity(&mut i2c, address, Identity::ICM20948),
        &mut Broken,
    )
    .unwrap();

    assert_eq!(found_on, 0x69);
    assert_eq!(i2c.transactions, [0x68, 0x69]);
}

#[test]
fn primary_found_says_nothing() {
    let mut i2c = MockI2c::with_device(0x19, Identity::LIS3DH);
    let mut console = Console::default();

    let (_, found_on) = connect(
        "LIS3DH",
        AddressPair::LIS3DH,
        |address| check_identity(&mut i2c, address, Identity::LIS3DH),
        &mut console,
    )
    .unwrap();

    assert_eq!(found_on, 0x19);
    assert_eq!(i2c.transactions, [0x19]);
    assert_eq!(console.lines(), 0);
}

#[test]
fn nobody_home_is_fatal_after_one_message() {
    let mut i2c = MockI2c::with_device(0x42, Identity::ICM20948);
    let mut console = Console::default();

    let result = connect(
        "ICM20948",
        AddressPair::ICM20948_WORKSHOP,
        |address| check_identity(&mut i2c, address, Identity::ICM20948),
        &mut console,
    );

    assert_eq!(
        result,
        Err(ProbeError::NotFound {
            primary: 0x69,
            secondary: 0x68,
            error: IdentityError::I2cError(Nack),
        })
    );
    assert_eq!(console.lines(), 1);
}

#[test]
fn wrong_chip_is_a_mismatch() {
    // an lis3dh where we expect an icm20948
    let mut i2c = MockI2c::with_device(0x68, Identity::LIS3DH);

    assert_eq!(
        check_identity(&mut i2c, 0x68, Identity::ICM20948),
        Err(IdentityError::Mismatch { found: 0 })
    );
}
