//! Transport used by the driver: byte and block register access on an
//! addressed I2C bus.
use embedded_hal::blocking::i2c::{Write, WriteRead};
use linux_embedded_hal::I2cdev;
use std::fmt::Debug;

/// Register level access to devices on one I2C bus.
///
/// Implemented for every `embedded-hal` blocking I2C device, so any HAL bus
/// (or a test double) can drive the sensor.
pub trait RegisterBus {
    type Error: Debug;

    /// Reads a single register.
    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, Self::Error>;

    /// Reads `buffer.len()` contiguous registers starting at `register`.
    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buffer: &mut [u8],
    ) -> Result<(), Self::Error>;

    /// Writes a single register.
    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), Self::Error>;
}

impl<I2C, E> RegisterBus for I2C
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
    E: Debug,
{
    type Error = E;

    fn read_byte(&mut self, address: u8, register: u8) -> Result<u8, E> {
        let mut data = [0u8];
        self.write_read(address, &[register], &mut data)?;
        Ok(data[0])
    }

    fn read_block(&mut self, address: u8, register: u8, buffer: &mut [u8]) -> Result<(), E> {
        self.write_read(address, &[register], buffer)
    }

    fn write_byte(&mut self, address: u8, register: u8, value: u8) -> Result<(), E> {
        self.write(address, &[register, value])
    }
}

/// Device node for a bus number.
pub fn device_path(bus_id: u8) -> String {
    format!("/dev/i2c-{}", bus_id)
}

/// Opens `/dev/i2c-<bus_id>`.
pub fn open(bus_id: u8) -> Result<I2cdev, String> {
    I2cdev::new(device_path(bus_id)).map_err(|e| format!("{}: {}", device_path(bus_id), e))
}
