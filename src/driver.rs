use linux_embedded_hal::I2cdev;
use log::{debug, trace};

use crate::bus::{self, RegisterBus};
use crate::error::Error;
use crate::register::{self, PowerState};

/// Full display range of the 12-bit distance code before shifting.
const FULL_RANGE_CM: f64 = 256.0;

/// Converts a raw distance code to centimeters.
///
/// `distance = raw / 16 / 2^shift_bits`
pub fn distance_cm(raw: u16, shift_bits: u8) -> f64 {
    raw as f64 / 16.0 / 2f64.powi(shift_bits as i32)
}

/// Sharp GP2Y0E02B infrared distance sensor.
///
/// The shift bit is read once when the driver is created and cached for the
/// life of the instance. The driver does not track the power state; every
/// call issues exactly one bus transaction.
pub struct Gp2y0e02b<B: RegisterBus> {
    bus: B,
    address: u8,
    shift_bits: u8,
}

impl Gp2y0e02b<I2cdev> {
    /// Opens `/dev/i2c-<bus_id>` and initializes the sensor at `address`.
    pub fn open(bus_id: u8, address: u8) -> Result<Self, Error<<I2cdev as RegisterBus>::Error>> {
        Self::open_with(bus_id, address, bus::open)
    }
}

impl<B: RegisterBus> Gp2y0e02b<B> {
    /// Opens a bus with `opener` and initializes the sensor on it.
    ///
    /// An opener failure is reported as `BusUnavailable`.
    pub fn open_with<F, OE>(bus_id: u8, address: u8, opener: F) -> Result<Self, Error<B::Error>>
    where
        F: FnOnce(u8) -> Result<B, OE>,
        OE: std::fmt::Display,
    {
        check_address(address)?;
        let bus = opener(bus_id).map_err(|e| Error::BusUnavailable(e.to_string()))?;
        Self::new(bus, address)
    }

    /// Initializes the sensor on an already opened bus.
    ///
    /// Reads the shift bit register; if that read fails the bus is dropped
    /// and no driver is returned.
    pub fn new(mut bus: B, address: u8) -> Result<Self, Error<B::Error>> {
        check_address(address)?;
        let shift_bits = bus
            .read_byte(address, register::SHIFT_BIT)
            .map_err(Error::not_responding(address, register::SHIFT_BIT))?;
        debug!(
            "GP2Y0E02B at 0x{:02x}: shift bits {}, max range {} cm",
            address,
            shift_bits,
            max_range(shift_bits)
        );
        Ok(Gp2y0e02b {
            bus,
            address,
            shift_bits,
        })
    }

    /// Reads the raw distance code, `Distance[11:4] * 16 + Distance[3:0]`.
    ///
    /// Performs one block read of registers 0x5E and 0x5F.
    pub fn read_raw(&mut self) -> Result<u16, Error<B::Error>> {
        let mut bytes = [0u8; 2];
        self.bus
            .read_block(self.address, register::DISTANCE_HIGH, &mut bytes)
            .map_err(Error::not_responding(self.address, register::DISTANCE_HIGH))?;
        Ok(bytes[0] as u16 * 16 + bytes[1] as u16)
    }

    /// Reads the measured distance in centimeters.
    ///
    /// Every call performs a fresh bus transaction. The result is not
    /// checked against the sensor's nominal range.
    pub fn read_distance(&mut self) -> Result<f64, Error<B::Error>> {
        let raw = self.read_raw()?;
        let distance = distance_cm(raw, self.shift_bits);
        trace!(
            "GP2Y0E02B at 0x{:02x}: raw {} -> {} cm",
            self.address,
            raw,
            distance
        );
        Ok(distance)
    }

    /// Writes `state` to the state control register.
    pub fn set_power_state(&mut self, state: PowerState) -> Result<(), Error<B::Error>> {
        self.bus
            .write_byte(self.address, register::STATE_CONTROL, state.code())
            .map_err(Error::not_responding(self.address, register::STATE_CONTROL))?;
        debug!("GP2Y0E02B at 0x{:02x}: {:?}", self.address, state);
        Ok(())
    }

    /// Puts the sensor in stand-by (~60 uA instead of ~25 mA).
    pub fn enter_standby(&mut self) -> Result<(), Error<B::Error>> {
        self.set_power_state(PowerState::Standby)
    }

    /// Puts the sensor back in the active state.
    pub fn enter_active(&mut self) -> Result<(), Error<B::Error>> {
        self.set_power_state(PowerState::Active)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Shift bit read at initialization.
    pub fn shift_bits(&self) -> u8 {
        self.shift_bits
    }

    /// Maximum distance the sensor reports with the cached shift bit.
    pub fn max_display_range_cm(&self) -> f64 {
        max_range(self.shift_bits)
    }

    /// Destroys the driver and returns the bus.
    pub fn release(self) -> B {
        self.bus
    }
}

fn max_range(shift_bits: u8) -> f64 {
    FULL_RANGE_CM / 2f64.powi(shift_bits as i32)
}

fn check_address<E: std::fmt::Debug>(address: u8) -> Result<(), Error<E>> {
    if address > register::MAX_ADDRESS {
        return Err(Error::InvalidAddress(address));
    }
    Ok(())
}
