use std::fmt::Debug;

/// Errors returned by the driver.
///
/// `E` is the error type of the underlying bus.
#[derive(Debug, thiserror::Error)]
pub enum Error<E: Debug> {
    /// The I2C bus could not be opened.
    #[error("Failed to open I2C bus: {0}")]
    BusUnavailable(String),

    /// A transaction with the device did not complete.
    #[error("Device 0x{address:02x} not responding (register 0x{register:02x}): {cause:?}")]
    DeviceNotResponding {
        address: u8,
        register: u8,
        cause: E,
    },

    /// Address does not fit in 7 bits.
    #[error("Invalid I2C address 0x{0:02x}, must be 0x00-0x7f")]
    InvalidAddress(u8),
}

impl<E: Debug> Error<E> {
    pub(crate) fn not_responding(address: u8, register: u8) -> impl FnOnce(E) -> Self {
        move |cause| Error::DeviceNotResponding {
            address,
            register,
            cause,
        }
    }
}
