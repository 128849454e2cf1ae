//! Register map of the GP2Y0E02B.

/// Default 7-bit address. The datasheet lists 0x80, which includes the R/W bit.
pub const DEFAULT_ADDRESS: u8 = 0x80 >> 1;

/// I2C bus exposed on the Raspberry Pi header.
pub const DEFAULT_BUS: u8 = 1;

/// Highest valid 7-bit address.
pub const MAX_ADDRESS: u8 = 0x7F;

/// Shift bit, which selects the maximum display range.
/// 0x01 = 128 cm, 0x02 = 64 cm.
pub const SHIFT_BIT: u8 = 0x35;

/// Distance[11:4]
pub const DISTANCE_HIGH: u8 = 0x5E;
/// Distance[3:0]
pub const DISTANCE_LOW: u8 = 0x5F;

/// Active/stand-by state control
pub const STATE_CONTROL: u8 = 0xE8;

/// Power states accepted by the state control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    /// Ranging, around 25 mA.
    Active,
    /// Around 60 uA, no ranging.
    Standby,
}

impl PowerState {
    /// Value written to `STATE_CONTROL`.
    pub fn code(self) -> u8 {
        match self {
            PowerState::Active => 0x00,
            PowerState::Standby => 0x01,
        }
    }
}
