//! Driver for the Sharp GP2Y0E02B infrared distance sensor on a Linux I2C bus.
//!
//! Build with the `python` feature to get the `gp2y0e02b` Python module.
//!
//! ```no_run
//! use gp2y0e02b::{Gp2y0e02b, DEFAULT_ADDRESS, DEFAULT_BUS};
//!
//! let mut sensor = Gp2y0e02b::open(DEFAULT_BUS, DEFAULT_ADDRESS)?;
//! println!("{} cm", sensor.read_distance()?);
//! sensor.enter_standby()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod bus;
mod driver;
mod error;
#[cfg(feature = "python")]
mod python;
pub mod register;

pub use driver::{distance_cm, Gp2y0e02b};
pub use error::Error;
pub use register::{PowerState, DEFAULT_ADDRESS, DEFAULT_BUS};
