use linux_embedded_hal::I2cdev;
use pyo3::create_exception;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::fmt::Debug;

use crate::error::Error;
use crate::register::{DEFAULT_ADDRESS, DEFAULT_BUS};
use crate::Gp2y0e02b;

create_exception!(gp2y0e02b, BusUnavailable, PyIOError);
create_exception!(gp2y0e02b, DeviceNotResponding, PyIOError);

fn to_py_err<E: Debug>(e: Error<E>) -> PyErr {
    match e {
        Error::BusUnavailable(_) => BusUnavailable::new_err(e.to_string()),
        Error::DeviceNotResponding { .. } => DeviceNotResponding::new_err(e.to_string()),
        Error::InvalidAddress(_) => PyErr::new::<PyValueError, _>(e.to_string()),
    }
}

#[pyclass(name = "GP2Y0E02B")]
#[doc = "Sharp GP2Y0E02B infrared distance sensor.\n\n\
         The shift bit is read once at construction.\n\
         Every read_distance() call performs an I2C transaction."]
struct PySensor {
    sensor: Gp2y0e02b<I2cdev>,
}

#[pymethods]
impl PySensor {
    #[new]
    #[pyo3(signature = (bus=DEFAULT_BUS, address=None))]
    fn new(bus: u8, address: Option<u8>) -> PyResult<Self> {
        let sensor = Gp2y0e02b::open(bus, address.unwrap_or(DEFAULT_ADDRESS)).map_err(to_py_err)?;
        Ok(PySensor { sensor })
    }

    /// Measured distance in cm.
    fn read_distance(&mut self) -> PyResult<f64> {
        self.sensor.read_distance().map_err(to_py_err)
    }

    fn read_raw(&mut self) -> PyResult<u16> {
        self.sensor.read_raw().map_err(to_py_err)
    }

    fn enter_standby(&mut self) -> PyResult<()> {
        self.sensor.enter_standby().map_err(to_py_err)
    }

    fn enter_active(&mut self) -> PyResult<()> {
        self.sensor.enter_active().map_err(to_py_err)
    }

    #[getter]
    fn address(&self) -> u8 {
        self.sensor.address()
    }

    #[getter]
    fn shift_bits(&self) -> u8 {
        self.sensor.shift_bits()
    }

    #[getter]
    fn max_display_range_cm(&self) -> f64 {
        self.sensor.max_display_range_cm()
    }
}

// Register the module
#[pymodule]
fn gp2y0e02b(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySensor>()?;
    m.add("BusUnavailable", py.get_type::<BusUnavailable>())?;
    m.add("DeviceNotResponding", py.get_type::<DeviceNotResponding>())?;
    m.add("DEFAULT_ADDRESS", DEFAULT_ADDRESS)?;
    Ok(())
}
