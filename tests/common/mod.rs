//! Mock GP2Y0E02B on an I2C bus for testing

use embedded_hal::blocking::i2c::{Write, WriteRead};
use std::cell::RefCell;
use std::rc::Rc;

/// Bus error returned by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nack;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    Write {
        addr: u8,
        data: Vec<u8>,
    },
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

#[derive(Debug)]
struct Device {
    address: u8,
    registers: [u8; 256],
    fail_reads: bool,
    fail_writes: bool,
    transactions: Vec<I2cTransaction>,
}

/// Mock I2C bus with a single device on it.
///
/// Clones share the same device, so a test can keep a handle after moving
/// the bus into the driver.
#[derive(Debug, Clone)]
pub struct MockI2c {
    device: Rc<RefCell<Device>>,
}

impl MockI2c {
    pub fn new(address: u8) -> Self {
        Self {
            device: Rc::new(RefCell::new(Device {
                address,
                registers: [0u8; 256],
                fail_reads: false,
                fail_writes: false,
                transactions: Vec::new(),
            })),
        }
    }

    /// Device at the default address with the given shift bit and distance bytes.
    pub fn with_distance(shift_bits: u8, high: u8, low: u8) -> Self {
        let i2c = Self::new(gp2y0e02b::DEFAULT_ADDRESS);
        i2c.set_register(0x35, shift_bits);
        i2c.set_distance(high, low);
        i2c
    }

    pub fn set_register(&self, register: u8, value: u8) {
        self.device.borrow_mut().registers[register as usize] = value;
    }

    pub fn register(&self, register: u8) -> u8 {
        self.device.borrow().registers[register as usize]
    }

    pub fn set_distance(&self, high: u8, low: u8) {
        self.set_register(0x5E, high);
        self.set_register(0x5F, low);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.device.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.device.borrow_mut().fail_writes = fail;
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.device.borrow().transactions.clone()
    }

    pub fn clear_transactions(&self) {
        self.device.borrow_mut().transactions.clear();
    }
}

impl Write for MockI2c {
    type Error = Nack;

    fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Nack> {
        let mut device = self.device.borrow_mut();
        device.transactions.push(I2cTransaction::Write {
            addr,
            data: bytes.to_vec(),
        });
        if addr != device.address || device.fail_writes {
            return Err(Nack);
        }
        if let [register, values @ ..] = bytes {
            for (i, value) in values.iter().enumerate() {
                device.registers[(*register as usize + i) % 256] = *value;
            }
        }
        Ok(())
    }
}

impl WriteRead for MockI2c {
    type Error = Nack;

    fn write_read(&mut self, addr: u8, bytes: &[u8], buffer: &mut [u8]) -> Result<(), Nack> {
        let mut device = self.device.borrow_mut();
        device.transactions.push(I2cTransaction::WriteRead {
            addr,
            write_data: bytes.to_vec(),
            read_len: buffer.len(),
        });
        if addr != device.address || device.fail_reads {
            return Err(Nack);
        }
        let start = bytes.first().copied().unwrap_or(0) as usize;
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = device.registers[(start + i) % 256];
        }
        Ok(())
    }
}
