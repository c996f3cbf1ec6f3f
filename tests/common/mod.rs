#![allow(dead_code)]

use std::cell::RefCell;
use std::ptr::{read_volatile, write_volatile};
use std::rc::Rc;

use xmc_sdmmc::host::constant::SDMMC_REGISTER_BLOCK_SIZE;
use xmc_sdmmc::{PeripheralControl, Sdmmc};

const WORDS: usize = SDMMC_REGISTER_BLOCK_SIZE / 4;

/// Plain memory standing in for the register block. Status bits do not
/// clear on write-one like the real hardware.
pub struct FakeRegs {
    ptr: *mut u32,
}

impl FakeRegs {
    pub fn new() -> Self {
        let block = Box::new([0u32; WORDS]);
        Self {
            ptr: Box::into_raw(block) as *mut u32,
        }
    }

    pub fn base(&self) -> usize {
        self.ptr as usize
    }

    pub fn host(&self) -> Sdmmc {
        unsafe { Sdmmc::new(self.base()) }
    }

    pub fn host_with<C: PeripheralControl>(&self, control: C) -> Sdmmc<C> {
        unsafe { Sdmmc::with_control(self.base(), control) }
    }

    fn at(&self, offset: u32) -> *mut u8 {
        assert!((offset as usize) < SDMMC_REGISTER_BLOCK_SIZE);
        unsafe { (self.ptr as *mut u8).add(offset as usize) }
    }

    pub fn read8(&self, offset: u32) -> u8 {
        unsafe { read_volatile(self.at(offset)) }
    }

    pub fn read16(&self, offset: u32) -> u16 {
        unsafe { read_volatile(self.at(offset) as *const u16) }
    }

    pub fn read32(&self, offset: u32) -> u32 {
        unsafe { read_volatile(self.at(offset) as *const u32) }
    }

    pub fn write8(&self, offset: u32, value: u8) {
        unsafe { write_volatile(self.at(offset), value) }
    }

    pub fn write16(&self, offset: u32, value: u16) {
        unsafe { write_volatile(self.at(offset) as *mut u16, value) }
    }

    pub fn write32(&self, offset: u32, value: u32) {
        unsafe { write_volatile(self.at(offset) as *mut u32, value) }
    }
}

impl Drop for FakeRegs {
    fn drop(&mut self) {
        unsafe { drop(Box::from_raw(self.ptr as *mut [u32; WORDS])) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScuCall {
    UngateClock,
    GateClock,
    AssertReset,
    DeassertReset,
}

/// Records clock and reset requests in call order.
#[derive(Clone, Default)]
pub struct RecordingScu {
    pub calls: Rc<RefCell<Vec<ScuCall>>>,
}

impl RecordingScu {
    pub fn calls(&self) -> Vec<ScuCall> {
        self.calls.borrow().clone()
    }
}

impl PeripheralControl for RecordingScu {
    fn ungate_clock(&mut self) {
        self.calls.borrow_mut().push(ScuCall::UngateClock);
    }

    fn gate_clock(&mut self) {
        self.calls.borrow_mut().push(ScuCall::GateClock);
    }

    fn assert_reset(&mut self) {
        self.calls.borrow_mut().push(ScuCall::AssertReset);
    }

    fn deassert_reset(&mut self) {
        self.calls.borrow_mut().push(ScuCall::DeassertReset);
    }
}

/// Models the SCU's gate and reset lines.
#[derive(Debug, Default)]
pub struct ScuState {
    pub clock_gated: bool,
    pub in_reset: bool,
}

impl PeripheralControl for ScuState {
    fn ungate_clock(&mut self) {
        self.clock_gated = false;
    }

    fn gate_clock(&mut self) {
        self.clock_gated = true;
    }

    fn assert_reset(&mut self) {
        self.in_reset = true;
    }

    fn deassert_reset(&mut self) {
        self.in_reset = false;
    }
}
