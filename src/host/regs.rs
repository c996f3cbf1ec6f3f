use core::ptr::{read_volatile, write_volatile};

use super::Sdmmc;

impl<C> Sdmmc<C> {
    // Read a 32-bit register
    pub(crate) fn read_reg(&self, offset: u32) -> u32 {
        unsafe { read_volatile((self.base_addr + offset as usize) as *const u32) }
    }

    // Read a 16-bit register
    pub(crate) fn read_reg16(&self, offset: u32) -> u16 {
        unsafe { read_volatile((self.base_addr + offset as usize) as *const u16) }
    }

    // Read an 8-bit register
    pub(crate) fn read_reg8(&self, offset: u32) -> u8 {
        unsafe { read_volatile((self.base_addr + offset as usize) as *const u8) }
    }

    // Write a 32-bit register
    pub(crate) fn write_reg(&self, offset: u32, value: u32) {
        unsafe { write_volatile((self.base_addr + offset as usize) as *mut u32, value) }
    }

    // Write a 16-bit register
    pub(crate) fn write_reg16(&self, offset: u32, value: u16) {
        unsafe { write_volatile((self.base_addr + offset as usize) as *mut u16, value) }
    }

    // Write an 8-bit register
    pub(crate) fn write_reg8(&self, offset: u32, value: u8) {
        unsafe { write_volatile((self.base_addr + offset as usize) as *mut u8, value) }
    }

    // Replace the bits under `mask` in a 16-bit register
    pub(crate) fn modify_reg16(&self, offset: u32, mask: u16, value: u16) {
        let reg = self.read_reg16(offset);
        self.write_reg16(offset, (reg & !mask) | (value & mask));
    }

    // Replace the bits under `mask` in an 8-bit register
    pub(crate) fn modify_reg8(&self, offset: u32, mask: u8, value: u8) {
        let reg = self.read_reg8(offset);
        self.write_reg8(offset, (reg & !mask) | (value & mask));
    }
}
