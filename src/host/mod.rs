mod cmd;
mod config;
mod event;
mod regs;
mod transfer;

pub mod constant;

use core::fmt::Display;

use bitflags::bitflags;
use constant::*;
use log::debug;

use crate::control::{NoControl, PeripheralControl};
use crate::err::SdmmcError;

pub use cmd::{CommandType, R2Response, ResponseRegister, ResponseType, SdmmcCommand};
pub use config::{
    BusVoltage, BusWidth, CardDetectSource, ClockDivider, ResetMode, SdmmcConfig, TimeoutCounter,
};
pub use event::{AcmdErrors, Event, EventKind, Events, WakeupEvents};
pub use transfer::{AutoCommand, TransferDirection, TransferMode, TransferType};

bitflags! {
    /// PRESENT_STATE register.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct PresentState: u32 {
        const COMMAND_INHIBIT_CMD     = 1 << 0;
        const COMMAND_INHIBIT_DAT     = 1 << 1;
        const DAT_LINE_ACTIVE         = 1 << 2;
        const WRITE_TRANSFER_ACTIVE   = 1 << 8;
        const READ_TRANSFER_ACTIVE    = 1 << 9;
        const BUFFER_WRITE_ENABLE     = 1 << 10;
        const BUFFER_READ_ENABLE      = 1 << 11;
        const CARD_INSERTED           = 1 << 16;
        const CARD_STATE_STABLE       = 1 << 17;
        const CARD_DETECT_PIN_LEVEL   = 1 << 18;
        const WRITE_PROTECT_PIN_LEVEL = 1 << 19;
        const DAT0_LEVEL              = 1 << 20;
        const DAT1_LEVEL              = 1 << 21;
        const DAT2_LEVEL              = 1 << 22;
        const DAT3_LEVEL              = 1 << 23;
        const CMD_LINE_LEVEL          = 1 << 24;

        const DAT_LINES_LEVEL = Self::DAT0_LEVEL.bits()
            | Self::DAT1_LEVEL.bits()
            | Self::DAT2_LEVEL.bits()
            | Self::DAT3_LEVEL.bits();
    }
}

/// Handle to one SDMMC register block.
///
/// The handle holds nothing but the block's base address and the clock/reset
/// hooks. Operations that change registers take `&mut self`; a caller sharing
/// the peripheral between execution contexts wraps it in
/// [`SharedSdmmc`](crate::SharedSdmmc).
#[derive(Debug)]
pub struct Sdmmc<C = NoControl> {
    base_addr: usize,
    control: C,
}

impl<C> Display for Sdmmc<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SDMMC Controller {{ base_addr: {:#x} }}", self.base_addr)
    }
}

impl Sdmmc<NoControl> {
    /// # Safety
    ///
    /// `base_addr` must point at a mapped SDMMC register block (or memory of
    /// at least [`SDMMC_REGISTER_BLOCK_SIZE`] bytes) that stays valid for the
    /// lifetime of the handle and is not accessed through another handle.
    pub unsafe fn new(base_addr: usize) -> Self {
        unsafe { Self::with_control(base_addr, NoControl) }
    }
}

impl<C: PeripheralControl> Sdmmc<C> {
    /// # Safety
    ///
    /// Same contract as [`Sdmmc::new`].
    pub unsafe fn with_control(base_addr: usize, control: C) -> Self {
        sdmmc_assert!("Sdmmc::new: Invalid module pointer", base_addr != 0);
        sdmmc_assert!("Sdmmc::new: Misaligned module pointer", base_addr & 0x3 == 0);

        Self { base_addr, control }
    }

    /// De-assert the peripheral reset. The peripheral still needs [`init`](Self::init).
    pub fn enable(&mut self) {
        self.control.ungate_clock();
        self.control.deassert_reset();
    }

    /// Assert the peripheral reset and stop its clock.
    pub fn disable(&mut self) {
        self.control.assert_reset();
        self.control.gate_clock();
    }

    /// Enable the peripheral and program the SD clock divider and bus width.
    ///
    /// Nothing observable can fail at this point; the result is always `Ok`.
    pub fn init(&mut self, config: &SdmmcConfig) -> Result<(), SdmmcError> {
        debug!("Init {} with {:?}", self, config);

        self.enable();

        self.modify_reg16(
            SDMMC_CLOCK_CTRL,
            SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_MSK,
            (config.clock_divider.bits() as u16) << SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_POS,
        );

        self.set_data_transfer_width(config.bus_width);

        Ok(())
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Give up the handle, returning the base address and clock/reset hooks.
    pub fn release(self) -> (usize, C) {
        (self.base_addr, self.control)
    }
}

impl<C> Sdmmc<C> {
    pub fn base_addr(&self) -> usize {
        self.base_addr
    }

    // ===== Power =====

    /// Whether SD bus power is switched on.
    pub fn get_power_status(&self) -> bool {
        self.read_reg8(SDMMC_POWER_CTRL) & SDMMC_POWER_CTRL_SD_BUS_POWER != 0
    }

    pub fn bus_power_on(&mut self) {
        let pwr = self.read_reg8(SDMMC_POWER_CTRL);
        self.write_reg8(SDMMC_POWER_CTRL, pwr | SDMMC_POWER_CTRL_SD_BUS_POWER);
    }

    pub fn bus_power_off(&mut self) {
        let pwr = self.read_reg8(SDMMC_POWER_CTRL);
        self.write_reg8(SDMMC_POWER_CTRL, pwr & !SDMMC_POWER_CTRL_SD_BUS_POWER);
    }

    pub fn set_bus_voltage(&mut self, voltage: BusVoltage) {
        self.modify_reg8(
            SDMMC_POWER_CTRL,
            SDMMC_POWER_CTRL_SD_BUS_VOLTAGE_SEL_MSK,
            (voltage as u8) << SDMMC_POWER_CTRL_SD_BUS_VOLTAGE_SEL_POS,
        );
    }

    // ===== Clock =====

    pub fn enable_internal_clock(&mut self) {
        let clk = self.read_reg16(SDMMC_CLOCK_CTRL);
        self.write_reg16(SDMMC_CLOCK_CTRL, clk | SDMMC_CLOCK_CTRL_INTERNAL_CLOCK_EN);
    }

    pub fn disable_internal_clock(&mut self) {
        let clk = self.read_reg16(SDMMC_CLOCK_CTRL);
        self.write_reg16(SDMMC_CLOCK_CTRL, clk & !SDMMC_CLOCK_CTRL_INTERNAL_CLOCK_EN);
    }

    pub fn is_internal_clock_stable(&self) -> bool {
        self.read_reg16(SDMMC_CLOCK_CTRL) & SDMMC_CLOCK_CTRL_INTERNAL_CLOCK_STABLE != 0
    }

    /// Start driving SDCLK to the card.
    pub fn sd_clock_enable(&mut self) {
        let clk = self.read_reg16(SDMMC_CLOCK_CTRL);
        self.write_reg16(SDMMC_CLOCK_CTRL, clk | SDMMC_CLOCK_CTRL_SDCLOCK_EN);
    }

    pub fn sd_clock_disable(&mut self) {
        let clk = self.read_reg16(SDMMC_CLOCK_CTRL);
        self.write_reg16(SDMMC_CLOCK_CTRL, clk & !SDMMC_CLOCK_CTRL_SDCLOCK_EN);
    }

    /// Currently programmed SD clock divider.
    pub fn clock_divider(&self) -> Result<ClockDivider, SdmmcError> {
        let clk = self.read_reg16(SDMMC_CLOCK_CTRL);
        let sel = (clk & SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_MSK) >> SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_POS;
        ClockDivider::try_from(sel as u8)
    }

    // ===== Host control =====

    pub fn set_data_transfer_width(&mut self, width: BusWidth) {
        self.modify_reg8(SDMMC_HOST_CTRL, SDMMC_HOST_CTRL_BUS_WIDTH_MSK, width.bits());
    }

    /// Currently programmed data bus width.
    pub fn bus_width(&self) -> Result<BusWidth, SdmmcError> {
        BusWidth::try_from(self.read_reg8(SDMMC_HOST_CTRL))
    }

    pub fn enable_high_speed(&mut self) {
        let ctrl = self.read_reg8(SDMMC_HOST_CTRL);
        self.write_reg8(SDMMC_HOST_CTRL, ctrl | SDMMC_HOST_CTRL_HIGH_SPEED_EN);
    }

    pub fn disable_high_speed(&mut self) {
        let ctrl = self.read_reg8(SDMMC_HOST_CTRL);
        self.write_reg8(SDMMC_HOST_CTRL, ctrl & !SDMMC_HOST_CTRL_HIGH_SPEED_EN);
    }

    /// Drive the card activity LED.
    pub fn set_led(&mut self, on: bool) {
        let ctrl = self.read_reg8(SDMMC_HOST_CTRL);
        let ctrl = if on {
            ctrl | SDMMC_HOST_CTRL_LED_CTRL
        } else {
            ctrl & !SDMMC_HOST_CTRL_LED_CTRL
        };
        self.write_reg8(SDMMC_HOST_CTRL, ctrl);
    }

    pub fn set_card_detection_source(&mut self, source: CardDetectSource) {
        let bits = match source {
            CardDetectSource::Pin => 0,
            CardDetectSource::Software { inserted: false } => SDMMC_HOST_CTRL_CARD_DET_SIGNAL_DETECT,
            CardDetectSource::Software { inserted: true } => {
                SDMMC_HOST_CTRL_CARD_DET_SIGNAL_DETECT | SDMMC_HOST_CTRL_CARD_DETECT_TEST_LEVEL
            }
        };
        self.modify_reg8(SDMMC_HOST_CTRL, SDMMC_HOST_CTRL_CARD_DETECT_MSK, bits);
    }

    // ===== Software reset =====

    /// Request a software reset. Completion is polled with [`sw_reset_status`](Self::sw_reset_status).
    pub fn sw_reset(&mut self, mode: ResetMode) {
        debug!("SDMMC software reset {:?}", mode);
        let rst = self.read_reg8(SDMMC_SW_RESET);
        self.write_reg8(SDMMC_SW_RESET, rst | mode as u8);
    }

    /// Reset bits still pending in SW_RESET.
    pub fn sw_reset_status(&self) -> u8 {
        self.read_reg8(SDMMC_SW_RESET)
    }

    // ===== Present state =====

    pub fn present_state(&self) -> PresentState {
        PresentState::from_bits_retain(self.read_reg(SDMMC_PRESENT_STATE))
    }

    pub fn is_command_line_busy(&self) -> bool {
        self.present_state().contains(PresentState::COMMAND_INHIBIT_CMD)
    }

    pub fn is_data_line_busy(&self) -> bool {
        self.present_state().contains(PresentState::COMMAND_INHIBIT_DAT)
    }

    /// DAT[3:0] all read high, i.e. the card has released the bus.
    pub fn is_all_data_lines_high(&self) -> bool {
        self.present_state().contains(PresentState::DAT_LINES_LEVEL)
    }

    pub fn is_card_inserted(&self) -> bool {
        self.present_state().contains(PresentState::CARD_INSERTED)
    }

    pub fn is_write_protected(&self) -> bool {
        // Pin reads low when the write-protect tab is engaged
        !self.present_state().contains(PresentState::WRITE_PROTECT_PIN_LEVEL)
    }
}
