//! Interrupt events.
//!
//! The controller reports 16 normal and 16 error conditions in two separate
//! register pairs. A 32-bit event mask carries both: the low half addresses
//! the `*_NORM` registers and the high half the `*_ERR` registers.

use bitflags::bitflags;
use log::trace;

use crate::err::SdmmcError;

use super::{constant::*, Sdmmc};

bitflags! {
    /// Set of events, as accepted by the enable/disable/clear operations.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Events: u32 {
        const CMD_COMPLETE       = 1 << 0;
        const TX_COMPLETE        = 1 << 1;
        const BLOCK_GAP_EVENT    = 1 << 2;
        const BUFFER_WRITE_READY = 1 << 4;
        const BUFFER_READ_READY  = 1 << 5;
        const CARD_INS           = 1 << 6;
        const CARD_REMOVAL       = 1 << 7;
        const CARD_INT           = 1 << 8;
        /// Summary bit, set while any error event is latched
        const CARD_ERR           = 1 << 15;

        const CMD_TIMEOUT_ERR    = 1 << 16;
        const CMD_CRC_ERR        = 1 << 17;
        const CMD_END_BIT_ERR    = 1 << 18;
        const CMD_IND_ERR        = 1 << 19;
        const DATA_TIMEOUT_ERR   = 1 << 20;
        const DATA_CRC_ERR       = 1 << 21;
        const DATA_END_BIT_ERR   = 1 << 22;
        const CURRENT_LIMIT_ERR  = 1 << 23;
        const ACMD_ERR           = 1 << 24;
        const TARGET_RESP_ERR    = 1 << 28;

        const CMD_ERRORS = Self::CMD_TIMEOUT_ERR.bits()
            | Self::CMD_CRC_ERR.bits()
            | Self::CMD_END_BIT_ERR.bits()
            | Self::CMD_IND_ERR.bits();
        const DATA_ERRORS = Self::DATA_TIMEOUT_ERR.bits()
            | Self::DATA_CRC_ERR.bits()
            | Self::DATA_END_BIT_ERR.bits();
    }
}

impl Events {
    pub const NORMAL_MASK: Events = Events::from_bits_retain(0x0000_FFFF);
    pub const ERROR_MASK: Events = Events::from_bits_retain(0xFFFF_0000);

    /// Bits for the `*_NORM` registers.
    pub const fn normal(self) -> u16 {
        self.bits() as u16
    }

    /// Bits for the `*_ERR` registers.
    pub const fn error(self) -> u16 {
        (self.bits() >> 16) as u16
    }

    pub const fn from_halves(normal: u16, error: u16) -> Events {
        Events::from_bits_retain(normal as u32 | (error as u32) << 16)
    }
}

/// Which register pair an event lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Normal,
    Error,
}

/// A single event, queried with [`Sdmmc::get_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    CmdComplete,
    TxComplete,
    BlockGapEvent,
    BufferWriteReady,
    BufferReadReady,
    CardInsertion,
    CardRemoval,
    CardInterrupt,
    CmdTimeoutErr,
    CmdCrcErr,
    CmdEndBitErr,
    CmdIndexErr,
    DataTimeoutErr,
    DataCrcErr,
    DataEndBitErr,
    CurrentLimitErr,
    AcmdErr,
    TargetRespErr,
}

impl Event {
    pub const ALL: [Event; 18] = [
        Event::CmdComplete,
        Event::TxComplete,
        Event::BlockGapEvent,
        Event::BufferWriteReady,
        Event::BufferReadReady,
        Event::CardInsertion,
        Event::CardRemoval,
        Event::CardInterrupt,
        Event::CmdTimeoutErr,
        Event::CmdCrcErr,
        Event::CmdEndBitErr,
        Event::CmdIndexErr,
        Event::DataTimeoutErr,
        Event::DataCrcErr,
        Event::DataEndBitErr,
        Event::CurrentLimitErr,
        Event::AcmdErr,
        Event::TargetRespErr,
    ];

    pub const fn kind(self) -> EventKind {
        match self {
            Event::CmdComplete
            | Event::TxComplete
            | Event::BlockGapEvent
            | Event::BufferWriteReady
            | Event::BufferReadReady
            | Event::CardInsertion
            | Event::CardRemoval
            | Event::CardInterrupt => EventKind::Normal,
            _ => EventKind::Error,
        }
    }

    /// Bit position inside the 16-bit register selected by [`kind`](Self::kind).
    pub const fn bit_index(self) -> u8 {
        match self {
            Event::CmdComplete => 0,
            Event::TxComplete => 1,
            Event::BlockGapEvent => 2,
            Event::BufferWriteReady => 4,
            Event::BufferReadReady => 5,
            Event::CardInsertion => 6,
            Event::CardRemoval => 7,
            Event::CardInterrupt => 8,
            Event::CmdTimeoutErr => 0,
            Event::CmdCrcErr => 1,
            Event::CmdEndBitErr => 2,
            Event::CmdIndexErr => 3,
            Event::DataTimeoutErr => 4,
            Event::DataCrcErr => 5,
            Event::DataEndBitErr => 6,
            Event::CurrentLimitErr => 7,
            Event::AcmdErr => 8,
            Event::TargetRespErr => 12,
        }
    }

    /// Position in the combined 32-bit event code.
    pub const fn code(self) -> u32 {
        let bit = 1u32 << self.bit_index();
        match self.kind() {
            EventKind::Normal => bit,
            EventKind::Error => bit << 16,
        }
    }

    pub const fn mask(self) -> Events {
        Events::from_bits_retain(self.code())
    }
}

impl From<Event> for Events {
    fn from(event: Event) -> Self {
        event.mask()
    }
}

impl TryFrom<u32> for Event {
    type Error = SdmmcError;

    fn try_from(code: u32) -> Result<Self, SdmmcError> {
        Event::ALL
            .into_iter()
            .find(|event| event.code() == code)
            .ok_or(SdmmcError::InvalidEvent(code))
    }
}

bitflags! {
    /// WAKEUP_CTRL register.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct WakeupEvents: u8 {
        const CARD_INT = 1 << 0;
        const CARD_INS = 1 << 1;
        const CARD_REM = 1 << 2;
    }
}

bitflags! {
    /// ACMD_ERR_STATUS register, also the layout of its force-event register.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct AcmdErrors: u16 {
        const NOT_EXECUTED       = 1 << 0;
        const TIMEOUT            = 1 << 1;
        const CRC                = 1 << 2;
        const END_BIT            = 1 << 3;
        const INDEX              = 1 << 4;
        const CMD_NOT_ISSUED     = 1 << 7;
    }
}

impl<C> Sdmmc<C> {
    /// Let the given events latch in the status registers.
    pub fn enable_event_status(&mut self, events: Events) {
        trace!("enable event status {:?}", events);
        let norm = self.read_reg16(SDMMC_EN_INT_STATUS_NORM);
        self.write_reg16(SDMMC_EN_INT_STATUS_NORM, norm | events.normal());
        let err = self.read_reg16(SDMMC_EN_INT_STATUS_ERR);
        self.write_reg16(SDMMC_EN_INT_STATUS_ERR, err | events.error());
    }

    pub fn disable_event_status(&mut self, events: Events) {
        trace!("disable event status {:?}", events);
        let norm = self.read_reg16(SDMMC_EN_INT_STATUS_NORM);
        self.write_reg16(SDMMC_EN_INT_STATUS_NORM, norm & !events.normal());
        let err = self.read_reg16(SDMMC_EN_INT_STATUS_ERR);
        self.write_reg16(SDMMC_EN_INT_STATUS_ERR, err & !events.error());
    }

    /// Enable status latching and the interrupt signal for the given events.
    pub fn enable_event(&mut self, events: Events) {
        // A signal without status enable never fires
        self.enable_event_status(events);

        trace!("enable event signal {:?}", events);
        let norm = self.read_reg16(SDMMC_EN_INT_SIGNAL_NORM);
        self.write_reg16(SDMMC_EN_INT_SIGNAL_NORM, norm | events.normal());
        let err = self.read_reg16(SDMMC_EN_INT_SIGNAL_ERR);
        self.write_reg16(SDMMC_EN_INT_SIGNAL_ERR, err | events.error());
    }

    /// Mask the interrupt signal only. The events keep latching and can still
    /// be polled with [`get_event`](Self::get_event).
    pub fn disable_event(&mut self, events: Events) {
        trace!("disable event signal {:?}", events);
        let norm = self.read_reg16(SDMMC_EN_INT_SIGNAL_NORM);
        self.write_reg16(SDMMC_EN_INT_SIGNAL_NORM, norm & !events.normal());
        let err = self.read_reg16(SDMMC_EN_INT_SIGNAL_ERR);
        self.write_reg16(SDMMC_EN_INT_SIGNAL_ERR, err & !events.error());
    }

    /// Acknowledge latched events. Status bits are write-one-to-clear.
    ///
    /// A target response error cannot be cleared this way.
    pub fn clear_event(&mut self, events: Events) {
        sdmmc_assert!(
            "Sdmmc::clear_event: Invalid bit-field",
            !events.contains(Events::TARGET_RESP_ERR)
        );

        self.write_reg16(SDMMC_INT_STATUS_NORM, events.normal());
        self.write_reg16(SDMMC_INT_STATUS_ERR, events.error());
    }

    pub fn get_event(&self, event: Event) -> bool {
        let bit = 1u16 << event.bit_index();
        match event.kind() {
            EventKind::Normal => self.read_reg16(SDMMC_INT_STATUS_NORM) & bit != 0,
            EventKind::Error => self.read_reg16(SDMMC_INT_STATUS_ERR) & bit != 0,
        }
    }

    /// All latched events, both halves.
    pub fn events(&self) -> Events {
        Events::from_halves(
            self.read_reg16(SDMMC_INT_STATUS_NORM),
            self.read_reg16(SDMMC_INT_STATUS_ERR),
        )
    }

    /// Whether any error event is latched.
    pub fn is_any_error_event(&self) -> bool {
        self.read_reg16(SDMMC_INT_STATUS_NORM) & SDMMC_INT_STATUS_NORM_ERR_INT != 0
    }

    /// Latch error events by software, for exercising error handling.
    pub fn trigger_event(&mut self, events: Events) {
        self.write_reg16(SDMMC_FORCE_EVENT_ERR_STATUS, events.error());
    }

    pub fn trigger_acmd_error(&mut self, errors: AcmdErrors) {
        self.write_reg16(SDMMC_FORCE_EVENT_ACMD_ERR_STATUS, errors.bits());
    }

    pub fn acmd_error_status(&self) -> AcmdErrors {
        AcmdErrors::from_bits_retain(self.read_reg16(SDMMC_ACMD_ERR_STATUS))
    }

    pub fn enable_wakeup_event(&mut self, events: WakeupEvents) {
        let ctrl = self.read_reg8(SDMMC_WAKEUP_CTRL);
        self.write_reg8(SDMMC_WAKEUP_CTRL, ctrl | events.bits());
    }

    pub fn disable_wakeup_event(&mut self, events: WakeupEvents) {
        let ctrl = self.read_reg8(SDMMC_WAKEUP_CTRL);
        self.write_reg8(SDMMC_WAKEUP_CTRL, ctrl & !events.bits());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_codes_match_mask_flags() {
        assert_eq!(Event::CmdComplete.mask(), Events::CMD_COMPLETE);
        assert_eq!(Event::CardInterrupt.mask(), Events::CARD_INT);
        assert_eq!(Event::CmdTimeoutErr.mask(), Events::CMD_TIMEOUT_ERR);
        assert_eq!(Event::AcmdErr.mask(), Events::ACMD_ERR);
        assert_eq!(Event::TargetRespErr.mask(), Events::TARGET_RESP_ERR);
    }

    #[test]
    fn kind_follows_the_16_bit_split() {
        for event in Event::ALL {
            let expected = if event.code() < 1 << 16 {
                EventKind::Normal
            } else {
                EventKind::Error
            };
            assert_eq!(event.kind(), expected, "{:?}", event);
        }
    }

    #[test]
    fn mask_halves() {
        let events = Events::TX_COMPLETE | Events::CARD_INS | Events::DATA_CRC_ERR;
        assert_eq!(events.normal(), 0x0042);
        assert_eq!(events.error(), 0x0020);
        assert_eq!(Events::from_halves(0x0042, 0x0020), events);
    }

    #[test]
    fn event_from_code() {
        assert_eq!(Event::try_from(1 << 20), Ok(Event::DataTimeoutErr));
        assert_eq!(Event::try_from(1 << 15), Err(SdmmcError::InvalidEvent(1 << 15)));
        assert_eq!(Event::try_from(0x3), Err(SdmmcError::InvalidEvent(0x3)));
    }
}
