use crate::err::SdmmcError;

use super::constant::*;

/// SD clock divisor applied to the base clock (SDCLK_FREQ_SEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockDivider {
    Div1 = 0x00,
    Div2 = 0x01,
    Div4 = 0x02,
    Div8 = 0x04,
    Div16 = 0x08,
    Div32 = 0x10,
    Div64 = 0x20,
    Div128 = 0x40,
    Div256 = 0x80,
}

impl ClockDivider {
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Division ratio relative to the base clock.
    pub const fn ratio(self) -> u16 {
        match self {
            ClockDivider::Div1 => 1,
            other => (other as u16) << 1,
        }
    }
}

impl TryFrom<u8> for ClockDivider {
    type Error = SdmmcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(ClockDivider::Div1),
            0x01 => Ok(ClockDivider::Div2),
            0x02 => Ok(ClockDivider::Div4),
            0x04 => Ok(ClockDivider::Div8),
            0x08 => Ok(ClockDivider::Div16),
            0x10 => Ok(ClockDivider::Div32),
            0x20 => Ok(ClockDivider::Div64),
            0x40 => Ok(ClockDivider::Div128),
            0x80 => Ok(ClockDivider::Div256),
            _ => Err(SdmmcError::InvalidClockDivider(value as u16)),
        }
    }
}

/// Number of data lines driven by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BusWidth {
    OneBit = 0x00,
    FourBit = SDMMC_HOST_CTRL_DATA_TX_WIDTH,
    EightBit = SDMMC_HOST_CTRL_SD_8BIT_MODE,
}

impl BusWidth {
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn lines(self) -> u8 {
        match self {
            BusWidth::OneBit => 1,
            BusWidth::FourBit => 4,
            BusWidth::EightBit => 8,
        }
    }
}

impl TryFrom<u8> for BusWidth {
    type Error = SdmmcError;

    /// Decodes the HOST_CTRL width field. Both width bits set is not a valid
    /// configuration.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value & SDMMC_HOST_CTRL_BUS_WIDTH_MSK {
            0x00 => Ok(BusWidth::OneBit),
            SDMMC_HOST_CTRL_DATA_TX_WIDTH => Ok(BusWidth::FourBit),
            SDMMC_HOST_CTRL_SD_8BIT_MODE => Ok(BusWidth::EightBit),
            other => Err(SdmmcError::InvalidBusWidth(other)),
        }
    }
}

/// SD bus supply voltage. The XMC4500 only drives 3.3V.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BusVoltage {
    V3_3 = 0x07,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDetectSource {
    /// SDCD pin
    Pin,
    /// Card detect test level, driven by software
    Software { inserted: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ResetMode {
    All = SDMMC_SW_RESET_ALL,
    CommandLine = SDMMC_SW_RST_CMD_LINE,
    DataLine = SDMMC_SW_RST_DAT_LINE,
}

/// Data line timeout, TMCLK * 2^(13 + n) with n in 0..=14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutCounter(u8);

impl TimeoutCounter {
    pub const MIN: TimeoutCounter = TimeoutCounter(0);
    pub const MAX: TimeoutCounter = TimeoutCounter(SDMMC_TIMEOUT_CTRL_MAX);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Timeout length in TMCLK cycles.
    pub const fn cycles(self) -> u32 {
        1 << (13 + self.0 as u32)
    }
}

impl TryFrom<u8> for TimeoutCounter {
    type Error = SdmmcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > SDMMC_TIMEOUT_CTRL_MAX {
            return Err(SdmmcError::InvalidTimeout(value));
        }
        Ok(TimeoutCounter(value))
    }
}

/// Bus parameters applied by [`Sdmmc::init`](super::Sdmmc::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdmmcConfig {
    pub clock_divider: ClockDivider,
    pub bus_width: BusWidth,
}

impl Default for SdmmcConfig {
    // Identification mode: slowest clock on a single data line
    fn default() -> Self {
        Self {
            clock_divider: ClockDivider::Div256,
            bus_width: BusWidth::OneBit,
        }
    }
}
