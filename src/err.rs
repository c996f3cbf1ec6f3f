// ===== Types and Structures =====

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdmmcError {
    InvalidEvent(u32),
    InvalidClockDivider(u16),
    InvalidBusWidth(u8),
    InvalidCommand(u16),
    InvalidTimeout(u8),
}

impl fmt::Display for SdmmcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdmmcError::InvalidEvent(code) => write!(f, "Invalid event code: {:#x}", code),
            SdmmcError::InvalidClockDivider(sel) => write!(f, "Invalid clock divider select: {:#x}", sel),
            SdmmcError::InvalidBusWidth(bits) => write!(f, "Invalid bus width field: {:#x}", bits),
            SdmmcError::InvalidCommand(bits) => write!(f, "Reserved bits set in command: {:#06x}", bits),
            SdmmcError::InvalidTimeout(value) => write!(f, "Invalid data timeout counter: {}", value),
        }
    }
}

impl core::error::Error for SdmmcError {}
