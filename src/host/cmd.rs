use log::debug;

use crate::err::SdmmcError;

use super::{constant::*, Sdmmc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ResponseType {
    None = 0x0,
    Long136 = 0x1,
    Short48 = 0x2,
    Short48Busy = 0x3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum CommandType {
    Normal = 0x0,
    Suspend = 0x1,
    Resume = 0x2,
    Abort = 0x3,
}

/// Contents of the COMMAND register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdmmcCommand {
    pub index: u8,
    pub response: ResponseType,
    pub crc_check: bool,
    pub index_check: bool,
    pub data_present: bool,
    pub kind: CommandType,
}

impl SdmmcCommand {
    pub const fn new(index: u8, response: ResponseType) -> Self {
        Self {
            index,
            response,
            crc_check: false,
            index_check: false,
            data_present: false,
            kind: CommandType::Normal,
        }
    }

    pub const fn with_crc_check(mut self) -> Self {
        self.crc_check = true;
        self
    }

    pub const fn with_index_check(mut self) -> Self {
        self.index_check = true;
        self
    }

    pub const fn with_data(mut self) -> Self {
        self.data_present = true;
        self
    }

    pub const fn with_kind(mut self, kind: CommandType) -> Self {
        self.kind = kind;
        self
    }

    /// Register encoding. Index bits beyond the 6-bit field are dropped.
    pub const fn bits(&self) -> u16 {
        let mut command = self.response as u16;

        if self.crc_check {
            command |= SDMMC_COMMAND_CMD_CRC_CHECK_EN;
        }
        if self.index_check {
            command |= SDMMC_COMMAND_CMD_IND_CHECK_EN;
        }
        if self.data_present {
            command |= SDMMC_COMMAND_DATA_PRESENT_SELECT;
        }

        command |= (self.kind as u16) << SDMMC_COMMAND_CMD_TYPE_POS;
        command |= ((self.index as u16) << SDMMC_COMMAND_CMD_IND_POS) & SDMMC_COMMAND_CMD_IND_MSK;
        command
    }
}

impl From<SdmmcCommand> for u16 {
    fn from(cmd: SdmmcCommand) -> Self {
        cmd.bits()
    }
}

impl TryFrom<u16> for SdmmcCommand {
    type Error = SdmmcError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        if bits & SDMMC_COMMAND_RESERVED_MSK != 0 {
            return Err(SdmmcError::InvalidCommand(bits));
        }

        let response = match bits & SDMMC_COMMAND_RESP_TYPE_SELECT_MSK {
            0x0 => ResponseType::None,
            0x1 => ResponseType::Long136,
            0x2 => ResponseType::Short48,
            _ => ResponseType::Short48Busy,
        };
        let kind = match (bits & SDMMC_COMMAND_CMD_TYPE_MSK) >> SDMMC_COMMAND_CMD_TYPE_POS {
            0x0 => CommandType::Normal,
            0x1 => CommandType::Suspend,
            0x2 => CommandType::Resume,
            _ => CommandType::Abort,
        };

        Ok(Self {
            index: ((bits & SDMMC_COMMAND_CMD_IND_MSK) >> SDMMC_COMMAND_CMD_IND_POS) as u8,
            response,
            crc_check: bits & SDMMC_COMMAND_CMD_CRC_CHECK_EN != 0,
            index_check: bits & SDMMC_COMMAND_CMD_IND_CHECK_EN != 0,
            data_present: bits & SDMMC_COMMAND_DATA_PRESENT_SELECT != 0,
            kind,
        })
    }
}

/// 136-bit response to CMD2/CMD9/CMD10 (CID or CSD), CRC stripped.
///
/// Field names give the byte offset of each word within the 128-bit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct R2Response {
    pub response_0: u32,
    pub response_2: u32,
    pub response_4: u32,
    pub response_6: u32,
}

impl R2Response {
    pub const fn as_words(&self) -> [u32; 4] {
        [self.response_0, self.response_2, self.response_4, self.response_6]
    }

    /// The response as one 128-bit value, bits [127:8] of the card register.
    pub const fn as_u128(&self) -> u128 {
        (self.response_0 as u128)
            | (self.response_2 as u128) << 32
            | (self.response_4 as u128) << 64
            | (self.response_6 as u128) << 96
    }
}

/// One of the four RESPONSE registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResponseRegister {
    Response0 = 0,
    Response2 = 1,
    Response4 = 2,
    Response6 = 3,
}

impl<C> Sdmmc<C> {
    /// Write the argument and issue the command.
    ///
    /// This only queues the command: completion and response errors show up
    /// later as events, so the result is always `Ok`.
    pub fn send_command(&mut self, cmd: &SdmmcCommand, arg: u32) -> Result<(), SdmmcError> {
        sdmmc_assert!("Sdmmc::send_command: Invalid command index", cmd.index < 64);

        let command = cmd.bits();
        debug!("Sending command: CMD{} arg {:#x} ({:#06x})", cmd.index, arg, command);

        self.write_reg(SDMMC_ARGUMENT1, arg);
        self.write_reg16(SDMMC_COMMAND, command);

        Ok(())
    }

    pub fn get_r2_response(&self) -> R2Response {
        let mut response = R2Response::default();
        self.read_r2_response(&mut response);
        response
    }

    /// Copy the four RESPONSE registers into `response`, in register order.
    pub fn read_r2_response(&self, response: &mut R2Response) {
        response.response_0 = self.read_reg(SDMMC_RESPONSE);
        response.response_2 = self.read_reg(SDMMC_RESPONSE + 4);
        response.response_4 = self.read_reg(SDMMC_RESPONSE + 8);
        response.response_6 = self.read_reg(SDMMC_RESPONSE + 12);
    }

    /// Read a single response register. Short responses land in `Response0`.
    pub fn get_response(&self, register: ResponseRegister) -> u32 {
        self.read_reg(SDMMC_RESPONSE + 4 * register as u32)
    }

    /// Response to the last auto CMD12.
    pub fn get_auto_command_response(&self) -> u32 {
        self.get_response(ResponseRegister::Response6)
    }
}
