use log::debug;

use super::{config::TimeoutCounter, constant::*, Sdmmc};

/// Data transfer type, as encoded in TRANSFER_MODE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    Single,
    Infinite,
    Multiple,
    StopMultiple,
}

impl TransferType {
    pub const fn bits(self) -> u16 {
        match self {
            TransferType::Single => 0x0000,
            TransferType::Infinite => SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT,
            TransferType::Multiple | TransferType::StopMultiple => {
                SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT | SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u16)]
pub enum AutoCommand {
    #[default]
    Disabled = 0x0,
    /// Issue CMD12 after the last block of a multi-block transfer
    Cmd12 = 0x1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
    Write,
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferMode {
    pub block_size: u16,
    pub block_count: u16,
    pub kind: TransferType,
    pub auto_cmd: AutoCommand,
}

impl TransferMode {
    pub const fn single(block_size: u16) -> Self {
        Self {
            block_size,
            block_count: 1,
            kind: TransferType::Single,
            auto_cmd: AutoCommand::Disabled,
        }
    }

    pub const fn multiple(block_size: u16, block_count: u16) -> Self {
        Self {
            block_size,
            block_count,
            kind: TransferType::Multiple,
            auto_cmd: AutoCommand::Cmd12,
        }
    }
}

impl<C> Sdmmc<C> {
    /// Program block size, block count, transfer type and auto CMD12.
    ///
    /// Direction and data line timeout are left alone.
    pub fn set_data_transfer_mode(&mut self, mode: &TransferMode) {
        debug!("Set transfer mode {:?}", mode);

        self.write_reg16(SDMMC_BLOCK_SIZE, mode.block_size);
        self.write_reg16(SDMMC_BLOCK_COUNT, mode.block_count);

        let trns = self.read_reg16(SDMMC_TRANSFER_MODE);
        self.write_reg16(
            SDMMC_TRANSFER_MODE,
            (trns & !SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT) | mode.kind.bits(),
        );

        // Block count enable is only valid for multi-block transfers
        if mode.kind == TransferType::Single {
            let trns = self.read_reg16(SDMMC_TRANSFER_MODE);
            self.write_reg16(SDMMC_TRANSFER_MODE, trns & !SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN);
        }

        self.modify_reg16(
            SDMMC_TRANSFER_MODE,
            SDMMC_TRANSFER_MODE_ACMD_EN_MSK,
            (mode.auto_cmd as u16) << SDMMC_TRANSFER_MODE_ACMD_EN_POS,
        );
    }

    pub fn set_transfer_direction(&mut self, direction: TransferDirection) {
        let bits = match direction {
            TransferDirection::Write => 0,
            TransferDirection::Read => SDMMC_TRANSFER_MODE_TX_DIR_SELECT,
        };
        self.modify_reg16(SDMMC_TRANSFER_MODE, SDMMC_TRANSFER_MODE_TX_DIR_SELECT, bits);
    }

    pub fn set_data_line_timeout(&mut self, timeout: TimeoutCounter) {
        self.modify_reg8(
            SDMMC_TIMEOUT_CTRL,
            SDMMC_TIMEOUT_CTRL_DAT_TIMEOUT_CNT_VAL_MSK,
            timeout.bits(),
        );
    }

    /// Read one word from the buffer data port.
    pub fn read_fifo(&mut self) -> u32 {
        self.read_reg(SDMMC_DATA_BUFFER)
    }

    /// Write one word to the buffer data port.
    pub fn write_fifo(&mut self, data: u32) {
        self.write_reg(SDMMC_DATA_BUFFER, data);
    }

    // ===== Block gap control =====

    pub fn stop_at_block_gap(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(
            SDMMC_BLOCK_GAP_CTRL,
            (ctrl & !SDMMC_BLOCK_GAP_CTRL_CONTINUE_REQ) | SDMMC_BLOCK_GAP_CTRL_STOP_AT_BLOCK_GAP,
        );
    }

    /// Resume a transfer stopped at a block gap.
    pub fn continue_request(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(
            SDMMC_BLOCK_GAP_CTRL,
            (ctrl & !SDMMC_BLOCK_GAP_CTRL_STOP_AT_BLOCK_GAP) | SDMMC_BLOCK_GAP_CTRL_CONTINUE_REQ,
        );
    }

    pub fn enable_interrupt_at_block_gap(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(SDMMC_BLOCK_GAP_CTRL, ctrl | SDMMC_BLOCK_GAP_CTRL_INT_AT_BLOCK_GAP);
    }

    pub fn disable_interrupt_at_block_gap(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(SDMMC_BLOCK_GAP_CTRL, ctrl & !SDMMC_BLOCK_GAP_CTRL_INT_AT_BLOCK_GAP);
    }

    pub fn enable_read_wait(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(SDMMC_BLOCK_GAP_CTRL, ctrl | SDMMC_BLOCK_GAP_CTRL_READ_WAIT_CTRL);
    }

    pub fn disable_read_wait(&mut self) {
        let ctrl = self.read_reg8(SDMMC_BLOCK_GAP_CTRL);
        self.write_reg8(SDMMC_BLOCK_GAP_CTRL, ctrl & !SDMMC_BLOCK_GAP_CTRL_READ_WAIT_CTRL);
    }
}
