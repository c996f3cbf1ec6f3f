// SDMMC register offsets
pub const SDMMC_BLOCK_SIZE: u32 = 0x04;
pub const SDMMC_BLOCK_COUNT: u32 = 0x06;
pub const SDMMC_ARGUMENT1: u32 = 0x08;
pub const SDMMC_TRANSFER_MODE: u32 = 0x0C;
pub const SDMMC_COMMAND: u32 = 0x0E;
pub const SDMMC_RESPONSE: u32 = 0x10; // 0x10-0x1F, 4 registers
pub const SDMMC_DATA_BUFFER: u32 = 0x20;
pub const SDMMC_PRESENT_STATE: u32 = 0x24;
pub const SDMMC_HOST_CTRL: u32 = 0x28;
pub const SDMMC_POWER_CTRL: u32 = 0x29;
pub const SDMMC_BLOCK_GAP_CTRL: u32 = 0x2A;
pub const SDMMC_WAKEUP_CTRL: u32 = 0x2B;
pub const SDMMC_CLOCK_CTRL: u32 = 0x2C;
pub const SDMMC_TIMEOUT_CTRL: u32 = 0x2E;
pub const SDMMC_SW_RESET: u32 = 0x2F;
pub const SDMMC_INT_STATUS_NORM: u32 = 0x30;
pub const SDMMC_INT_STATUS_ERR: u32 = 0x32;
pub const SDMMC_EN_INT_STATUS_NORM: u32 = 0x34;
pub const SDMMC_EN_INT_STATUS_ERR: u32 = 0x36;
pub const SDMMC_EN_INT_SIGNAL_NORM: u32 = 0x38;
pub const SDMMC_EN_INT_SIGNAL_ERR: u32 = 0x3A;
pub const SDMMC_ACMD_ERR_STATUS: u32 = 0x3C;
pub const SDMMC_FORCE_EVENT_ACMD_ERR_STATUS: u32 = 0x50;
pub const SDMMC_FORCE_EVENT_ERR_STATUS: u32 = 0x52;

/* End of controller registers used by this driver. */
pub const SDMMC_REGISTER_BLOCK_SIZE: usize = 0x100;

// Transfer mode register
pub const SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN: u16 = 0x0002;
pub const SDMMC_TRANSFER_MODE_ACMD_EN_POS: u16 = 2;
pub const SDMMC_TRANSFER_MODE_ACMD_EN_MSK: u16 = 0x000C;
pub const SDMMC_TRANSFER_MODE_TX_DIR_SELECT: u16 = 0x0010;
pub const SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT: u16 = 0x0020;

// Command register
pub const SDMMC_COMMAND_RESP_TYPE_SELECT_MSK: u16 = 0x0003;
pub const SDMMC_COMMAND_CMD_CRC_CHECK_EN: u16 = 0x0008;
pub const SDMMC_COMMAND_CMD_IND_CHECK_EN: u16 = 0x0010;
pub const SDMMC_COMMAND_DATA_PRESENT_SELECT: u16 = 0x0020;
pub const SDMMC_COMMAND_CMD_TYPE_POS: u16 = 6;
pub const SDMMC_COMMAND_CMD_TYPE_MSK: u16 = 0x00C0;
pub const SDMMC_COMMAND_CMD_IND_POS: u16 = 8;
pub const SDMMC_COMMAND_CMD_IND_MSK: u16 = 0x3F00;
pub const SDMMC_COMMAND_RESERVED_MSK: u16 = 0xC004;

// Host control register
pub const SDMMC_HOST_CTRL_LED_CTRL: u8 = 0x01;
pub const SDMMC_HOST_CTRL_DATA_TX_WIDTH: u8 = 0x02;
pub const SDMMC_HOST_CTRL_HIGH_SPEED_EN: u8 = 0x04;
pub const SDMMC_HOST_CTRL_SD_8BIT_MODE: u8 = 0x20;
pub const SDMMC_HOST_CTRL_CARD_DETECT_TEST_LEVEL: u8 = 0x40;
pub const SDMMC_HOST_CTRL_CARD_DET_SIGNAL_DETECT: u8 = 0x80;
pub const SDMMC_HOST_CTRL_BUS_WIDTH_MSK: u8 =
    SDMMC_HOST_CTRL_DATA_TX_WIDTH | SDMMC_HOST_CTRL_SD_8BIT_MODE;
pub const SDMMC_HOST_CTRL_CARD_DETECT_MSK: u8 =
    SDMMC_HOST_CTRL_CARD_DETECT_TEST_LEVEL | SDMMC_HOST_CTRL_CARD_DET_SIGNAL_DETECT;

// Power control register
pub const SDMMC_POWER_CTRL_SD_BUS_POWER: u8 = 0x01;
pub const SDMMC_POWER_CTRL_SD_BUS_VOLTAGE_SEL_POS: u8 = 1;
pub const SDMMC_POWER_CTRL_SD_BUS_VOLTAGE_SEL_MSK: u8 = 0x0E;

// Block gap control register
pub const SDMMC_BLOCK_GAP_CTRL_STOP_AT_BLOCK_GAP: u8 = 0x01;
pub const SDMMC_BLOCK_GAP_CTRL_CONTINUE_REQ: u8 = 0x02;
pub const SDMMC_BLOCK_GAP_CTRL_READ_WAIT_CTRL: u8 = 0x04;
pub const SDMMC_BLOCK_GAP_CTRL_INT_AT_BLOCK_GAP: u8 = 0x08;

// Clock control register
pub const SDMMC_CLOCK_CTRL_INTERNAL_CLOCK_EN: u16 = 0x0001;
pub const SDMMC_CLOCK_CTRL_INTERNAL_CLOCK_STABLE: u16 = 0x0002;
pub const SDMMC_CLOCK_CTRL_SDCLOCK_EN: u16 = 0x0004;
pub const SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_POS: u16 = 8;
pub const SDMMC_CLOCK_CTRL_SDCLK_FREQ_SEL_MSK: u16 = 0xFF00;

// Timeout control register
pub const SDMMC_TIMEOUT_CTRL_DAT_TIMEOUT_CNT_VAL_MSK: u8 = 0x0F;
pub const SDMMC_TIMEOUT_CTRL_MAX: u8 = 0x0E;

// Software reset register
pub const SDMMC_SW_RESET_ALL: u8 = 0x01;
pub const SDMMC_SW_RST_CMD_LINE: u8 = 0x02;
pub const SDMMC_SW_RST_DAT_LINE: u8 = 0x04;

// Normal interrupt status register
pub const SDMMC_INT_STATUS_NORM_ERR_INT: u16 = 0x8000;
