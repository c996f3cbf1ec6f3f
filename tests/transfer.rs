mod common;

use common::FakeRegs;
use xmc_sdmmc::host::constant::*;
use xmc_sdmmc::host::{
    AutoCommand, CommandType, R2Response, ResponseRegister, ResponseType, SdmmcCommand,
    TimeoutCounter, TransferDirection, TransferMode, TransferType,
};

#[test]
fn send_command_writes_argument_then_command() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    let cmd = SdmmcCommand::new(8, ResponseType::Short48)
        .with_crc_check()
        .with_index_check();
    assert_eq!(host.send_command(&cmd, 0x0000_01AA), Ok(()));

    assert_eq!(regs.read32(SDMMC_ARGUMENT1), 0x0000_01AA);
    assert_eq!(regs.read16(SDMMC_COMMAND), 0x081A);
    assert_eq!(SdmmcCommand::try_from(regs.read16(SDMMC_COMMAND)), Ok(cmd));
}

#[test]
fn send_abort_command() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    let cmd = SdmmcCommand::new(12, ResponseType::Short48Busy).with_kind(CommandType::Abort);
    host.send_command(&cmd, 0).unwrap();

    assert_eq!(regs.read16(SDMMC_COMMAND), 0x0CC3);
}

#[test]
fn r2_response_keeps_register_order() {
    let regs = FakeRegs::new();
    let host = regs.host();

    regs.write32(SDMMC_RESPONSE, 0x1111_1111);
    regs.write32(SDMMC_RESPONSE + 4, 0x2222_2222);
    regs.write32(SDMMC_RESPONSE + 8, 0x3333_3333);
    regs.write32(SDMMC_RESPONSE + 12, 0x4444_4444);

    assert_eq!(
        host.get_r2_response(),
        R2Response {
            response_0: 0x1111_1111,
            response_2: 0x2222_2222,
            response_4: 0x3333_3333,
            response_6: 0x4444_4444,
        }
    );

    let mut out = R2Response::default();
    host.read_r2_response(&mut out);
    assert_eq!(out.as_words(), [0x1111_1111, 0x2222_2222, 0x3333_3333, 0x4444_4444]);
}

#[test]
fn single_response_registers() {
    let regs = FakeRegs::new();
    let host = regs.host();

    regs.write32(SDMMC_RESPONSE, 0x0000_0900);
    regs.write32(SDMMC_RESPONSE + 12, 0x0000_0B00);

    assert_eq!(host.get_response(ResponseRegister::Response0), 0x0000_0900);
    assert_eq!(host.get_response(ResponseRegister::Response2), 0);
    assert_eq!(host.get_auto_command_response(), 0x0000_0B00);
}

#[test]
fn transfer_mode_writes_block_registers() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    host.set_data_transfer_mode(&TransferMode::multiple(512, 16));

    assert_eq!(regs.read16(SDMMC_BLOCK_SIZE), 512);
    assert_eq!(regs.read16(SDMMC_BLOCK_COUNT), 16);
    assert_eq!(
        regs.read16(SDMMC_TRANSFER_MODE),
        SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT | SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN | 0x0004
    );
}

#[test]
fn single_transfer_always_clears_block_count_enable() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    for prior in [0x0000, 0x0002, 0x0036, 0xFFFF] {
        regs.write16(SDMMC_TRANSFER_MODE, prior);
        host.set_data_transfer_mode(&TransferMode::single(512));

        let trns = regs.read16(SDMMC_TRANSFER_MODE);
        assert_eq!(trns & SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN, 0, "prior {:#06x}", prior);
        assert_eq!(trns & SDMMC_TRANSFER_MODE_MULTI_BLOCK_SELECT, 0);
        assert_eq!(trns & SDMMC_TRANSFER_MODE_ACMD_EN_MSK, 0);
    }
}

#[test]
fn infinite_transfer_leaves_block_count_enable() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    let mode = TransferMode {
        block_size: 64,
        block_count: 0,
        kind: TransferType::Infinite,
        auto_cmd: AutoCommand::Disabled,
    };

    regs.write16(SDMMC_TRANSFER_MODE, SDMMC_TRANSFER_MODE_BLOCK_COUNT_EN);
    host.set_data_transfer_mode(&mode);
    assert_eq!(regs.read16(SDMMC_TRANSFER_MODE), 0x0022);

    regs.write16(SDMMC_TRANSFER_MODE, 0);
    host.set_data_transfer_mode(&mode);
    assert_eq!(regs.read16(SDMMC_TRANSFER_MODE), 0x0020);
}

#[test]
fn transfer_mode_preserves_direction() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    host.set_transfer_direction(TransferDirection::Read);
    host.set_data_transfer_mode(&TransferMode {
        block_size: 512,
        block_count: 4,
        kind: TransferType::StopMultiple,
        auto_cmd: AutoCommand::Disabled,
    });
    assert_eq!(regs.read16(SDMMC_TRANSFER_MODE), 0x0032);

    host.set_transfer_direction(TransferDirection::Write);
    assert_eq!(regs.read16(SDMMC_TRANSFER_MODE), 0x0022);
}

#[test]
fn auto_command_field_is_replaced() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    regs.write16(SDMMC_TRANSFER_MODE, 0x0008);
    host.set_data_transfer_mode(&TransferMode::multiple(512, 2));
    assert_eq!(regs.read16(SDMMC_TRANSFER_MODE) & SDMMC_TRANSFER_MODE_ACMD_EN_MSK, 0x0004);
}

#[test]
fn data_line_timeout() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    regs.write8(SDMMC_TIMEOUT_CTRL, 0xF0);
    host.set_data_line_timeout(TimeoutCounter::MAX);
    assert_eq!(regs.read8(SDMMC_TIMEOUT_CTRL), 0xFE);

    host.set_data_line_timeout(TimeoutCounter::try_from(3).unwrap());
    assert_eq!(regs.read8(SDMMC_TIMEOUT_CTRL), 0xF3);
}

#[test]
fn fifo_access() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    host.write_fifo(0xDEAD_BEEF);
    assert_eq!(regs.read32(SDMMC_DATA_BUFFER), 0xDEAD_BEEF);

    regs.write32(SDMMC_DATA_BUFFER, 0x0BAD_F00D);
    assert_eq!(host.read_fifo(), 0x0BAD_F00D);
}

#[test]
fn block_gap_control() {
    let regs = FakeRegs::new();
    let mut host = regs.host();

    host.enable_interrupt_at_block_gap();
    host.stop_at_block_gap();
    assert_eq!(regs.read8(SDMMC_BLOCK_GAP_CTRL), 0x09);

    host.continue_request();
    assert_eq!(regs.read8(SDMMC_BLOCK_GAP_CTRL), 0x0A);

    host.enable_read_wait();
    host.disable_interrupt_at_block_gap();
    assert_eq!(regs.read8(SDMMC_BLOCK_GAP_CTRL), 0x06);

    host.disable_read_wait();
    assert_eq!(regs.read8(SDMMC_BLOCK_GAP_CTRL), 0x02);
}
