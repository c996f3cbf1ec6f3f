//! Clock gating and peripheral reset hooks.
//!
//! Not every XMC4 derivative can gate the SDMMC clock or hold the block in
//! reset through the SCU. The host is handed one of these at construction and
//! calls it from [`Sdmmc::enable`](crate::Sdmmc::enable) and
//! [`Sdmmc::disable`](crate::Sdmmc::disable).

/// System control unit operations for the SDMMC peripheral.
pub trait PeripheralControl {
    fn ungate_clock(&mut self);
    fn gate_clock(&mut self);
    fn assert_reset(&mut self);
    fn deassert_reset(&mut self);
}

/// Platforms without clock gating or reset control.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoControl;

impl PeripheralControl for NoControl {
    fn ungate_clock(&mut self) {}

    fn gate_clock(&mut self) {}

    fn assert_reset(&mut self) {}

    fn deassert_reset(&mut self) {}
}

impl<T: PeripheralControl + ?Sized> PeripheralControl for &mut T {
    fn ungate_clock(&mut self) {
        (**self).ungate_clock()
    }

    fn gate_clock(&mut self) {
        (**self).gate_clock()
    }

    fn assert_reset(&mut self) {
        (**self).assert_reset()
    }

    fn deassert_reset(&mut self) {
        (**self).deassert_reset()
    }
}
