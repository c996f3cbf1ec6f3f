#![cfg_attr(not(test), no_std)]

//! Register access layer for the XMC4500 SD/MMC host controller.
//!
//! [`Sdmmc`] wraps the memory-mapped register block and exposes the primitive
//! operations a card driver sequences: power and clock setup, event masks,
//! command issue, response readout and data-transfer configuration.

cfg_if::cfg_if! {
    if #[cfg(any(debug_assertions, feature = "assert"))] {
        macro_rules! sdmmc_assert {
            ($msg:literal, $cond:expr) => {
                assert!($cond, $msg)
            };
        }
    } else {
        macro_rules! sdmmc_assert {
            ($msg:literal, $cond:expr) => {
                let _ = || $cond;
            };
        }
    }
}

pub mod control;
pub mod host;
pub mod shared;
mod err;

pub use control::{NoControl, PeripheralControl};
pub use err::SdmmcError;
pub use host::Sdmmc;
pub use shared::SharedSdmmc;
