//! Host handle shared between execution contexts.
//!
//! Read-modify-write sequences on HOST_CTRL or TRANSFER_MODE are not atomic.
//! When a thread context and an interrupt handler both drive the peripheral,
//! every multi-step operation has to run under one lock.

use spin::Mutex;

use crate::host::Sdmmc;

pub struct SharedSdmmc<C> {
    inner: Mutex<Sdmmc<C>>,
}

impl<C> SharedSdmmc<C> {
    pub const fn new(host: Sdmmc<C>) -> Self {
        Self {
            inner: Mutex::new(host),
        }
    }

    /// Run `f` with exclusive access to the host.
    pub fn with<R>(&self, f: impl FnOnce(&mut Sdmmc<C>) -> R) -> R {
        let mut host = self.inner.lock();
        f(&mut host)
    }

    /// Like [`with`](Self::with), but gives up instead of spinning when the
    /// host is already held.
    pub fn try_with<R>(&self, f: impl FnOnce(&mut Sdmmc<C>) -> R) -> Option<R> {
        let mut host = self.inner.try_lock()?;
        Some(f(&mut host))
    }

    pub fn into_inner(self) -> Sdmmc<C> {
        self.inner.into_inner()
    }
}

