use spin::{Mutex, MutexGuard};
use static_assertions::const_assert_eq;

use common::driver::ns16550::Ns16550;
use common::mmio::Mmio;

use crate::board::UART_PPTR;

const_assert_eq!(UART_PPTR % 4, 0);

/// Board console, locked per formatted line and per C character.
static CONSOLE: Mutex<Ns16550<Mmio>> = Mutex::new(Ns16550::new(Mmio::new(UART_PPTR)));

pub fn console() -> MutexGuard<'static, Ns16550<Mmio>> {
  CONSOLE.lock()
}

/// Unlocked handle on the same UART, for the panic path only: the panicking
/// context may already hold `CONSOLE`.
pub fn emergency() -> Ns16550<Mmio> {
  Ns16550::new(Mmio::new(UART_PPTR))
}
