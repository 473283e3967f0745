//! Transmit side of the 16550-compatible UART found on Tegra parts.
//!
//! Registers are 32 bits wide with a 4-byte stride, so LSR sits at 0x14
//! rather than the classic 0x5.

use core::fmt;

use tock_registers::register_bitfields;
use tock_registers::LocalRegisterCopy;

use crate::mmio::RegisterAccess;

/// Transmit holding register (write).
pub const UTHR: usize = 0x0;
/// Line status register (read).
pub const ULSR: usize = 0x14;

register_bitfields! {
  u32,
  pub LSR [
    /// Transmit holding register empty
    THRE OFFSET(5) NUMBITS(1) [],
  ]
}

pub struct Ns16550<R> {
  io: R,
}

impl<R> Ns16550<R> {
  pub const fn new(io: R) -> Self { Ns16550 { io } }
}

impl<R: RegisterAccess> Ns16550<R> {
  pub fn tx_ready(&self) -> bool {
    LocalRegisterCopy::<u32, LSR::Register>::new(self.io.read(ULSR)).is_set(LSR::THRE)
  }

  /// Blocks until THR is empty, then hands `c` to the transmitter.
  ///
  /// There is no timeout: a UART that never raises THRE stalls the caller
  /// forever.
  pub fn send(&self, c: u8) {
    while !self.tx_ready() {
      // Wait until it is possible to write data.
    }
    self.io.write(UTHR, c as u32);
  }

  /// Emits `c` with LF expanded to CR LF. Only the low byte reaches the wire.
  ///
  /// Always returns 0.
  pub fn putc(&self, c: i32) -> i32 {
    if c == b'\n' as i32 {
      self.send(b'\r');
    }
    self.send((c & 0xff) as u8);
    0
  }
}

impl<R: RegisterAccess> fmt::Write for Ns16550<R> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    for b in s.bytes() {
      self.putc(b as i32);
    }
    Ok(())
  }
}
