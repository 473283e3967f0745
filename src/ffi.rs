//! Entry point for the bootloader's C `printf`.

use core::ffi::c_int;

use common::driver::ns16550::Ns16550;
use common::mmio::RegisterAccess;

/// Opaque stand-in for C `FILE`. Never dereferenced.
#[repr(C)]
pub struct File {
  _private: [u8; 0],
}

/// `fputc` on `uart`: LF becomes CR LF, only the low byte of `c` is sent and
/// `stream` is ignored. Always returns 0.
pub fn fputc<R: RegisterAccess>(uart: &Ns16550<R>, c: c_int, _stream: *mut File) -> c_int {
  uart.putc(c)
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn __fputc(c: c_int, stream: *mut File) -> c_int {
  let console = crate::driver::uart::console();
  fputc(&*console, c, stream)
}
