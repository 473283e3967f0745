use core::fmt;

use crate::driver::uart;

pub fn print_arg(args: fmt::Arguments) {
  let mut console = uart::console();
  // The UART never fails; a Display impl that does just truncates the line.
  let _ = fmt::Write::write_fmt(&mut *console, args);
}
