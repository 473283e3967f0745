use core::fmt::Write;
use core::panic::PanicInfo;

#[panic_handler]
pub fn panic_handler(info: &PanicInfo) -> ! {
  let mut uart = crate::driver::uart::emergency();
  let _ = writeln!(uart, "[E] PANIC: {}", info);
  loop {}
}
