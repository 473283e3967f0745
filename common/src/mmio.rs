/// 32-bit register window over a device.
///
/// `offset` is in bytes from the start of the window.
pub trait RegisterAccess {
  fn read(&self, offset: usize) -> u32;
  fn write(&self, offset: usize, value: u32);
}

#[inline(always)]
pub unsafe fn read_word(ptr: usize) -> u32 {
  (ptr as *const u32).read_volatile()
}

#[inline(always)]
pub unsafe fn write_word(ptr: usize, val: u32) {
  (ptr as *mut u32).write_volatile(val);
}

/// Memory-mapped register window at a fixed base address.
///
/// Every access is a single volatile load or store, so the compiler neither
/// drops nor reorders them against each other.
#[derive(Debug, Clone, Copy)]
pub struct Mmio {
  base_addr: usize,
}

impl Mmio {
  /// `base_addr` must point at device memory that stays mapped for as long
  /// as this value is used.
  pub const fn new(base_addr: usize) -> Self { Mmio { base_addr } }
}

impl RegisterAccess for Mmio {
  #[inline(always)]
  fn read(&self, offset: usize) -> u32 {
    unsafe { read_word(self.base_addr + offset) }
  }

  #[inline(always)]
  fn write(&self, offset: usize, value: u32) {
    unsafe { write_word(self.base_addr + offset, value) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn window_is_byte_offset() {
    let mut regs = [0u32; 8];
    let io = Mmio::new(regs.as_mut_ptr() as usize);
    io.write(0x14, 0xdead_beef);
    io.write(0x0, 0x41);
    assert_eq!(io.read(0x14), 0xdead_beef);
    assert_eq!(io.read(0x4), 0);
    assert_eq!(regs[5], 0xdead_beef);
    assert_eq!(regs[0], 0x41);
  }

  #[test]
  fn reads_see_external_updates() {
    let mut regs = [0u32; 8];
    let base = regs.as_mut_ptr() as usize;
    let io = Mmio::new(base);
    assert_eq!(io.read(0x14), 0);
    unsafe { write_word(base + 0x14, 1 << 5) };
    assert_eq!(io.read(0x14), 1 << 5);
    assert_eq!(io.read(0x0), 0);
  }
}
