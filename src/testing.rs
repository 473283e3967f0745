use core::cell::RefCell;

use common::driver::ns16550::{ULSR, UTHR};
use common::mmio::RegisterAccess;

/// UART that is always ready and keeps every byte written to THR.
pub struct RecordingUart {
  thr: RefCell<Vec<u8>>,
}

impl RecordingUart {
  pub fn new() -> Self {
    RecordingUart { thr: RefCell::new(Vec::new()) }
  }

  pub fn transmitted(&self) -> Vec<u8> {
    self.thr.borrow().clone()
  }
}

impl RegisterAccess for &RecordingUart {
  fn read(&self, offset: usize) -> u32 {
    assert_eq!(offset, ULSR);
    1 << 5
  }

  fn write(&self, offset: usize, value: u32) {
    assert_eq!(offset, UTHR);
    self.thr.borrow_mut().push(value as u8);
  }
}
