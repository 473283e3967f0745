/// UART-A, left as configured by the firmware that loaded us.
pub const UART_PPTR: usize = 0x0310_0000;
