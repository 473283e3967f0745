#![cfg_attr(not(test), no_std)]

pub mod driver;
pub mod mmio;
