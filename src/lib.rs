#![cfg_attr(not(test), no_std)]

#[macro_use]
mod misc;

pub mod board;
pub mod driver;
pub mod ffi;
pub mod logger;
#[cfg(not(test))]
mod panic;
pub mod print;

#[cfg(test)]
mod testing;
