cfg_if::cfg_if! {
  if #[cfg(feature = "tx2")] {
    mod tx2;
    pub use self::tx2::*;
  } else {
    compile_error!("no board selected, enable one of: tx2");
  }
}
