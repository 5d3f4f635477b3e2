// Utils compartidos

pub mod constants;
pub mod near_ffi;

pub use constants::*;
