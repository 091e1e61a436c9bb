//! Low-level infrastructure: the radio wire codec.
pub mod codec;
