//! Codecs translating logical messages to and from radio payloads.
pub mod frame;

pub use frame::{decode, encode};
