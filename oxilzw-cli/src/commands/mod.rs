//! Command implementations for the OxiLZW CLI.

pub mod decode;
pub mod encode;
pub mod stats;

pub use decode::{cmd_decode, cmd_decode_single};
pub use encode::{cmd_encode, cmd_encode_single};
pub use stats::cmd_stats;
