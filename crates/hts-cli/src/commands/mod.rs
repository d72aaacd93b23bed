//! Command implementations for the CLI.

mod config;
mod decode;
mod encode;

pub use config::cmd_config;
pub use decode::{DecodeArgs, cmd_decode};
pub use encode::{EncodeArgs, cmd_encode};
