//! Widget configuration
//!
//! Configuration is written as a small TOML file and embedded in the
//! firmware image. Every field has a default, so an empty file is valid.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
