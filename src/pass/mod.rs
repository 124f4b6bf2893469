//! Password generation and output.

pub mod charset;
pub mod config;
mod generate;
pub mod output;

pub use charset::{CharacterClass, ClassSet};
pub use config::{
    GenerationConfig, LengthPolicy, check_length, collect_enabled_classes, parse_length,
    validate_length,
};
pub use generate::{Password, generate, generate_batch};
