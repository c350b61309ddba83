pub mod commands;
pub mod process;
pub mod summary;
pub mod validate;

pub use commands::{Cli, Commands};
