//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::WarmupArgs;
pub use types::PositiveUsize;

pub(crate) use defaults::{
    DEFAULT_CONFIG_FILES, DEFAULT_CONNECT_TIMEOUT, DEFAULT_PAUSE, DEFAULT_REQUEST_TIMEOUT,
};
