pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod patcher;
pub mod target;
pub mod ui;
pub mod version;

pub use error::{BumpError, Result};
