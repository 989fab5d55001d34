pub mod config;
pub mod error;
pub mod etymology;
pub mod llm;
pub mod logging;
pub mod server;
pub mod ui;

pub use error::{Error, Result};
