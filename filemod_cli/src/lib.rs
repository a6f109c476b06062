//! filemod command line interface
//!
//! The binary is a thin driver; the session loop, prompts and configuration
//! live here so they can be exercised from tests.

pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod session;
pub mod terminal;

pub use session::{LoopControl, Session};
