pub mod checklist;
pub mod config;
pub mod error;
pub mod llm;
pub mod report;
pub mod server;
pub mod validator;

pub use error::{Error, Result};
