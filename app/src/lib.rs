//! Terminal host for `todolist-core`.
//!
//! Executes the core's HTTP requests with ureq, turns typed commands into
//! controller events and prints the page after each change.

pub mod command;
pub mod config;
pub mod session;
pub mod transport;

pub use command::{Command, ParseError};
pub use config::Config;
pub use session::Session;
pub use transport::UreqTransport;
