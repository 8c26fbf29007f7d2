//! greeter-core - Shared process setup for the greeter tools
//!
//! Every greeter binary starts the same way: decide whether debug mode is on,
//! install logging accordingly, and report fatal errors in one format.

pub mod env;
pub mod logging;
pub mod report;

pub use logging::LogConfig;
pub use report::{print_error, terminate_execution, ApplicationError};
