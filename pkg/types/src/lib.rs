//! API object model shared by the report core, the client and the CLI.

pub mod config;
pub mod pod;
pub mod quota;
pub mod validate;
