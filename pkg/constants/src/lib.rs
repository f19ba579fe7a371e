//! Centralized constants for the resreport project.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod api;
pub mod network;
pub mod paths;
pub mod units;
