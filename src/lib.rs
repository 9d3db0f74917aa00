//! msync - version bump propagation and local module mirroring
//!
//! Manages a workspace of interdependent modules that reference each other
//! via semantic-version ranges: bumping one module cascades a conservative
//! re-release through every dependant, and built modules can be mirrored
//! into dependants' install locations with a change notification for a
//! running file-watcher.

pub mod audit;
pub mod bump;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
pub mod mirror;
pub mod module;
pub mod notify;
pub mod resolver;
pub mod version;
