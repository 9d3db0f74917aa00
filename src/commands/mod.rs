//! Command implementations

pub mod bump;
pub mod completions;
pub mod helpers;
pub mod ls;
pub mod sync;
