//! Command line interface: inspect and simulate route access decisions.

pub mod actions;
pub mod commands;
pub mod dispatch;
mod start;

pub use start::start;
