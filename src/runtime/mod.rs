//! Process runtime: execution modes and lifecycle hooks

pub mod lifetime;
pub mod modes;
