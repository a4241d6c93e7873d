//! Command implementations

pub mod generate;
pub mod new;
