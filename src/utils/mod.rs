//! Small helpers shared across the crate

pub mod helper;
pub mod display_name;

pub use display_name::derive_name;
