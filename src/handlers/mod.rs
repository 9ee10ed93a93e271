//! Event handlers for session and status changes

pub mod console;
pub mod noop;

// Re-export for convenience
pub use console::ConsoleEventHandler;
pub use noop::NoopEventHandler;
