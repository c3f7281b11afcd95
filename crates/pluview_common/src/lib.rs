// --- File: crates/pluview_common/src/lib.rs ---

pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions


// Re-export error types and utilities for easier access
pub use error::{parse_error, storage_error, validation_error, Context, PluviewError};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error, log_result};

pub use services::{Clock, FixedClock, SystemClock};
