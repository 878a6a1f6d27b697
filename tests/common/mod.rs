//! Common test utilities and helpers
//!
//! - `app` - in-memory app fixture and request helpers
//! - `assertions` - response assertions

pub mod app;
pub mod assertions;

pub use app::*;
pub use assertions::*;
