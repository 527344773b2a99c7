//! Text rendering for terminal output
//!
//! The library core produces structured data; everything user-facing is
//! formatted here so reports stay testable independent of presentation.

pub mod overview;

pub use overview::format_overview;
