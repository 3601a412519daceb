//! Common/Shared UI Components
//!
//! Reusable components used throughout the application.

mod header;
mod icons;

pub use header::Header;
pub use icons::*;
