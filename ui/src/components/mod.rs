//! UI Components
//!
//! This module contains all UI components organized by feature:
//! - `dashboard`: Catalog dashboard, food cards, and modal forms
//! - `common`: Shared/reusable components

pub mod common;
pub mod dashboard;
