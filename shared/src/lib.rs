//! Shared types for the Plateful UI
//!
//! This crate contains the catalog data types exchanged with the
//! remote catalog service:
//! - `Food`: one sellable catalog entry
//! - `NewFood`: the create/update payload (no server-assigned id)

pub mod food;

pub use food::*;
